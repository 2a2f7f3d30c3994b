//! Airfoil contours and panel geometry.

use crate::error::{PanelError, PanelResult};
use aero_core::NacaCode;
use std::f64::consts::PI;

/// Closed polygon; the last point repeats the first.
#[derive(Debug, Clone)]
pub struct Contour {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Contour {
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        match (self.x.first(), self.x.last(), self.y.first(), self.y.last()) {
            (Some(x0), Some(xn), Some(y0), Some(yn)) => x0 == xn && y0 == yn,
            _ => false,
        }
    }

    /// Append the first point if the polygon is open.
    pub fn close(&mut self) {
        if !self.is_empty() && !self.is_closed() {
            self.x.push(self.x[0]);
            self.y.push(self.y[0]);
        }
    }

    /// Extent of the contour along x.
    pub fn chord(&self) -> f64 {
        aero_core::extent(&self.x).map_or(0.0, |(lo, hi)| hi - lo)
    }
}

/// NACA 4-digit half-thickness at chord fraction `x`.
fn thickness_distribution(t: f64, x: f64) -> f64 {
    5.0 * t
        * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
            - 0.1015 * x.powi(4))
}

/// Mean camber line height and slope at chord fraction `x`.
fn camber_line(m: f64, p: f64, x: f64) -> (f64, f64) {
    if m == 0.0 || p == 0.0 {
        return (0.0, 0.0);
    }
    if x < p {
        let k = m / (p * p);
        (k * (2.0 * p * x - x * x), 2.0 * k * (p - x))
    } else {
        let k = m / ((1.0 - p) * (1.0 - p));
        (k * ((1.0 - 2.0 * p) + 2.0 * p * x - x * x), 2.0 * k * (p - x))
    }
}

/// Closed NACA 4-digit contour.
///
/// `npts / 2` cosine-spaced stations; upper surface runs LE→TE, lower surface
/// TE→LE, and the contour closes at the leading edge. The trailing edge is
/// open (finite thickness), so both TE points are kept. Yields
/// `2 * (npts / 2)` points and one fewer panel.
pub fn naca4_contour(code: &NacaCode, npts: usize, chord: f64) -> PanelResult<Contour> {
    let stations = npts / 2;
    if stations < 3 {
        return Err(PanelError::InvalidInput {
            what: format!("npts must be at least 6, got {npts}"),
        });
    }
    if !(chord.is_finite() && chord > 0.0) {
        return Err(PanelError::InvalidInput {
            what: format!("chord must be positive, got {chord}"),
        });
    }

    let m = code.max_camber();
    let p = code.camber_position();
    let t = code.thickness();

    let mut upper = Vec::with_capacity(stations);
    let mut lower = Vec::with_capacity(stations);
    for k in 0..stations {
        let beta = PI * k as f64 / (stations - 1) as f64;
        let xs = 0.5 * (1.0 - beta.cos());
        let yt = thickness_distribution(t, xs);
        let (yc, dyc) = camber_line(m, p, xs);
        let theta = dyc.atan();
        let (sin, cos) = theta.sin_cos();
        upper.push((xs - yt * sin, yc + yt * cos));
        lower.push((xs + yt * sin, yc - yt * cos));
    }

    let n = 2 * stations;
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    for &(px, py) in upper.iter().chain(lower[1..].iter().rev()) {
        x.push(px * chord);
        y.push(py * chord);
    }

    let mut contour = Contour { x, y };
    contour.close();
    Ok(contour)
}

/// Straight panels between consecutive contour points, `i -> i + 1`.
#[derive(Debug, Clone)]
pub struct Panels {
    pub x0: Vec<f64>,
    pub y0: Vec<f64>,
    pub x1: Vec<f64>,
    pub y1: Vec<f64>,
    pub length: Vec<f64>,
    /// Unit tangent
    pub tx: Vec<f64>,
    pub ty: Vec<f64>,
    /// Unit normal, tangent rotated +90°
    pub nx: Vec<f64>,
    pub ny: Vec<f64>,
    /// Control point (panel midpoint)
    pub xc: Vec<f64>,
    pub yc: Vec<f64>,
}

impl Panels {
    pub fn from_contour(contour: &Contour) -> PanelResult<Self> {
        if contour.x.len() != contour.y.len() {
            return Err(PanelError::Geometry {
                what: format!(
                    "contour x/y length mismatch ({} vs {})",
                    contour.x.len(),
                    contour.y.len()
                ),
            });
        }
        if contour.len() < 3 {
            return Err(PanelError::Geometry {
                what: format!("need at least 3 contour points, got {}", contour.len()),
            });
        }

        let n = contour.len() - 1;
        let mut panels = Panels {
            x0: Vec::with_capacity(n),
            y0: Vec::with_capacity(n),
            x1: Vec::with_capacity(n),
            y1: Vec::with_capacity(n),
            length: Vec::with_capacity(n),
            tx: Vec::with_capacity(n),
            ty: Vec::with_capacity(n),
            nx: Vec::with_capacity(n),
            ny: Vec::with_capacity(n),
            xc: Vec::with_capacity(n),
            yc: Vec::with_capacity(n),
        };

        for i in 0..n {
            let (ax, ay) = (contour.x[i], contour.y[i]);
            let (bx, by) = (contour.x[i + 1], contour.y[i + 1]);
            let (dx, dy) = (bx - ax, by - ay);
            let s = dx.hypot(dy);
            if !(s > 0.0) {
                return Err(PanelError::Geometry {
                    what: format!("panel {i} has zero length"),
                });
            }
            let (tx, ty) = (dx / s, dy / s);

            panels.x0.push(ax);
            panels.y0.push(ay);
            panels.x1.push(bx);
            panels.y1.push(by);
            panels.length.push(s);
            panels.tx.push(tx);
            panels.ty.push(ty);
            panels.nx.push(-ty);
            panels.ny.push(tx);
            panels.xc.push(0.5 * (ax + bx));
            panels.yc.push(0.5 * (ay + by));
        }

        Ok(panels)
    }

    pub fn len(&self) -> usize {
        self.length.len()
    }

    pub fn is_empty(&self) -> bool {
        self.length.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn code(s: &str) -> NacaCode {
        NacaCode::parse(s).unwrap()
    }

    #[test]
    fn contour_point_count_and_closure() {
        let c = naca4_contour(&code("naca0012"), 300, 1.0).unwrap();
        assert_eq!(c.len(), 300);
        assert!(c.is_closed());
        assert_eq!((c.x[0], c.y[0]), (0.0, 0.0));
    }

    #[test]
    fn odd_npts_rounds_down() {
        let c = naca4_contour(&code("naca0012"), 301, 1.0).unwrap();
        assert_eq!(c.len(), 300);
    }

    #[test]
    fn symmetric_section_is_mirror_image() {
        let c = naca4_contour(&code("naca0012"), 120, 1.0).unwrap();
        let n = c.len() - 1;
        for k in 0..=n {
            let mirror = n - k;
            assert!((c.x[k] - c.x[mirror]).abs() < 1e-12);
            assert!((c.y[k] + c.y[mirror]).abs() < 1e-12);
        }
    }

    #[test]
    fn max_thickness_near_design_value() {
        let c = naca4_contour(&code("naca0012"), 400, 1.0).unwrap();
        let (lo, hi) = aero_core::extent(&c.y).unwrap();
        assert!(((hi - lo) - 0.12).abs() < 2e-3, "thickness {}", hi - lo);
    }

    #[test]
    fn cambered_section_sits_above_chord() {
        let c = naca4_contour(&code("naca4412"), 200, 1.0).unwrap();
        let (lo, hi) = aero_core::extent(&c.y).unwrap();
        assert!(hi > -lo);
    }

    #[test]
    fn chord_scales_coordinates() {
        let c = naca4_contour(&code("naca0012"), 100, 2.0).unwrap();
        assert!((c.chord() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_too_few_points() {
        assert!(matches!(
            naca4_contour(&code("naca0012"), 5, 1.0),
            Err(PanelError::InvalidInput { .. })
        ));
    }

    #[test]
    fn panels_have_unit_tangents_and_outward_normals() {
        let c = naca4_contour(&code("naca2412"), 80, 1.0).unwrap();
        let p = Panels::from_contour(&c).unwrap();
        assert_eq!(p.len(), c.len() - 1);
        for i in 0..p.len() {
            let t = p.tx[i].hypot(p.ty[i]);
            assert!((t - 1.0).abs() < 1e-12);
            assert!((p.tx[i] * p.nx[i] + p.ty[i] * p.ny[i]).abs() < 1e-12);
        }
        // Upper surface mid-chord panel runs LE->TE, so its normal points up.
        let mid_upper = p.len() / 4;
        assert!(p.ny[mid_upper] > 0.0);
    }

    #[test]
    fn duplicate_point_is_degenerate() {
        let c = Contour {
            x: vec![0.0, 1.0, 1.0, 0.0],
            y: vec![0.0, 0.0, 0.0, 0.0],
        };
        assert!(matches!(
            Panels::from_contour(&c),
            Err(PanelError::Geometry { .. })
        ));
    }

    proptest! {
        #[test]
        fn any_four_digit_code_meshes_cleanly(
            m in 0u8..10,
            p in 1u8..10,
            t in 5u8..30,
            npts in 20usize..400,
        ) {
            let id = format!("naca{m}{p}{t:02}");
            let c = naca4_contour(&code(&id), npts, 1.0).unwrap();
            prop_assert_eq!(c.len(), 2 * (npts / 2));
            prop_assert!(c.x.iter().chain(&c.y).all(|v| v.is_finite()));
            prop_assert!(Panels::from_contour(&c).is_ok());
        }
    }
}
