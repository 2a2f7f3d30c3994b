//! Screen-space scene for the airfoil view.
//!
//! Pure data: the egui painter and the SVG writer both draw from the same
//! [`AirfoilScene`], so exported files match what is on screen.

use super::color::{Rgba, SequentialScale};
use super::scale::LinearScale;
use aero_core::{SimResponse, extent};

pub const X_FALLBACK: (f64, f64) = (0.0, 1.0);
pub const Y_FALLBACK: (f64, f64) = (-0.2, 0.2);
pub const CP_FALLBACK: (f64, f64) = (-1.0, 3.0);

#[derive(Debug, Clone, PartialEq)]
pub struct SceneStyle {
    pub width: f64,
    pub height: f64,
    pub pad: f64,
    /// Added on both sides of the data x extent
    pub x_margin: f64,
    /// Added on both sides of the data y extent
    pub y_margin: f64,
    pub outline: Rgba,
    pub outline_width: f64,
    pub segment_width: f64,
    pub axis: Rgba,
    pub label: Rgba,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 560.0,
            pad: 32.0,
            x_margin: 0.05,
            y_margin: 0.15,
            outline: Rgba::rgba(0x99, 0xaa, 0xaa, 0x44),
            outline_width: 2.0,
            segment_width: 3.0,
            axis: Rgba::rgb(0xcc, 0xcc, 0xdd),
            label: Rgba::rgb(0x88, 0x88, 0x99),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: [f64; 2],
    pub to: [f64; 2],
    pub cp: f64,
    pub color: Rgba,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub pos: [f64; 2],
    pub text: String,
    pub anchor: Anchor,
}

#[derive(Debug, Clone)]
pub struct AirfoilScene {
    pub style: SceneStyle,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub color: SequentialScale,
    /// (min, max) of Cp, or the fallback for empty data
    pub cp_range: (f64, f64),
    /// Surface points in screen space, in input order
    pub outline: Vec<[f64; 2]>,
    pub segments: Vec<Segment>,
    pub axes: Vec<[[f64; 2]; 2]>,
    pub labels: Vec<Label>,
}

impl AirfoilScene {
    pub fn build(data: &SimResponse, style: &SceneStyle) -> Self {
        let (x_min, x_max) = extent(&data.xc).unwrap_or(X_FALLBACK);
        let (y_min, y_max) = extent(&data.yc).unwrap_or(Y_FALLBACK);
        let (cp_min, cp_max) = extent(&data.cp).unwrap_or(CP_FALLBACK);

        let (w, h, pad) = (style.width, style.height, style.pad);
        let x_scale = LinearScale::new(
            (x_min - style.x_margin, x_max + style.x_margin),
            (pad, w - pad),
        );
        // Screen y grows downward; flip so the airfoil's +y points up.
        let y_scale = LinearScale::new(
            (y_min - style.y_margin, y_max + style.y_margin),
            (h - pad, pad),
        );
        let color = SequentialScale::viridis(cp_max, cp_min);

        let outline: Vec<[f64; 2]> = data
            .xc
            .iter()
            .zip(&data.yc)
            .map(|(&x, &y)| [x_scale.map(x), y_scale.map(y)])
            .collect();

        let segments = outline
            .windows(2)
            .zip(&data.cp)
            .map(|(pair, &cp)| Segment {
                from: pair[0],
                to: pair[1],
                cp,
                color: color.color(cp),
            })
            .collect();

        let axes = vec![
            [[pad, h - pad], [w - pad, h - pad]],
            [[pad, pad], [pad, h - pad]],
        ];
        let labels = vec![
            Label {
                pos: [w - pad, h - pad - 6.0],
                text: "x".to_string(),
                anchor: Anchor::End,
            },
            Label {
                pos: [pad + 6.0, pad + 12.0],
                text: "y".to_string(),
                anchor: Anchor::Start,
            },
        ];

        Self {
            style: style.clone(),
            x_scale,
            y_scale,
            color,
            cp_range: (cp_min, cp_max),
            outline,
            segments,
            axes,
            labels,
        }
    }

    /// `n` evenly spaced (cp, color) stops from min to max Cp, for a legend.
    pub fn legend(&self, n: usize) -> Vec<(f64, Rgba)> {
        let (lo, hi) = self.cp_range;
        match n {
            0 => Vec::new(),
            1 => vec![(lo, self.color.color(lo))],
            _ => (0..n)
                .map(|i| {
                    let cp = lo + (hi - lo) * i as f64 / (n - 1) as f64;
                    (cp, self.color.color(cp))
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::color::viridis;

    fn sample() -> SimResponse {
        SimResponse {
            cp: vec![3.0, 1.0, -1.0, 0.5],
            xc: vec![1.0, 0.5, 0.0, 0.5],
            yc: vec![0.0, 0.05, 0.0, -0.05],
            cl: 0.4,
            gamma: 0.2,
            chord: 1.0,
        }
    }

    #[test]
    fn segment_count_and_coloring() {
        let scene = AirfoilScene::build(&sample(), &SceneStyle::default());
        assert_eq!(scene.outline.len(), 4);
        assert_eq!(scene.segments.len(), 3);
        // Segment i takes cp[i]; the last cp value has no segment.
        assert_eq!(scene.segments[0].cp, 3.0);
        assert_eq!(scene.segments[2].cp, -1.0);
        assert_eq!(scene.segments[0].color, viridis(0.0));
        assert_eq!(scene.segments[2].color, viridis(1.0));
        assert_eq!(scene.segments[0].from, scene.outline[0]);
        assert_eq!(scene.segments[0].to, scene.outline[1]);
    }

    #[test]
    fn domain_is_padded_and_y_points_up() {
        let scene = AirfoilScene::build(&sample(), &SceneStyle::default());
        assert!((scene.x_scale.domain.0 - -0.05).abs() < 1e-12);
        assert!((scene.x_scale.domain.1 - 1.05).abs() < 1e-12);
        assert!((scene.y_scale.domain.0 - -0.2).abs() < 1e-12);
        assert!((scene.y_scale.domain.1 - 0.2).abs() < 1e-12);
        assert_eq!(scene.x_scale.range, (32.0, 868.0));
        assert_eq!(scene.y_scale.range, (528.0, 32.0));
        // Upper surface point sits above the lower one on screen.
        assert!(scene.outline[1][1] < scene.outline[3][1]);
    }

    #[test]
    fn empty_data_uses_fallbacks() {
        let empty = SimResponse {
            cp: vec![],
            xc: vec![],
            yc: vec![],
            cl: 0.0,
            gamma: 0.0,
            chord: 1.0,
        };
        let scene = AirfoilScene::build(&empty, &SceneStyle::default());
        assert!(scene.outline.is_empty());
        assert!(scene.segments.is_empty());
        assert_eq!(scene.cp_range, CP_FALLBACK);
        assert!((scene.x_scale.domain.0 - -0.05).abs() < 1e-12);
        assert!((scene.y_scale.domain.1 - 0.35).abs() < 1e-12);
        assert_eq!(scene.axes.len(), 2);
    }

    #[test]
    fn flat_cp_colors_everything_mid_ramp() {
        let mut data = sample();
        data.cp = vec![0.2; 4];
        let scene = AirfoilScene::build(&data, &SceneStyle::default());
        assert!(scene.segments.iter().all(|s| s.color == viridis(0.5)));
    }

    #[test]
    fn legend_runs_min_to_max() {
        let scene = AirfoilScene::build(&sample(), &SceneStyle::default());
        let stops = scene.legend(5);
        assert_eq!(stops.len(), 5);
        assert_eq!(stops[0].0, -1.0);
        assert_eq!(stops[4].0, 3.0);
        assert_eq!(stops[0].1, viridis(1.0));
        assert_eq!(stops[4].1, viridis(0.0));
    }
}
