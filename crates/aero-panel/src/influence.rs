//! Point-vortex induced velocities and the normal-velocity influence matrix.

use crate::geometry::Panels;
use nalgebra::DMatrix;
use rayon::prelude::*;
use std::f64::consts::PI;

/// Velocity `(u, v)` induced at `(px, py)` by a point vortex of strength
/// `gamma` at `(qx, qy)`. `core_sq` regularizes the singularity; a vortex
/// induces nothing at its own location.
#[inline]
pub fn vortex_velocity(px: f64, py: f64, qx: f64, qy: f64, gamma: f64, core_sq: f64) -> (f64, f64) {
    let rx = px - qx;
    let ry = py - qy;
    let r2 = rx * rx + ry * ry + core_sq;
    let coef = gamma / (2.0 * PI * r2);
    (-coef * ry, coef * rx)
}

/// Total velocity induced at every control point by vortices of strength
/// `gamma` sitting at the control points themselves.
pub fn induced_velocities(panels: &Panels, gamma: &[f64], core_sq: f64) -> Vec<(f64, f64)> {
    (0..panels.len())
        .into_par_iter()
        .map(|i| {
            let (px, py) = (panels.xc[i], panels.yc[i]);
            gamma
                .iter()
                .enumerate()
                .fold((0.0, 0.0), |(u, v), (j, &g)| {
                    let (du, dv) = vortex_velocity(px, py, panels.xc[j], panels.yc[j], g, core_sq);
                    (u + du, v + dv)
                })
        })
        .collect()
}

/// `(N + 1) x N` system matrix: rows `0..N` hold the normal velocity at each
/// control point per unit vortex strength, row `N` is the Kutta condition
/// `gamma_0 - gamma_{N-1} = 0`.
pub fn system_matrix(panels: &Panels, core_sq: f64) -> DMatrix<f64> {
    let n = panels.len();

    let columns: Vec<Vec<f64>> = (0..n)
        .into_par_iter()
        .map(|j| {
            (0..n)
                .map(|i| {
                    let (u, v) = vortex_velocity(
                        panels.xc[i],
                        panels.yc[i],
                        panels.xc[j],
                        panels.yc[j],
                        1.0,
                        core_sq,
                    );
                    u * panels.nx[i] + v * panels.ny[i]
                })
                .collect()
        })
        .collect();

    let mut a = DMatrix::zeros(n + 1, n);
    for (j, column) in columns.iter().enumerate() {
        for (i, value) in column.iter().enumerate() {
            a[(i, j)] = *value;
        }
    }
    a[(n, 0)] = 1.0;
    a[(n, n - 1)] = -1.0;
    a
}
