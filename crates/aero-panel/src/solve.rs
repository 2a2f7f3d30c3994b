//! Solve the vortex panel system and reduce it to surface Cp and lift.

use crate::error::{PanelError, PanelResult};
use crate::geometry::{Panels, naca4_contour};
use crate::influence::{induced_velocities, system_matrix};
use aero_core::units::{self, to_pa, to_rad};
use aero_core::{NacaCode, SimParams, SimResponse, ensure_finite};
use nalgebra::DVector;
use std::time::Instant;

/// Solver configuration.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Squared vortex core radius added to r² in Biot-Savart
    pub core_radius_sq: f64,
    /// Singular values below this are treated as zero in the least-squares solve
    pub svd_eps: f64,
    /// Reference chord (m) the unit section is scaled to
    pub chord: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            core_radius_sq: 1e-10,
            svd_eps: 1e-12,
            chord: 1.0,
        }
    }
}

/// Freestream state.
#[derive(Debug, Clone, Copy)]
pub struct FlowConditions {
    pub velocity: f64,
    pub rho: f64,
    pub aoa_deg: f64,
}

impl FlowConditions {
    fn check(&self) -> PanelResult<()> {
        ensure_finite(self.velocity, "velocity")?;
        ensure_finite(self.rho, "rho")?;
        ensure_finite(self.aoa_deg, "aoa_deg")?;
        if self.velocity <= 0.0 {
            return Err(PanelError::InvalidInput {
                what: format!("velocity must be positive, got {}", self.velocity),
            });
        }
        if self.rho <= 0.0 {
            return Err(PanelError::InvalidInput {
                what: format!("rho must be positive, got {}", self.rho),
            });
        }
        Ok(())
    }
}

impl From<&SimParams> for FlowConditions {
    fn from(p: &SimParams) -> Self {
        Self {
            velocity: p.velocity,
            rho: p.rho,
            aoa_deg: p.aoa_deg,
        }
    }
}

/// Solver output at the panel control points.
#[derive(Debug, Clone)]
pub struct PanelSolution {
    pub cp: Vec<f64>,
    pub xc: Vec<f64>,
    pub yc: Vec<f64>,
    /// Vortex strength per panel
    pub gamma: Vec<f64>,
    /// Total circulation (sum of panel strengths)
    pub circulation: f64,
    pub cl: f64,
    pub chord: f64,
    /// Freestream dynamic pressure (Pa)
    pub q_inf_pa: f64,
}

impl PanelSolution {
    pub fn into_response(self) -> SimResponse {
        SimResponse {
            cp: self.cp,
            xc: self.xc,
            yc: self.yc,
            cl: self.cl,
            gamma: self.circulation,
            chord: self.chord,
        }
    }
}

/// Solve for the shape and flow described by request parameters.
pub fn solve(params: &SimParams) -> PanelResult<PanelSolution> {
    let code = NacaCode::parse(params.shape.as_str())?;
    solve_naca(
        &code,
        &FlowConditions::from(params),
        params.npts as usize,
        &SolverConfig::default(),
    )
}

pub fn solve_naca(
    code: &NacaCode,
    flow: &FlowConditions,
    npts: usize,
    config: &SolverConfig,
) -> PanelResult<PanelSolution> {
    flow.check()?;
    let started = Instant::now();

    let contour = naca4_contour(code, npts, config.chord)?;
    let panels = Panels::from_contour(&contour)?;
    let n = panels.len();

    let alpha = to_rad(units::deg(flow.aoa_deg));
    let (u_inf, v_inf) = (flow.velocity * alpha.cos(), flow.velocity * alpha.sin());

    // No-through-flow: induced normal velocity cancels the freestream's.
    let a = system_matrix(&panels, config.core_radius_sq);
    let mut b = DVector::zeros(n + 1);
    for i in 0..n {
        b[i] = -(u_inf * panels.nx[i] + v_inf * panels.ny[i]);
    }

    let gamma = a
        .svd(true, true)
        .solve(&b, config.svd_eps)
        .map_err(|e| PanelError::Numeric {
            what: e.to_string(),
        })?;
    let gamma: Vec<f64> = gamma.iter().copied().collect();

    let induced = induced_velocities(&panels, &gamma, config.core_radius_sq);
    let cp: Vec<f64> = induced
        .iter()
        .enumerate()
        .map(|(i, &(u, v))| {
            let vt = (u + u_inf) * panels.tx[i] + (v + v_inf) * panels.ty[i];
            1.0 - (vt / flow.velocity).powi(2)
        })
        .collect();

    let circulation: f64 = gamma.iter().sum();
    let chord = contour.chord();
    let q_inf = to_pa(units::dynamic_pressure(
        units::kg_per_m3(flow.rho),
        units::mps(flow.velocity),
    ));
    // Kutta-Joukowski lift per unit span.
    let lift_per_span = flow.rho * flow.velocity * circulation;
    let cl = lift_per_span / (q_inf * chord);

    tracing::debug!(
        panels = n,
        aoa_deg = flow.aoa_deg,
        cl,
        circulation,
        elapsed_ms = started.elapsed().as_secs_f64() * 1e3,
        "vortex panel solve complete"
    );

    Ok(PanelSolution {
        cp,
        xc: panels.xc,
        yc: panels.yc,
        gamma,
        circulation,
        cl,
        chord,
        q_inf_pa: q_inf,
    })
}
