//! In-process [`SimulationApi`] backed by the panel solver.
//!
//! Used for offline runs. Errors are shaped like the HTTP service's so the
//! store shows the same messages either way.

use aero_client::{ClientError, ClientResult, SimulationApi};
use aero_core::{SimParams, SimResponse};
use aero_panel::{FlowConditions, PanelError, SolverConfig, solve_naca};

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSolver {
    config: SolverConfig,
}

impl LocalSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }
}

fn to_client_error(err: PanelError) -> ClientError {
    let status = if err.is_input_error() { 400 } else { 500 };
    ClientError::Protocol {
        status,
        body: err.to_string(),
    }
}

impl SimulationApi for LocalSolver {
    fn simulate(&self, params: &SimParams) -> ClientResult<SimResponse> {
        let code = aero_core::NacaCode::parse(params.shape.as_str())
            .map_err(|e| to_client_error(PanelError::from(e)))?;
        let solution = solve_naca(
            &code,
            &FlowConditions::from(params),
            params.npts as usize,
            &self.config,
        )
        .map_err(to_client_error)?;
        Ok(solution.into_response())
    }

    fn describe(&self) -> String {
        "local panel solver".to_string()
    }
}
