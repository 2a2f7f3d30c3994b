use crate::error::ClientResult;
use aero_core::{SimParams, SimResponse};

/// Anything that can turn request parameters into a simulation result.
///
/// `HttpClient` is the real implementation; the service layer only sees this
/// trait so it can be driven by in-process fakes.
pub trait SimulationApi: Send + Sync {
    fn simulate(&self, params: &SimParams) -> ClientResult<SimResponse>;

    /// Short description for status lines, e.g. the endpoint URL.
    fn describe(&self) -> String {
        String::from("simulation api")
    }
}

impl<T: SimulationApi + ?Sized> SimulationApi for std::sync::Arc<T> {
    fn simulate(&self, params: &SimParams) -> ClientResult<SimResponse> {
        (**self).simulate(params)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
