//! HTTP client for the `/simulate2d` service.
//!
//! One POST per simulation, JSON in and out. No retry, no cancellation; an
//! optional timeout is the only knob besides the base URL.

pub mod api;
pub mod config;
pub mod error;
pub mod http;

pub use api::SimulationApi;
pub use config::{API_BASE_ENV, API_TIMEOUT_ENV, ApiConfig, DEFAULT_API_BASE};
pub use error::{ClientError, ClientResult};
pub use http::{HealthStatus, HttpClient};
