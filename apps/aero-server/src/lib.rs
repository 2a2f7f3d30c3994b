//! Reference `/simulate2d` service backed by the in-process panel solver.

use aero_core::{AirfoilShape, NacaCode, SimParams, SimResponse, units};
use aero_panel::PanelError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

/// Largest `npts` accepted; the solver's dense system grows with its square.
pub const MAX_NPTS: u32 = 5000;

/// Creates the Axum router with all routes
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/simulate2d", post(handle_simulate2d))
        .layer(CorsLayer::permissive())
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

/// Request body; every field falls back to the session defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Simulate2dRequest {
    #[serde(default)]
    pub shape: AirfoilShape,
    #[serde(default = "default_velocity")]
    pub velocity: f64,
    #[serde(default = "default_rho")]
    pub rho: f64,
    /// Dynamic viscosity; accepted for forward compatibility, inviscid solver ignores it
    #[serde(default)]
    pub mu: Option<f64>,
    #[serde(default = "default_aoa_deg")]
    pub aoa_deg: f64,
    #[serde(default = "default_npts")]
    pub npts: u32,
}

fn default_velocity() -> f64 {
    SimParams::default().velocity
}

fn default_rho() -> f64 {
    units::constants::RHO_SEA_LEVEL
}

fn default_aoa_deg() -> f64 {
    SimParams::default().aoa_deg
}

fn default_npts() -> u32 {
    SimParams::default().npts
}

impl From<Simulate2dRequest> for SimParams {
    fn from(req: Simulate2dRequest) -> Self {
        SimParams {
            shape: req.shape,
            velocity: req.velocity,
            rho: req.rho,
            aoa_deg: req.aoa_deg,
            npts: req.npts,
        }
    }
}

/// Failure reported as a status code plus a plain-text body.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl From<PanelError> for ServeError {
    fn from(err: PanelError) -> Self {
        if err.is_input_error() {
            ServeError::BadRequest(err.to_string())
        } else {
            ServeError::Internal(err.to_string())
        }
    }
}

impl IntoResponse for ServeError {
    fn into_response(self) -> Response {
        let status = match self {
            ServeError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, self.to_string()).into_response()
    }
}

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn handle_simulate2d(
    Json(req): Json<Simulate2dRequest>,
) -> Result<Json<SimResponse>, ServeError> {
    let params = SimParams::from(req);
    NacaCode::parse(params.shape.as_str()).map_err(|_| {
        ServeError::BadRequest(
            "Only NACA 4-digit like 'naca0012' supported for now.".to_string(),
        )
    })?;
    if params.npts > MAX_NPTS {
        return Err(ServeError::BadRequest(format!(
            "npts must be at most {MAX_NPTS}, got {}",
            params.npts
        )));
    }

    tracing::info!(
        shape = %params.shape,
        aoa_deg = params.aoa_deg,
        velocity = params.velocity,
        npts = params.npts,
        "simulate2d"
    );

    let solution = tokio::task::spawn_blocking(move || aero_panel::solve(&params))
        .await
        .map_err(|e| ServeError::Internal(format!("solver task failed: {e}")))??;

    Ok(Json(solution.into_response()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> Simulate2dRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn missing_fields_take_defaults() {
        let params = SimParams::from(request("{}"));
        assert_eq!(params, SimParams::default());
    }

    #[test]
    fn viscosity_is_accepted() {
        let req = request(r#"{"shape":"naca2412","mu":1.8e-5}"#);
        assert_eq!(req.mu, Some(1.8e-5));
        assert_eq!(req.shape.as_str(), "naca2412");
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let Json(body) = handle_health().await;
        assert_eq!(body.status, "ok");
    }

    #[tokio::test]
    async fn simulate_returns_parallel_arrays() {
        let req = request(r#"{"shape":"naca0012","aoa_deg":2.0,"npts":60}"#);
        let Json(resp) = handle_simulate2d(Json(req)).await.unwrap();
        assert_eq!(resp.cp.len(), 59);
        assert!(resp.validate().is_ok());
    }

    #[tokio::test]
    async fn unsupported_shape_is_bad_request() {
        let req = request(r#"{"shape":"clarky"}"#);
        let err = handle_simulate2d(Json(req)).await.unwrap_err();
        assert!(matches!(err, ServeError::BadRequest(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn oversized_npts_is_bad_request() {
        let req = request(r#"{"npts":200000}"#);
        let err = handle_simulate2d(Json(req)).await.unwrap_err();
        assert!(matches!(err, ServeError::BadRequest(_)));
        assert_eq!(err.to_string(), "npts must be at most 5000, got 200000");
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn zero_velocity_is_bad_request() {
        let req = request(r#"{"velocity":0.0,"npts":40}"#);
        let err = handle_simulate2d(Json(req)).await.unwrap_err();
        assert!(matches!(err, ServeError::BadRequest(_)));
    }
}
