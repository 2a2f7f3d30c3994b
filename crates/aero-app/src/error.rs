//! Error types for the aero-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for both CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Client(#[from] aero_client::ClientError),

    #[error("Failed to read parameters file: {path}")]
    ParamsFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}")]
    ExportWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{base_url} reported status '{status}'")]
    Unhealthy { base_url: String, status: String },

    #[error("Timed out waiting for {0}")]
    Timeout(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for aero-app operations.
pub type AppResult<T> = Result<T, AppError>;
