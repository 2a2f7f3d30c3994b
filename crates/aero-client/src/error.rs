//! Error types for the API client.

use thiserror::Error;

/// How a simulation request failed. `Display` is the exact text shown to
/// the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The request never got a response (DNS, refused, offline, timeout).
    #[error("{message}")]
    Transport { message: String },

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Protocol { status: u16, body: String },

    /// The body was not a well-formed simulation result.
    #[error("Invalid response: {message}")]
    Decode { message: String },

    #[error("Failed to encode request: {message}")]
    Encode { message: String },

    #[error("Invalid configuration: {what}")]
    Config { what: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

impl From<aero_core::CoreError> for ClientError {
    fn from(err: aero_core::CoreError) -> Self {
        ClientError::Decode {
            message: err.to_string(),
        }
    }
}
