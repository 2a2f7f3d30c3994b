//! Error types for panel solver operations.

use aero_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PanelError {
    #[error("Invalid input: {what}")]
    InvalidInput { what: String },

    #[error("Degenerate geometry: {what}")]
    Geometry { what: String },

    #[error("Linear solve failed: {what}")]
    Numeric { what: String },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type PanelResult<T> = Result<T, PanelError>;

impl PanelError {
    /// True when the caller supplied bad parameters, as opposed to the
    /// solver failing on good ones.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PanelError::InvalidInput { .. }
                | PanelError::Core(CoreError::UnsupportedShape { .. })
                | PanelError::Core(CoreError::NonFinite { .. })
                | PanelError::Core(CoreError::InvalidArg { .. })
        )
    }
}
