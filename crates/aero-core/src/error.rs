use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Unsupported shape '{shape}': expected a NACA 4-digit code like 'naca0012'")]
    UnsupportedShape { shape: String },

    #[error("Length mismatch: cp={cp}, xc={xc}, yc={yc}")]
    LengthMismatch { cp: usize, xc: usize, yc: usize },
}
