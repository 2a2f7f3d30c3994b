//! Airfoil shape identifiers.
//!
//! The wire format is a free string (`"naca0012"`). The client passes whatever
//! the user picked straight through; only the solver side insists on a NACA
//! 4-digit code, via [`NacaCode::parse`].

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shape identifier as sent on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AirfoilShape(String);

impl AirfoilShape {
    pub const NACA0012: &'static str = "naca0012";
    pub const NACA2412: &'static str = "naca2412";
    pub const NACA4412: &'static str = "naca4412";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Shapes offered by the shape selector.
    pub fn presets() -> [AirfoilShape; 3] {
        [
            Self::new(Self::NACA0012),
            Self::new(Self::NACA2412),
            Self::new(Self::NACA4412),
        ]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human label, e.g. `NACA 0012`. Non-NACA ids are upper-cased as-is.
    pub fn label(&self) -> String {
        match NacaCode::parse(&self.0) {
            Ok(code) => format!("NACA {}", code.digits()),
            Err(_) => self.0.to_uppercase(),
        }
    }
}

impl Default for AirfoilShape {
    fn default() -> Self {
        Self::new(Self::NACA0012)
    }
}

impl fmt::Display for AirfoilShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AirfoilShape {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Parsed NACA 4-digit designation `MPTT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NacaCode {
    digits: [u8; 4],
}

impl NacaCode {
    /// Accepts `naca` followed by exactly four digits, case-insensitive.
    pub fn parse(shape: &str) -> CoreResult<Self> {
        let lower = shape.trim().to_ascii_lowercase();
        let unsupported = || CoreError::UnsupportedShape {
            shape: shape.to_string(),
        };

        let tail = lower.strip_prefix("naca").ok_or_else(unsupported)?;
        if tail.len() != 4 || !tail.bytes().all(|b| b.is_ascii_digit()) {
            return Err(unsupported());
        }

        let mut digits = [0u8; 4];
        for (slot, b) in digits.iter_mut().zip(tail.bytes()) {
            *slot = b - b'0';
        }
        Ok(Self { digits })
    }

    pub fn digits(&self) -> String {
        self.digits.iter().map(|d| char::from(b'0' + d)).collect()
    }

    /// Maximum camber as a fraction of chord.
    pub fn max_camber(&self) -> f64 {
        f64::from(self.digits[0]) / 100.0
    }

    /// Chordwise position of maximum camber as a fraction of chord.
    pub fn camber_position(&self) -> f64 {
        f64::from(self.digits[1]) / 10.0
    }

    /// Maximum thickness as a fraction of chord.
    pub fn thickness(&self) -> f64 {
        f64::from(self.digits[2] * 10 + self.digits[3]) / 100.0
    }
}
