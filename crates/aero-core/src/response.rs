//! Simulation result as returned by `POST /simulate2d`.

use crate::error::{CoreError, CoreResult};
use crate::numeric::ensure_finite;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimResponse {
    /// Pressure coefficient per surface point
    pub cp: Vec<f64>,
    /// Surface x coordinate per point
    pub xc: Vec<f64>,
    /// Surface y coordinate per point
    pub yc: Vec<f64>,
    #[serde(rename = "Cl")]
    pub cl: f64,
    #[serde(rename = "Gamma")]
    pub gamma: f64,
    pub chord: f64,
}

impl SimResponse {
    /// Boundary check applied right after decoding: parallel arrays must
    /// line up and the scalars must be finite.
    pub fn validate(&self) -> CoreResult<()> {
        if self.cp.len() != self.xc.len() || self.cp.len() != self.yc.len() {
            return Err(CoreError::LengthMismatch {
                cp: self.cp.len(),
                xc: self.xc.len(),
                yc: self.yc.len(),
            });
        }
        ensure_finite(self.cl, "Cl")?;
        ensure_finite(self.gamma, "Gamma")?;
        ensure_finite(self.chord, "chord")?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.cp.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cp.is_empty()
    }

    /// `(x, y, cp)` per surface point.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.xc
            .iter()
            .zip(&self.yc)
            .zip(&self.cp)
            .map(|((&x, &y), &cp)| (x, y, cp))
    }
}
