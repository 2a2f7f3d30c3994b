//! Simulation request parameters.

use crate::shape::AirfoilShape;
use crate::units;
use serde::{Deserialize, Serialize};

/// Request body for `POST /simulate2d`.
///
/// Values are not range-checked here: whatever the controls produce goes on
/// the wire and the server decides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimParams {
    pub shape: AirfoilShape,
    /// Freestream velocity (m/s)
    pub velocity: f64,
    /// Fluid density (kg/m³)
    pub rho: f64,
    /// Angle of attack (degrees)
    pub aoa_deg: f64,
    /// Number of surface points requested from the discretization
    pub npts: u32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            shape: AirfoilShape::default(),
            velocity: 10.0,
            rho: units::constants::RHO_SEA_LEVEL,
            aoa_deg: 5.0,
            npts: 300,
        }
    }
}

impl SimParams {
    /// Merge a partial update; `None` fields keep their current value.
    pub fn merge(&mut self, patch: ParamsPatch) {
        if let Some(shape) = patch.shape {
            self.shape = shape;
        }
        if let Some(velocity) = patch.velocity {
            self.velocity = velocity;
        }
        if let Some(rho) = patch.rho {
            self.rho = rho;
        }
        if let Some(aoa_deg) = patch.aoa_deg {
            self.aoa_deg = aoa_deg;
        }
        if let Some(npts) = patch.npts {
            self.npts = npts;
        }
    }

    pub fn merged(mut self, patch: ParamsPatch) -> Self {
        self.merge(patch);
        self
    }
}

/// Partial update to [`SimParams`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<AirfoilShape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub velocity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rho: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aoa_deg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub npts: Option<u32>,
}

impl ParamsPatch {
    pub fn shape(shape: AirfoilShape) -> Self {
        Self {
            shape: Some(shape),
            ..Default::default()
        }
    }

    pub fn aoa_deg(aoa_deg: f64) -> Self {
        Self {
            aoa_deg: Some(aoa_deg),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.shape.is_none()
            && self.velocity.is_none()
            && self.rho.is_none()
            && self.aoa_deg.is_none()
            && self.npts.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_session_start() {
        let p = SimParams::default();
        assert_eq!(p.shape.as_str(), "naca0012");
        assert_eq!(p.velocity, 10.0);
        assert_eq!(p.rho, 1.225);
        assert_eq!(p.aoa_deg, 5.0);
        assert_eq!(p.npts, 300);
    }

    #[test]
    fn merge_only_touches_given_fields() {
        let mut p = SimParams::default();
        p.merge(ParamsPatch {
            velocity: Some(25.0),
            npts: Some(120),
            ..Default::default()
        });
        assert_eq!(p.velocity, 25.0);
        assert_eq!(p.npts, 120);
        assert_eq!(p.aoa_deg, 5.0);
        assert_eq!(p.shape.as_str(), "naca0012");
    }

    #[test]
    fn empty_patch_is_noop() {
        let before = SimParams::default();
        let after = before.clone().merged(ParamsPatch::default());
        assert!(ParamsPatch::default().is_empty());
        assert_eq!(before, after);
    }

    #[test]
    fn wire_field_names() {
        let json = serde_json::to_value(SimParams::default()).unwrap();
        assert_eq!(json["shape"], "naca0012");
        assert_eq!(json["velocity"], 10.0);
        assert_eq!(json["rho"], 1.225);
        assert_eq!(json["aoa_deg"], 5.0);
        assert_eq!(json["npts"], 300);
    }
}
