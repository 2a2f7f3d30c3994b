//! Control panel model: widget bounds and debounced numeric inputs.
//!
//! The four numeric inputs are debounced together as one value; the shape
//! selector bypasses the debounce and goes straight to the store.

use crate::debounce::Debounced;
use aero_core::{ParamsPatch, SimParams};
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

pub const AOA_RANGE_DEG: RangeInclusive<f64> = -10.0..=15.0;
pub const AOA_STEP_DEG: f64 = 0.5;
pub const VELOCITY_MIN: f64 = 0.1;
pub const VELOCITY_STEP: f64 = 0.5;
pub const RHO_STEP: f64 = 0.01;
pub const NPTS_RANGE: RangeInclusive<u32> = 120..=600;
pub const NPTS_STEP: u32 = 20;

/// Local copies of the numeric inputs as the widgets currently show them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlInputs {
    pub aoa_deg: f64,
    pub velocity: f64,
    pub rho: f64,
    pub npts: u32,
}

impl ControlInputs {
    pub fn from_params(params: &SimParams) -> Self {
        Self {
            aoa_deg: params.aoa_deg,
            velocity: params.velocity,
            rho: params.rho,
            npts: params.npts,
        }
    }

    pub fn into_patch(self) -> ParamsPatch {
        ParamsPatch {
            shape: None,
            velocity: Some(self.velocity),
            rho: Some(self.rho),
            aoa_deg: Some(self.aoa_deg),
            npts: Some(self.npts),
        }
    }
}

/// Snap an angle to the slider grid and clamp it to the slider range.
pub fn snap_aoa(aoa_deg: f64) -> f64 {
    let snapped = (aoa_deg / AOA_STEP_DEG).round() * AOA_STEP_DEG;
    snapped.clamp(*AOA_RANGE_DEG.start(), *AOA_RANGE_DEG.end())
}

/// Snap a point count to the slider grid and clamp it to the slider range.
pub fn snap_npts(npts: u32) -> u32 {
    let (lo, hi) = (*NPTS_RANGE.start(), *NPTS_RANGE.end());
    let clamped = npts.clamp(lo, hi);
    let steps = (clamped - lo + NPTS_STEP / 2) / NPTS_STEP;
    (lo + steps * NPTS_STEP).min(hi)
}

#[derive(Debug, Clone)]
pub struct ControlsModel {
    inputs: ControlInputs,
    pending: Debounced<ControlInputs>,
}

impl ControlsModel {
    pub fn new(params: &SimParams) -> Self {
        Self::with_delay(params, DEFAULT_DEBOUNCE)
    }

    pub fn with_delay(params: &SimParams, delay: Duration) -> Self {
        Self {
            inputs: ControlInputs::from_params(params),
            pending: Debounced::new(delay),
        }
    }

    pub fn inputs(&self) -> ControlInputs {
        self.inputs
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_pending()
    }

    /// Record what the widgets show now. Unchanged input does not restart
    /// the quiet period.
    pub fn edit(&mut self, inputs: ControlInputs, now: Instant) -> bool {
        if inputs == self.inputs {
            return false;
        }
        self.inputs = inputs;
        self.pending.set(inputs, now);
        true
    }

    /// Patch for the store once the inputs have been quiet long enough.
    pub fn poll(&mut self, now: Instant) -> Option<ParamsPatch> {
        self.pending.poll(now).map(ControlInputs::into_patch)
    }

    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.pending.time_remaining(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_from_store_values() {
        let model = ControlsModel::new(&SimParams::default());
        let inputs = model.inputs();
        assert_eq!(inputs.aoa_deg, 5.0);
        assert_eq!(inputs.velocity, 10.0);
        assert_eq!(inputs.rho, 1.225);
        assert_eq!(inputs.npts, 300);
        assert!(!model.is_pending());
    }

    #[test]
    fn aoa_burst_yields_one_patch_with_last_value() {
        let t0 = Instant::now();
        let mut model = ControlsModel::new(&SimParams::default());
        for (i, aoa) in [3.0, 4.0, 5.5].into_iter().enumerate() {
            let inputs = ControlInputs {
                aoa_deg: aoa,
                ..model.inputs()
            };
            assert!(model.edit(inputs, t0 + Duration::from_millis(50 * i as u64)));
        }
        assert_eq!(model.poll(t0 + Duration::from_millis(200)), None);
        let patch = model.poll(t0 + Duration::from_millis(400)).unwrap();
        assert_eq!(patch.aoa_deg, Some(5.5));
        assert_eq!(patch.shape, None);
        assert_eq!(model.poll(t0 + Duration::from_secs(2)), None);
    }

    #[test]
    fn identical_edit_is_ignored() {
        let t0 = Instant::now();
        let mut model = ControlsModel::new(&SimParams::default());
        let same = model.inputs();
        assert!(!model.edit(same, t0));
        assert!(!model.is_pending());
    }

    #[test]
    fn patch_carries_all_numeric_fields() {
        let inputs = ControlInputs {
            aoa_deg: -2.5,
            velocity: 30.0,
            rho: 0.9,
            npts: 420,
        };
        let merged = SimParams::default().merged(inputs.into_patch());
        assert_eq!(merged.aoa_deg, -2.5);
        assert_eq!(merged.velocity, 30.0);
        assert_eq!(merged.rho, 0.9);
        assert_eq!(merged.npts, 420);
        assert_eq!(merged.shape, SimParams::default().shape);
    }

    #[test]
    fn snapping_matches_slider_grid() {
        assert_eq!(snap_aoa(3.26), 3.5);
        assert_eq!(snap_aoa(-40.0), -10.0);
        assert_eq!(snap_aoa(99.0), 15.0);
        assert_eq!(snap_npts(300), 300);
        assert_eq!(snap_npts(309), 300);
        assert_eq!(snap_npts(311), 320);
        assert_eq!(snap_npts(10), 120);
        assert_eq!(snap_npts(10_000), 600);
    }

    proptest! {
        #[test]
        fn snapped_npts_on_grid(n in 0u32..2000) {
            let s = snap_npts(n);
            prop_assert!(NPTS_RANGE.contains(&s));
            prop_assert_eq!((s - NPTS_RANGE.start()) % NPTS_STEP, 0);
        }

        #[test]
        fn snapped_aoa_in_range(a in -100.0f64..100.0) {
            let s = snap_aoa(a);
            prop_assert!(AOA_RANGE_DEG.contains(&s));
            prop_assert!(((s / AOA_STEP_DEG).round() * AOA_STEP_DEG - s).abs() < 1e-12);
        }
    }
}
