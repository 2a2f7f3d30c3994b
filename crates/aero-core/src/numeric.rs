use crate::CoreError;

/// Floating point type used throughout the workspace
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}

/// Min and max of a slice, ignoring NaN. `None` when nothing finite remains.
pub fn extent(values: &[Real]) -> Option<(Real, Real)> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn extent_skips_nan() {
        assert_eq!(extent(&[]), None);
        assert_eq!(extent(&[Real::NAN]), None);
        assert_eq!(extent(&[2.0, Real::NAN, -1.0, 3.0]), Some((-1.0, 3.0)));
    }
}
