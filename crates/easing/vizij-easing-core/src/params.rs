//! Tuning parameters for the parameterized families (elastic, back).
//!
//! The free functions in [`crate::easing`] keep the legacy convention where a
//! value of exactly `0.0` means "use the default". These structs carry true
//! optionals instead: `None` picks the default and `Some(x)` is used verbatim,
//! so `Some(0.0)` really is a zero period/overshoot.

use serde::{Deserialize, Serialize};

/// Default elastic amplitude.
pub const DEFAULT_ELASTIC_AMPLITUDE: f64 = 1.0;
/// Default elastic period for the in/out variants.
pub const DEFAULT_ELASTIC_PERIOD: f64 = 0.3;
/// Default elastic period for the in-out variant.
pub const DEFAULT_ELASTIC_IN_OUT_PERIOD: f64 = 0.5;
/// Default back overshoot.
pub const DEFAULT_BACK_OVERSHOOT: f64 = 1.70158;
/// Extra overshoot scale applied inside the back in-out variant.
pub const BACK_IN_OUT_SCALE: f64 = 1.525;

/// Map the legacy "0.0 means unset" convention onto an optional.
#[inline]
pub(crate) fn zero_as_unset(v: f64) -> Option<f64> {
    if v == 0.0 {
        None
    } else {
        Some(v)
    }
}

/// Parameters for the elastic family
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElasticParams {
    pub amplitude: Option<f64>,
    pub period: Option<f64>,
}

impl ElasticParams {
    #[inline]
    pub const fn new(amplitude: Option<f64>, period: Option<f64>) -> Self {
        Self { amplitude, period }
    }

    /// Build from the zero-means-default convention.
    #[inline]
    pub fn from_legacy(amplitude: f64, period: f64) -> Self {
        Self {
            amplitude: zero_as_unset(amplitude),
            period: zero_as_unset(period),
        }
    }

    /// Resolve to concrete `(amplitude, period)` with the given default period.
    #[inline]
    pub fn resolve(&self, default_period: f64) -> (f64, f64) {
        (
            self.amplitude.unwrap_or(DEFAULT_ELASTIC_AMPLITUDE),
            self.period.unwrap_or(default_period),
        )
    }
}

/// Parameters for the back family
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackParams {
    pub overshoot: Option<f64>,
}

impl BackParams {
    #[inline]
    pub const fn new(overshoot: Option<f64>) -> Self {
        Self { overshoot }
    }

    /// Build from the zero-means-default convention.
    #[inline]
    pub fn from_legacy(overshoot: f64) -> Self {
        Self {
            overshoot: zero_as_unset(overshoot),
        }
    }

    #[inline]
    pub fn resolve(&self) -> f64 {
        self.overshoot.unwrap_or(DEFAULT_BACK_OVERSHOOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_zero_maps_to_none() {
        assert_eq!(ElasticParams::from_legacy(0.0, 0.0), ElasticParams::default());
        assert_eq!(
            ElasticParams::from_legacy(2.0, 0.0),
            ElasticParams::new(Some(2.0), None)
        );
        assert_eq!(BackParams::from_legacy(0.0), BackParams::default());
        assert_eq!(BackParams::from_legacy(3.0).overshoot, Some(3.0));
    }

    #[test]
    fn resolve_applies_defaults() {
        let p = ElasticParams::default();
        assert_eq!(p.resolve(DEFAULT_ELASTIC_PERIOD), (1.0, 0.3));
        assert_eq!(p.resolve(DEFAULT_ELASTIC_IN_OUT_PERIOD), (1.0, 0.5));
        assert_eq!(BackParams::default().resolve(), 1.70158);
    }

    #[test]
    fn explicit_zero_is_kept() {
        let p = ElasticParams::new(Some(0.0), Some(0.0));
        assert_eq!(p.resolve(DEFAULT_ELASTIC_PERIOD), (0.0, 0.0));
        assert_eq!(BackParams::new(Some(0.0)).resolve(), 0.0);
    }

    #[test]
    fn deserialize_partial_json() {
        let p: ElasticParams = serde_json::from_str(r#"{"period":0.45}"#).unwrap();
        assert_eq!(p, ElasticParams::new(None, Some(0.45)));
        let b: BackParams = serde_json::from_str("{}").unwrap();
        assert_eq!(b, BackParams::default());
    }
}
