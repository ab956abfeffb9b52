//! Error types for easing evaluation

use serde::{Deserialize, Serialize};

/// Errors reported by the easing library.
///
/// The formulas themselves only ever fail with [`EasingError::OutOfRange`].
/// Numeric edge cases (NaN/Inf produced by pathological tuning parameters)
/// are ordinary `f64` results, not errors.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EasingError {
    /// Progress ratio outside the closed interval [0, 1]
    #[error("progress {n} is out of range [0, 1]")]
    OutOfRange { n: f64 },

    /// No easing registered under the requested name
    #[error("unknown easing: {name}")]
    UnknownEasing { name: String },
}

impl EasingError {
    /// Shaped ratio paired with a failure. Callers that want the
    /// "value alongside error" behaviour can use this (or `unwrap_or_default`).
    #[inline]
    pub const fn fallback_value(&self) -> f64 {
        0.0
    }

    /// Get error category for logging/metrics
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } => "validation",
            Self::UnknownEasing { .. } => "lookup",
        }
    }
}

/// Easing result type
pub type Result<T> = core::result::Result<T, EasingError>;

/// Reject progress values outside [0, 1]. NaN is rejected too.
#[inline]
pub fn check_progress(n: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&n) {
        Ok(n)
    } else {
        Err(EasingError::OutOfRange { n })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_closed_interval() {
        assert_eq!(check_progress(0.0), Ok(0.0));
        assert_eq!(check_progress(0.5), Ok(0.5));
        assert_eq!(check_progress(1.0), Ok(1.0));
    }

    #[test]
    fn rejects_outside_interval() {
        assert_eq!(
            check_progress(-0.1),
            Err(EasingError::OutOfRange { n: -0.1 })
        );
        assert_eq!(check_progress(1.1), Err(EasingError::OutOfRange { n: 1.1 }));
        assert!(check_progress(f64::NAN).is_err());
        assert!(check_progress(f64::INFINITY).is_err());
    }

    #[test]
    fn categories_and_fallback() {
        let err = EasingError::OutOfRange { n: 2.0 };
        assert_eq!(err.category(), "validation");
        assert_eq!(err.fallback_value(), 0.0);
        assert_eq!(check_progress(2.0).unwrap_or_default(), 0.0);

        let missing = EasingError::UnknownEasing {
            name: "wobble".into(),
        };
        assert_eq!(missing.category(), "lookup");
    }

    #[test]
    fn display_names_offending_value() {
        let err = EasingError::OutOfRange { n: 1.5 };
        assert_eq!(err.to_string(), "progress 1.5 is out of range [0, 1]");
    }

    #[test]
    fn serialization() {
        let error = EasingError::OutOfRange { n: -1.0 };
        let serialized = serde_json::to_string(&error).unwrap();
        let deserialized: EasingError = serde_json::from_str(&serialized).unwrap();
        assert_eq!(error, deserialized);
    }
}
