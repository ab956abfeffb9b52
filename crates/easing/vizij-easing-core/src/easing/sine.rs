//! Sinusoidal family.

use std::f64::consts::{FRAC_PI_2, PI};

use super::pin_endpoints;
use crate::error::{check_progress, Result};

/// Sinusoidal, starts slow then accelerates.
///
/// `cos(PI / 2)` is not exactly zero in `f64`, so `n == 1.0` is pinned.
pub fn ease_in_sine(n: f64) -> Result<f64> {
    let n = check_progress(n)?;
    Ok(pin_endpoints(n, |n| -(n * FRAC_PI_2).cos() + 1.0))
}

/// Sinusoidal, starts fast then decelerates.
#[inline]
pub fn ease_out_sine(n: f64) -> Result<f64> {
    let n = check_progress(n)?;
    Ok((n * FRAC_PI_2).sin())
}

/// Sinusoidal in-out. Evaluated as one cosine over the whole domain rather
/// than two halves.
#[inline]
pub fn ease_in_out_sine(n: f64) -> Result<f64> {
    let n = check_progress(n)?;
    Ok(-0.5 * ((PI * n).cos() - 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn endpoints_exact() {
        assert_eq!(ease_in_sine(0.0), Ok(0.0));
        assert_eq!(ease_in_sine(1.0), Ok(1.0));
        assert_eq!(ease_out_sine(0.0), Ok(0.0));
        assert_eq!(ease_out_sine(1.0), Ok(1.0));
        assert_eq!(ease_in_out_sine(0.0), Ok(0.0));
        assert_eq!(ease_in_out_sine(1.0), Ok(1.0));
    }

    #[test]
    fn interior_values() {
        let half_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
        assert_abs_diff_eq!(ease_in_sine(0.5).unwrap(), 1.0 - half_sqrt2, epsilon = 1e-12);
        assert_abs_diff_eq!(ease_out_sine(0.5).unwrap(), half_sqrt2, epsilon = 1e-12);
        assert_abs_diff_eq!(ease_in_out_sine(0.5).unwrap(), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(ease_in_out_sine(0.25).unwrap(), 0.146_446_609_406_726_2, epsilon = 1e-12);
    }
}
