//! Exponential family.
//!
//! The endpoint checks are exact float comparisons: they keep `2^(-10n)`
//! tails from leaking into the bounds.

use crate::error::{check_progress, Result};

pub fn ease_in_expo(n: f64) -> Result<f64> {
    let n = check_progress(n)?;
    if n == 0.0 {
        Ok(0.0)
    } else {
        Ok((10.0 * (n - 1.0)).exp2())
    }
}

pub fn ease_out_expo(n: f64) -> Result<f64> {
    let n = check_progress(n)?;
    if n == 1.0 {
        Ok(1.0)
    } else {
        Ok(-(-10.0 * n).exp2() + 1.0)
    }
}

pub fn ease_in_out_expo(n: f64) -> Result<f64> {
    let n = check_progress(n)?;
    if n == 0.0 {
        return Ok(0.0);
    }
    if n == 1.0 {
        return Ok(1.0);
    }
    let n = n * 2.0;
    if n < 1.0 {
        Ok(0.5 * (10.0 * (n - 1.0)).exp2())
    } else {
        let n = n - 1.0;
        Ok(0.5 * (-(-10.0 * n).exp2() + 2.0))
    }
}
