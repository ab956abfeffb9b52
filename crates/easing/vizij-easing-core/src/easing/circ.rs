//! Circular family.

use crate::error::{check_progress, Result};

#[inline]
pub fn ease_in_circ(n: f64) -> Result<f64> {
    let n = check_progress(n)?;
    Ok(-((1.0 - n * n).sqrt() - 1.0))
}

#[inline]
pub fn ease_out_circ(n: f64) -> Result<f64> {
    let n = check_progress(n)? - 1.0;
    Ok((1.0 - n * n).sqrt())
}

pub fn ease_in_out_circ(n: f64) -> Result<f64> {
    let n = check_progress(n)? * 2.0;
    if n < 1.0 {
        Ok(-0.5 * ((1.0 - n.powi(2)).sqrt() - 1.0))
    } else {
        let n = n - 2.0;
        Ok(0.5 * ((1.0 - n.powi(2)).sqrt() + 1.0))
    }
}
