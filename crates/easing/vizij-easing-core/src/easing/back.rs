//! Back family: pulls back before moving, or overshoots before settling.

use super::pin_endpoints;
use crate::error::{check_progress, Result};
use crate::params::{BackParams, BACK_IN_OUT_SCALE};

#[inline]
fn in_back(n: f64, s: f64) -> f64 {
    n * n * ((s + 1.0) * n - s)
}

#[inline]
fn out_back(n: f64, s: f64) -> f64 {
    let n = n - 1.0;
    n * n * ((s + 1.0) * n + s) + 1.0
}

#[inline]
fn in_out_back(n: f64, s: f64) -> f64 {
    let s = s * BACK_IN_OUT_SCALE;
    let n = n * 2.0;
    if n < 1.0 {
        0.5 * (n * n * ((s + 1.0) * n - s))
    } else {
        let n = n - 2.0;
        0.5 * (n * n * ((s + 1.0) * n + s) + 2.0)
    }
}

/// Backs up first, then heads to the destination. `overshoot == 0.0`
/// selects the default 1.70158.
pub fn ease_in_back(n: f64, overshoot: f64) -> Result<f64> {
    ease_in_back_with(n, &BackParams::from_legacy(overshoot))
}

pub fn ease_in_back_with(n: f64, params: &BackParams) -> Result<f64> {
    let n = check_progress(n)?;
    let s = params.resolve();
    Ok(pin_endpoints(n, |n| in_back(n, s)))
}

/// Overshoots the destination a little, then backs into it.
pub fn ease_out_back(n: f64, overshoot: f64) -> Result<f64> {
    ease_out_back_with(n, &BackParams::from_legacy(overshoot))
}

pub fn ease_out_back_with(n: f64, params: &BackParams) -> Result<f64> {
    let n = check_progress(n)?;
    let s = params.resolve();
    Ok(pin_endpoints(n, |n| out_back(n, s)))
}

/// Overshoots at both ends. The overshoot is scaled by 1.525 internally.
pub fn ease_in_out_back(n: f64, overshoot: f64) -> Result<f64> {
    ease_in_out_back_with(n, &BackParams::from_legacy(overshoot))
}

pub fn ease_in_out_back_with(n: f64, params: &BackParams) -> Result<f64> {
    let n = check_progress(n)?;
    let s = params.resolve();
    Ok(pin_endpoints(n, |n| in_out_back(n, s)))
}
