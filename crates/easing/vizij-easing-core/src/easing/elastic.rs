//! Elastic family.
//!
//! Each variant comes in two forms:
//! - `ease_*_elastic(n, amplitude, period)` where `0.0` selects the default
//!   for either parameter,
//! - `ease_*_elastic_with(n, &ElasticParams)` where only `None` selects the
//!   default.
//!
//! Amplitudes below 1 are clamped to 1 with a quarter-period phase. Values
//! that make `asin(1 / amplitude)` undefined are not rejected; the result is
//! whatever float math produces (possibly NaN).

use std::f64::consts::PI;

use super::pin_endpoints;
use crate::error::{check_progress, Result};
use crate::params::{ElasticParams, DEFAULT_ELASTIC_IN_OUT_PERIOD, DEFAULT_ELASTIC_PERIOD};

/// Derive the effective amplitude and phase offset `s`.
#[inline]
fn phase(amplitude: f64, period: f64) -> (f64, f64) {
    if amplitude < 1.0 {
        (1.0, period / 4.0)
    } else {
        (amplitude, period / (2.0 * PI) * (1.0 / amplitude).asin())
    }
}

#[inline]
fn in_elastic(n: f64, amplitude: f64, period: f64) -> f64 {
    let (a, s) = phase(amplitude, period);
    let n = n - 1.0;
    -(a * (10.0 * n).exp2() * ((n - s) * (2.0 * PI) / period).sin())
}

#[inline]
fn out_elastic(n: f64, amplitude: f64, period: f64) -> f64 {
    let (a, s) = phase(amplitude, period);
    a * (-10.0 * n).exp2() * ((n - s) * (2.0 * PI / period)).sin() + 1.0
}

#[inline]
fn in_out_elastic(n: f64, amplitude: f64, period: f64) -> f64 {
    let (a, s) = phase(amplitude, period);
    let n = n * 2.0;
    if n < 1.0 {
        let n = n - 1.0;
        -0.5 * (a * (10.0 * n).exp2() * ((n - s) * 2.0 * PI / period).sin())
    } else {
        let n = n - 1.0;
        a * (-10.0 * n).exp2() * ((n - s) * 2.0 * PI / period).sin() * 0.5 + 1.0
    }
}

/// Elastic, wobbles with increasing amplitude then snaps to the destination.
pub fn ease_in_elastic(n: f64, amplitude: f64, period: f64) -> Result<f64> {
    ease_in_elastic_with(n, &ElasticParams::from_legacy(amplitude, period))
}

pub fn ease_in_elastic_with(n: f64, params: &ElasticParams) -> Result<f64> {
    let n = check_progress(n)?;
    let (a, p) = params.resolve(DEFAULT_ELASTIC_PERIOD);
    Ok(pin_endpoints(n, |n| in_elastic(n, a, p)))
}

/// Elastic, overshoots the destination then rubber-bands into it.
pub fn ease_out_elastic(n: f64, amplitude: f64, period: f64) -> Result<f64> {
    ease_out_elastic_with(n, &ElasticParams::from_legacy(amplitude, period))
}

pub fn ease_out_elastic_with(n: f64, params: &ElasticParams) -> Result<f64> {
    let n = check_progress(n)?;
    let (a, p) = params.resolve(DEFAULT_ELASTIC_PERIOD);
    Ok(pin_endpoints(n, |n| out_elastic(n, a, p)))
}

/// Elastic in-out, wobbles towards the midpoint. Default period is 0.5.
pub fn ease_in_out_elastic(n: f64, amplitude: f64, period: f64) -> Result<f64> {
    ease_in_out_elastic_with(n, &ElasticParams::from_legacy(amplitude, period))
}

pub fn ease_in_out_elastic_with(n: f64, params: &ElasticParams) -> Result<f64> {
    let n = check_progress(n)?;
    let (a, p) = params.resolve(DEFAULT_ELASTIC_IN_OUT_PERIOD);
    Ok(pin_endpoints(n, |n| in_out_elastic(n, a, p)))
}
