//! Linear and polynomial families (quad, cubic, quart, quint).

use crate::error::{check_progress, Result};

/// Identity easing.
#[inline]
pub fn linear(n: f64) -> Result<f64> {
    check_progress(n)
}

/// Quadratic, starts slow then accelerates.
#[inline]
pub fn ease_in_quad(n: f64) -> Result<f64> {
    let n = check_progress(n)?;
    Ok(n.powi(2))
}

/// Quadratic, starts fast then decelerates.
#[inline]
pub fn ease_out_quad(n: f64) -> Result<f64> {
    let n = check_progress(n)?;
    Ok(-n * (n - 2.0))
}

/// Quadratic, accelerates to the midpoint then decelerates.
pub fn ease_in_out_quad(n: f64) -> Result<f64> {
    let n = check_progress(n)?;
    if n < 0.5 {
        Ok(2.0 * n.powi(2))
    } else {
        let n = n * 2.0 - 1.0;
        Ok(-0.5 * (n * (n - 2.0) - 1.0))
    }
}

#[inline]
pub fn ease_in_cubic(n: f64) -> Result<f64> {
    let n = check_progress(n)?;
    Ok(n.powi(3))
}

#[inline]
pub fn ease_out_cubic(n: f64) -> Result<f64> {
    let n = check_progress(n)? - 1.0;
    Ok(n.powi(3) + 1.0)
}

pub fn ease_in_out_cubic(n: f64) -> Result<f64> {
    let n = check_progress(n)? * 2.0;
    if n < 1.0 {
        Ok(0.5 * n.powi(3))
    } else {
        let n = n - 2.0;
        Ok(0.5 * (n.powi(3) + 2.0))
    }
}

#[inline]
pub fn ease_in_quart(n: f64) -> Result<f64> {
    let n = check_progress(n)?;
    Ok(n.powi(4))
}

#[inline]
pub fn ease_out_quart(n: f64) -> Result<f64> {
    let n = check_progress(n)? - 1.0;
    Ok(-(n.powi(4) - 1.0))
}

pub fn ease_in_out_quart(n: f64) -> Result<f64> {
    let n = check_progress(n)? * 2.0;
    if n < 1.0 {
        Ok(0.5 * n.powi(4))
    } else {
        let n = n - 2.0;
        Ok(-0.5 * (n.powi(4) - 2.0))
    }
}

#[inline]
pub fn ease_in_quint(n: f64) -> Result<f64> {
    let n = check_progress(n)?;
    Ok(n.powi(5))
}

#[inline]
pub fn ease_out_quint(n: f64) -> Result<f64> {
    let n = check_progress(n)? - 1.0;
    Ok(n.powi(5) + 1.0)
}

pub fn ease_in_out_quint(n: f64) -> Result<f64> {
    let n = check_progress(n)? * 2.0;
    if n < 1.0 {
        Ok(0.5 * n.powi(5))
    } else {
        let n = n - 2.0;
        Ok(0.5 * (n.powi(5) + 2.0))
    }
}
