//! Bounce family.

use crate::error::{check_progress, Result};

const BOUNCE_SCALE: f64 = 7.5625;
const BOUNCE_DIVISOR: f64 = 2.75;

/// Piecewise bounce on an already validated `n`.
///
/// Four parabolic arcs, each re-centred on its own offset and lifted by its
/// own constant. The arcs peak at 1.0, so `out_bounce(1.0) == 1.0` exactly.
#[inline]
fn out_bounce(n: f64) -> f64 {
    if n < 1.0 / BOUNCE_DIVISOR {
        BOUNCE_SCALE * n * n
    } else if n < 2.0 / BOUNCE_DIVISOR {
        let n = n - 1.5 / BOUNCE_DIVISOR;
        BOUNCE_SCALE * n * n + 0.75
    } else if n < 2.5 / BOUNCE_DIVISOR {
        let n = n - 2.25 / BOUNCE_DIVISOR;
        BOUNCE_SCALE * n * n + 0.9375
    } else {
        let n = n - 2.625 / BOUNCE_DIVISOR;
        BOUNCE_SCALE * n * n + 0.984375
    }
}

/// Bounces at the start, then jumps to the destination.
#[inline]
pub fn ease_in_bounce(n: f64) -> Result<f64> {
    let n = check_progress(n)?;
    Ok(1.0 - out_bounce(1.0 - n))
}

/// Hits the destination, then bounces to rest.
#[inline]
pub fn ease_out_bounce(n: f64) -> Result<f64> {
    let n = check_progress(n)?;
    Ok(out_bounce(n))
}

/// Bounces at both ends.
pub fn ease_in_out_bounce(n: f64) -> Result<f64> {
    let n = check_progress(n)?;
    if n < 0.5 {
        Ok(out_bounce(n * 2.0) * 0.5)
    } else {
        Ok(out_bounce(n * 2.0 - 1.0) * 0.5 + 0.5)
    }
}
