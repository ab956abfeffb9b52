//! Easing formulas.
//!
//! Every function takes a progress ratio `n` in [0, 1] and returns the shaped
//! ratio, or [`EasingError::OutOfRange`](crate::EasingError::OutOfRange) when
//! `n` falls outside that interval. In-out variants split at `n < 0.5`, so
//! `n == 0.5` is evaluated by the second half.

pub mod back;
pub mod bounce;
pub mod circ;
pub mod elastic;
pub mod expo;
pub mod polynomial;
pub mod sine;

pub use back::*;
pub use bounce::*;
pub use circ::*;
pub use elastic::*;
pub use expo::*;
pub use polynomial::*;
pub use sine::*;

/// Return exact 0.0/1.0 at the endpoints and `f(n)` strictly inside.
/// Used by the closed forms whose endpoint values would otherwise drift by
/// rounding (or by the elastic tail) away from the exact bounds.
#[inline]
pub(crate) fn pin_endpoints(n: f64, f: impl FnOnce(f64) -> f64) -> f64 {
    if n == 0.0 {
        0.0
    } else if n == 1.0 {
        1.0
    } else {
        f(n)
    }
}
