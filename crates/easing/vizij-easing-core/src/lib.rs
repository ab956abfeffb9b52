//! Vizij Easing Core (engine-agnostic)
//!
//! Easing curves map a normalized progress ratio in [0, 1] to a shaped ratio
//! (accelerating, decelerating, overshooting, bouncing). Every curve is a pure
//! function; scheduling and frame timing are left to the caller.
//!
//! ```
//! use vizij_easing_core::{ease_out_bounce, point_on_line, Easing};
//!
//! assert_eq!(ease_out_bounce(1.0), Ok(1.0));
//! assert!(ease_out_bounce(1.5).is_err());
//!
//! let curve: Easing = "ease_in_quad".parse().unwrap();
//! assert_eq!(curve.apply(0.5), Ok(0.25));
//!
//! assert_eq!(point_on_line(0.0, 0.0, 10.0, 10.0, 0.5), (5.0, 5.0));
//! ```

pub mod easing;
pub mod error;
pub mod kind;
pub mod line;
pub mod params;
pub mod registry;
pub mod sampling;

// Re-exports for consumers (adapters)
pub use easing::*;
pub use error::{check_progress, EasingError, Result};
pub use kind::{Easing, EasingFn, Family, Variant};
pub use line::{lerp, point_on_line, Point};
pub use params::{
    BackParams, ElasticParams, BACK_IN_OUT_SCALE, DEFAULT_BACK_OVERSHOOT,
    DEFAULT_ELASTIC_AMPLITUDE, DEFAULT_ELASTIC_IN_OUT_PERIOD, DEFAULT_ELASTIC_PERIOD,
};
pub use registry::EasingRegistry;
pub use sampling::{sample_curve, SampleConfig, SampledCurve};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
