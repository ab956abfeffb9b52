//! A single value type naming every easing curve.
//!
//! `Easing` wraps the free functions behind one `apply(n)` call so curves can
//! be stored, serialized and chosen at runtime. Parameterized variants carry
//! their tuning parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::easing::*;
use crate::error::{EasingError, Result};
use crate::params::{BackParams, ElasticParams};

/// Plain function shape shared by every unparameterized easing.
pub type EasingFn = fn(f64) -> Result<f64>;

/// Curve family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    Linear,
    Quad,
    Cubic,
    Quart,
    Quint,
    Sine,
    Expo,
    Circ,
    Elastic,
    Back,
    Bounce,
}

/// Which end(s) of the curve are eased
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Linear has no in/out split.
    None,
    In,
    Out,
    InOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
    EaseInCirc,
    EaseOutCirc,
    EaseInOutCirc,
    EaseInElastic(ElasticParams),
    EaseOutElastic(ElasticParams),
    EaseInOutElastic(ElasticParams),
    EaseInBack(BackParams),
    EaseOutBack(BackParams),
    EaseInOutBack(BackParams),
    EaseInBounce,
    EaseOutBounce,
    EaseInOutBounce,
}

const ALL: [Easing; 31] = [
    Easing::Linear,
    Easing::EaseInQuad,
    Easing::EaseOutQuad,
    Easing::EaseInOutQuad,
    Easing::EaseInCubic,
    Easing::EaseOutCubic,
    Easing::EaseInOutCubic,
    Easing::EaseInQuart,
    Easing::EaseOutQuart,
    Easing::EaseInOutQuart,
    Easing::EaseInQuint,
    Easing::EaseOutQuint,
    Easing::EaseInOutQuint,
    Easing::EaseInSine,
    Easing::EaseOutSine,
    Easing::EaseInOutSine,
    Easing::EaseInExpo,
    Easing::EaseOutExpo,
    Easing::EaseInOutExpo,
    Easing::EaseInCirc,
    Easing::EaseOutCirc,
    Easing::EaseInOutCirc,
    Easing::EaseInElastic(ElasticParams::new(None, None)),
    Easing::EaseOutElastic(ElasticParams::new(None, None)),
    Easing::EaseInOutElastic(ElasticParams::new(None, None)),
    Easing::EaseInBack(BackParams::new(None)),
    Easing::EaseOutBack(BackParams::new(None)),
    Easing::EaseInOutBack(BackParams::new(None)),
    Easing::EaseInBounce,
    Easing::EaseOutBounce,
    Easing::EaseInOutBounce,
];

impl Easing {
    /// Every curve, parameterized ones with default parameters.
    pub fn all() -> impl Iterator<Item = Easing> {
        ALL.into_iter()
    }

    /// Evaluate the curve at progress `n`.
    pub fn apply(&self, n: f64) -> Result<f64> {
        match self {
            Self::EaseInElastic(p) => ease_in_elastic_with(n, p),
            Self::EaseOutElastic(p) => ease_out_elastic_with(n, p),
            Self::EaseInOutElastic(p) => ease_in_out_elastic_with(n, p),
            Self::EaseInBack(p) => ease_in_back_with(n, p),
            Self::EaseOutBack(p) => ease_out_back_with(n, p),
            Self::EaseInOutBack(p) => ease_in_out_back_with(n, p),
            Self::Linear => linear(n),
            Self::EaseInQuad => ease_in_quad(n),
            Self::EaseOutQuad => ease_out_quad(n),
            Self::EaseInOutQuad => ease_in_out_quad(n),
            Self::EaseInCubic => ease_in_cubic(n),
            Self::EaseOutCubic => ease_out_cubic(n),
            Self::EaseInOutCubic => ease_in_out_cubic(n),
            Self::EaseInQuart => ease_in_quart(n),
            Self::EaseOutQuart => ease_out_quart(n),
            Self::EaseInOutQuart => ease_in_out_quart(n),
            Self::EaseInQuint => ease_in_quint(n),
            Self::EaseOutQuint => ease_out_quint(n),
            Self::EaseInOutQuint => ease_in_out_quint(n),
            Self::EaseInSine => ease_in_sine(n),
            Self::EaseOutSine => ease_out_sine(n),
            Self::EaseInOutSine => ease_in_out_sine(n),
            Self::EaseInExpo => ease_in_expo(n),
            Self::EaseOutExpo => ease_out_expo(n),
            Self::EaseInOutExpo => ease_in_out_expo(n),
            Self::EaseInCirc => ease_in_circ(n),
            Self::EaseOutCirc => ease_out_circ(n),
            Self::EaseInOutCirc => ease_in_out_circ(n),
            Self::EaseInBounce => ease_in_bounce(n),
            Self::EaseOutBounce => ease_out_bounce(n),
            Self::EaseInOutBounce => ease_in_out_bounce(n),
        }
    }

    /// The plain function for unparameterized curves.
    pub fn function(&self) -> Option<EasingFn> {
        let f: EasingFn = match self {
            Self::Linear => linear,
            Self::EaseInQuad => ease_in_quad,
            Self::EaseOutQuad => ease_out_quad,
            Self::EaseInOutQuad => ease_in_out_quad,
            Self::EaseInCubic => ease_in_cubic,
            Self::EaseOutCubic => ease_out_cubic,
            Self::EaseInOutCubic => ease_in_out_cubic,
            Self::EaseInQuart => ease_in_quart,
            Self::EaseOutQuart => ease_out_quart,
            Self::EaseInOutQuart => ease_in_out_quart,
            Self::EaseInQuint => ease_in_quint,
            Self::EaseOutQuint => ease_out_quint,
            Self::EaseInOutQuint => ease_in_out_quint,
            Self::EaseInSine => ease_in_sine,
            Self::EaseOutSine => ease_out_sine,
            Self::EaseInOutSine => ease_in_out_sine,
            Self::EaseInExpo => ease_in_expo,
            Self::EaseOutExpo => ease_out_expo,
            Self::EaseInOutExpo => ease_in_out_expo,
            Self::EaseInCirc => ease_in_circ,
            Self::EaseOutCirc => ease_out_circ,
            Self::EaseInOutCirc => ease_in_out_circ,
            Self::EaseInBounce => ease_in_bounce,
            Self::EaseOutBounce => ease_out_bounce,
            Self::EaseInOutBounce => ease_in_out_bounce,
            Self::EaseInElastic(_)
            | Self::EaseOutElastic(_)
            | Self::EaseInOutElastic(_)
            | Self::EaseInBack(_)
            | Self::EaseOutBack(_)
            | Self::EaseInOutBack(_) => return None,
        };
        Some(f)
    }

    /// Canonical snake_case name, matching the serde tag.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseInQuad => "ease_in_quad",
            Self::EaseOutQuad => "ease_out_quad",
            Self::EaseInOutQuad => "ease_in_out_quad",
            Self::EaseInCubic => "ease_in_cubic",
            Self::EaseOutCubic => "ease_out_cubic",
            Self::EaseInOutCubic => "ease_in_out_cubic",
            Self::EaseInQuart => "ease_in_quart",
            Self::EaseOutQuart => "ease_out_quart",
            Self::EaseInOutQuart => "ease_in_out_quart",
            Self::EaseInQuint => "ease_in_quint",
            Self::EaseOutQuint => "ease_out_quint",
            Self::EaseInOutQuint => "ease_in_out_quint",
            Self::EaseInSine => "ease_in_sine",
            Self::EaseOutSine => "ease_out_sine",
            Self::EaseInOutSine => "ease_in_out_sine",
            Self::EaseInExpo => "ease_in_expo",
            Self::EaseOutExpo => "ease_out_expo",
            Self::EaseInOutExpo => "ease_in_out_expo",
            Self::EaseInCirc => "ease_in_circ",
            Self::EaseOutCirc => "ease_out_circ",
            Self::EaseInOutCirc => "ease_in_out_circ",
            Self::EaseInElastic(_) => "ease_in_elastic",
            Self::EaseOutElastic(_) => "ease_out_elastic",
            Self::EaseInOutElastic(_) => "ease_in_out_elastic",
            Self::EaseInBack(_) => "ease_in_back",
            Self::EaseOutBack(_) => "ease_out_back",
            Self::EaseInOutBack(_) => "ease_in_out_back",
            Self::EaseInBounce => "ease_in_bounce",
            Self::EaseOutBounce => "ease_out_bounce",
            Self::EaseInOutBounce => "ease_in_out_bounce",
        }
    }

    pub fn family(&self) -> Family {
        match self {
            Self::Linear => Family::Linear,
            Self::EaseInQuad | Self::EaseOutQuad | Self::EaseInOutQuad => Family::Quad,
            Self::EaseInCubic | Self::EaseOutCubic | Self::EaseInOutCubic => Family::Cubic,
            Self::EaseInQuart | Self::EaseOutQuart | Self::EaseInOutQuart => Family::Quart,
            Self::EaseInQuint | Self::EaseOutQuint | Self::EaseInOutQuint => Family::Quint,
            Self::EaseInSine | Self::EaseOutSine | Self::EaseInOutSine => Family::Sine,
            Self::EaseInExpo | Self::EaseOutExpo | Self::EaseInOutExpo => Family::Expo,
            Self::EaseInCirc | Self::EaseOutCirc | Self::EaseInOutCirc => Family::Circ,
            Self::EaseInElastic(_) | Self::EaseOutElastic(_) | Self::EaseInOutElastic(_) => {
                Family::Elastic
            }
            Self::EaseInBack(_) | Self::EaseOutBack(_) | Self::EaseInOutBack(_) => Family::Back,
            Self::EaseInBounce | Self::EaseOutBounce | Self::EaseInOutBounce => Family::Bounce,
        }
    }

    pub fn variant(&self) -> Variant {
        let name = self.name();
        if name.starts_with("ease_in_out_") {
            Variant::InOut
        } else if name.starts_with("ease_in_") {
            Variant::In
        } else if name.starts_with("ease_out_") {
            Variant::Out
        } else {
            Variant::None
        }
    }

    /// Whether the curve may leave [0, 1] strictly inside the interval.
    #[inline]
    pub fn overshoots(&self) -> bool {
        matches!(self.family(), Family::Elastic | Family::Back)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase and drop separators so `EaseInQuad`, `ease-in-quad` and
/// `ease_in_quad` compare equal.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl FromStr for Easing {
    type Err = EasingError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = normalize(s);
        Easing::all()
            .find(|e| normalize(e.name()) == wanted)
            .ok_or_else(|| EasingError::UnknownEasing {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_names_are_unique() {
        let mut names: Vec<&str> = Easing::all().map(|e| e.name()).collect();
        assert_eq!(names.len(), 31);
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 31);
    }

    #[test]
    fn parse_accepts_several_spellings() {
        assert_eq!("ease_in_quad".parse::<Easing>(), Ok(Easing::EaseInQuad));
        assert_eq!("EaseInQuad".parse::<Easing>(), Ok(Easing::EaseInQuad));
        assert_eq!("ease-out-bounce".parse::<Easing>(), Ok(Easing::EaseOutBounce));
        assert_eq!("Linear".parse::<Easing>(), Ok(Easing::Linear));
        assert_eq!(
            "EaseInOutElastic".parse::<Easing>(),
            Ok(Easing::EaseInOutElastic(ElasticParams::default()))
        );
    }

    #[test]
    fn parse_unknown_name() {
        assert_eq!(
            "ease_in_wobble".parse::<Easing>(),
            Err(EasingError::UnknownEasing {
                name: "ease_in_wobble".into()
            })
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for e in Easing::all() {
            assert_eq!(e.to_string().parse::<Easing>(), Ok(e));
        }
    }

    #[test]
    fn family_and_variant() {
        assert_eq!(Easing::Linear.variant(), Variant::None);
        assert_eq!(Easing::EaseInOutCirc.family(), Family::Circ);
        assert_eq!(Easing::EaseInOutCirc.variant(), Variant::InOut);
        assert_eq!(Easing::EaseOutBack(BackParams::default()).variant(), Variant::Out);
        assert_eq!(Easing::EaseInBounce.variant(), Variant::In);
        assert!(Easing::EaseInBack(BackParams::default()).overshoots());
        assert!(!Easing::EaseOutBounce.overshoots());
    }

    #[test]
    fn function_only_for_unparameterized() {
        assert!(Easing::EaseInQuad.function().is_some());
        assert!(Easing::EaseInElastic(ElasticParams::default())
            .function()
            .is_none());
        let f = Easing::EaseInCubic.function().unwrap();
        assert_eq!(f(0.5), Ok(0.125));
    }

    #[test]
    fn apply_uses_carried_params() {
        let back = Easing::EaseInBack(BackParams::new(Some(0.0)));
        assert_eq!(back.apply(0.5), Ok(0.125));
        let elastic = Easing::EaseOutElastic(ElasticParams::new(Some(1.0), Some(0.3)));
        assert_eq!(
            elastic.apply(0.5),
            Easing::EaseOutElastic(ElasticParams::default()).apply(0.5)
        );
    }

    #[test]
    fn serde_uses_tagged_snake_case() {
        let json = serde_json::to_string(&Easing::EaseInOutQuad).unwrap();
        assert_eq!(json, r#"{"type":"ease_in_out_quad"}"#);

        let parsed: Easing =
            serde_json::from_str(r#"{"type":"ease_out_elastic","amplitude":1.5}"#).unwrap();
        assert_eq!(
            parsed,
            Easing::EaseOutElastic(ElasticParams::new(Some(1.5), None))
        );

        let back: Easing = serde_json::from_str(r#"{"type":"ease_in_back"}"#).unwrap();
        assert_eq!(back, Easing::EaseInBack(BackParams::default()));
    }
}
