//! Sampling API: bake an easing curve into an evenly spaced lookup table.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::kind::Easing;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    /// Number of intervals; the table holds `samples + 1` values.
    pub samples: usize,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self { samples: 60 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampledCurve {
    /// Canonical name of the sampled curve.
    pub easing: String,
    /// Shaped ratios at progress `i / samples`.
    pub values: Vec<f64>,
}

impl SampledCurve {
    /// Linear lookup between neighbouring samples. `n` is clamped to [0, 1].
    pub fn value_at(&self, n: f64) -> f64 {
        let Some(&first) = self.values.first() else {
            return 0.0;
        };
        let last_index = self.values.len() - 1;
        if last_index == 0 {
            return first;
        }
        let pos = n.clamp(0.0, 1.0) * last_index as f64;
        let i = (pos.floor() as usize).min(last_index - 1);
        let frac = pos - i as f64;
        let a = self.values[i];
        let b = self.values[i + 1];
        a + (b - a) * frac
    }
}

/// Evaluate `easing` at `samples + 1` evenly spaced progress values.
pub fn sample_curve(easing: &Easing, cfg: &SampleConfig) -> Result<SampledCurve> {
    let samples = cfg.samples;
    log::trace!("sampling '{}' with {} intervals", easing.name(), samples);

    let values = if samples == 0 {
        vec![easing.apply(0.0)?]
    } else {
        (0..=samples)
            .map(|i| {
                // pin the final step so rounding never pushes it past 1.0
                let n = if i == samples {
                    1.0
                } else {
                    i as f64 / samples as f64
                };
                easing.apply(n)
            })
            .collect::<Result<Vec<f64>>>()?
    };

    Ok(SampledCurve {
        easing: easing.name().to_string(),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn default_config_has_61_values() {
        let curve = sample_curve(&Easing::Linear, &SampleConfig::default()).unwrap();
        assert_eq!(curve.values.len(), 61);
        assert_eq!(curve.easing, "linear");
        assert_eq!(curve.values[0], 0.0);
        assert_eq!(curve.values[60], 1.0);
    }

    #[test]
    fn zero_samples_yields_start_value() {
        let curve = sample_curve(&Easing::EaseOutQuad, &SampleConfig { samples: 0 }).unwrap();
        assert_eq!(curve.values, vec![0.0]);
        assert_eq!(curve.value_at(0.7), 0.0);
    }

    #[test]
    fn lookup_interpolates_between_samples() {
        let curve = sample_curve(&Easing::EaseInQuad, &SampleConfig { samples: 4 }).unwrap();
        assert_eq!(curve.values, vec![0.0, 0.0625, 0.25, 0.5625, 1.0]);
        assert_eq!(curve.value_at(0.5), 0.25);
        assert_abs_diff_eq!(curve.value_at(0.125), 0.03125, epsilon = 1e-12);
        assert_eq!(curve.value_at(-3.0), 0.0);
        assert_eq!(curve.value_at(3.0), 1.0);
    }

    #[test]
    fn config_from_json() {
        let cfg: SampleConfig = serde_json::from_str(r#"{"samples":8}"#).unwrap();
        assert_eq!(cfg.samples, 8);
        let cfg: SampleConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, SampleConfig::default());
    }
}
