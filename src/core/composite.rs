//! Aggregation of sub-scores into the composite total.
//!
//! Both strategies renormalize over the factors that are present: a missing
//! factor drops out of the denominator instead of counting as zero.

use crate::core::factors::Factor;
use crate::core::report::{FactorBreakdown, Total};
use crate::core::weights::WeightTable;
use serde::{Deserialize, Serialize};

const ROUNDING_TOLERANCE: f64 = 1e-12;

pub trait Aggregator: Send + Sync {
    fn name(&self) -> &'static str;

    /// Unrounded composite, or `None` when no factor carries weight.
    fn combine(&self, factors: &FactorBreakdown, weights: &WeightTable) -> Option<f64>;

    /// Rounds exactly once, after aggregation.
    fn total(&self, factors: &FactorBreakdown, weights: &WeightTable) -> Total {
        match self.combine(factors, weights) {
            Some(raw) => Total::Score(round_half_up(raw)),
            None => Total::Unavailable,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Aggregation {
    #[default]
    WeightedMean,
    WeightedGeometric,
}

impl Aggregation {
    pub fn aggregator(self) -> Box<dyn Aggregator> {
        match self {
            Self::WeightedMean => Box::new(WeightedMean),
            Self::WeightedGeometric => Box::new(WeightedGeometricMean),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedMean;

impl Aggregator for WeightedMean {
    fn name(&self) -> &'static str {
        "weighted-mean"
    }

    fn combine(&self, factors: &FactorBreakdown, weights: &WeightTable) -> Option<f64> {
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;

        for (factor, value) in present(factors) {
            let weight = weights.weight(factor);
            weighted_sum += value * weight;
            total_weight += weight;
        }

        if total_weight == 0.0 {
            return None;
        }
        Some(weighted_sum / total_weight)
    }
}

/// Weighted geometric mean. Any present factor at zero drags the total to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedGeometricMean;

impl Aggregator for WeightedGeometricMean {
    fn name(&self) -> &'static str {
        "weighted-geometric"
    }

    fn combine(&self, factors: &FactorBreakdown, weights: &WeightTable) -> Option<f64> {
        let mut log_sum = 0.0;
        let mut total_weight = 0.0;
        let mut has_zero = false;

        for (factor, value) in present(factors) {
            let weight = weights.weight(factor);
            if weight == 0.0 {
                continue;
            }
            if value <= 0.0 {
                has_zero = true;
            } else {
                log_sum += value.ln() * weight;
            }
            total_weight += weight;
        }

        if total_weight == 0.0 {
            return None;
        }
        if has_zero {
            return Some(0.0);
        }
        Some((log_sum / total_weight).exp())
    }
}

fn present(factors: &FactorBreakdown) -> impl Iterator<Item = (Factor, f64)> {
    [
        (Factor::Moon, factors.moon),
        (Factor::LightPollution, factors.light_pollution),
        (Factor::Weather, factors.weather),
    ]
    .into_iter()
    .filter_map(|(factor, score)| score.value().map(|value| (factor, value)))
}

/// Round to nearest, halves up.
///
/// A value within `1e-12` of its magnitude below a half counts as the half,
/// so 87.5 reached through inexact binary arithmetic still rounds up. That
/// window is a few thousand ULPs wide at 100, far below any difference an
/// input can express: 50.4999999995 still rounds to 50.
pub fn round_half_up(raw: f64) -> u8 {
    let tolerance = raw.abs().max(1.0) * ROUNDING_TOLERANCE;
    (raw + 0.5 + tolerance).floor().clamp(0.0, 100.0) as u8
}
