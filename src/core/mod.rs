pub mod composite;
pub mod factors;
pub mod report;
pub mod score;
pub mod weights;

use crate::config::Config;
use crate::core::composite::{Aggregation, Aggregator};
use crate::core::report::{CompositeResult, FactorBreakdown, FactorScore};
use crate::core::score::Thresholds;
use crate::core::weights::{SharedWeights, WeightTable};
use crate::error::{ConfigError, SignalError};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

static DEFAULT_SCORER: Lazy<Scorer> = Lazy::new(Scorer::default);

/// Signals for one night at one place. `None` means unknown, not zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSignals {
    pub moon_illumination: Option<f64>,
    pub light_pollution_class: Option<i64>,
    pub cloud_cover: Option<f64>,
}

impl RawSignals {
    pub fn with_moon_illumination(mut self, illumination: f64) -> Self {
        self.moon_illumination = Some(illumination);
        self
    }

    pub fn with_light_pollution_class(mut self, class: i64) -> Self {
        self.light_pollution_class = Some(class);
        self
    }

    pub fn with_cloud_cover(mut self, cloud_cover: f64) -> Self {
        self.cloud_cover = Some(cloud_cover);
        self
    }
}

pub struct Scorer {
    weights: Arc<SharedWeights>,
    thresholds: Thresholds,
    aggregator: Box<dyn Aggregator>,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(
            WeightTable::default(),
            Thresholds::default(),
            Aggregation::default(),
        )
    }
}

impl Scorer {
    pub fn new(weights: WeightTable, thresholds: Thresholds, aggregation: Aggregation) -> Self {
        Self {
            weights: Arc::new(SharedWeights::new(weights)),
            thresholds,
            aggregator: aggregation.aggregator(),
        }
    }

    pub fn from_config(cfg: &Config) -> Result<Self, ConfigError> {
        let weights = cfg.weights.to_table()?;
        let thresholds = cfg.thresholds.to_thresholds()?;
        Ok(Self::new(weights, thresholds, cfg.scoring.aggregation))
    }

    /// Swap in a custom aggregation strategy.
    pub fn with_aggregator(mut self, aggregator: Box<dyn Aggregator>) -> Self {
        self.aggregator = aggregator;
        self
    }

    /// Handle for replacing weights while other threads keep scoring.
    pub fn weights(&self) -> Arc<SharedWeights> {
        Arc::clone(&self.weights)
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    pub fn aggregator_name(&self) -> &'static str {
        self.aggregator.name()
    }

    pub fn score(&self, signals: &RawSignals) -> Result<CompositeResult, SignalError> {
        let factors = transform(signals).inspect_err(|err| {
            warn!(error = %err, "rejected out-of-domain signal");
        })?;

        let weights = self.weights.snapshot();
        let total = self.aggregator.total(&factors, &weights);
        let quality = total
            .value()
            .map(|value| score::classify(value, &self.thresholds));

        debug!(
            present = factors.present_count(),
            aggregator = self.aggregator.name(),
            total = ?total,
            quality = ?quality,
            "scored conditions"
        );

        Ok(CompositeResult {
            total,
            quality,
            factors,
        })
    }

    /// Scores every entry independently, best first. Invalid entries keep
    /// their error and sort last.
    pub fn score_batch(&self, entries: &[BatchEntry]) -> Vec<BatchOutcome> {
        let mut outcomes: Vec<BatchOutcome> = entries
            .iter()
            .map(|entry| BatchOutcome {
                name: entry.name.clone(),
                result: self.score(&entry.signals),
            })
            .collect();

        outcomes.sort_by_key(|outcome| std::cmp::Reverse(outcome_rank(outcome)));
        outcomes
    }
}

/// Scores with the default weights, thresholds, and weighted mean.
pub fn score(signals: &RawSignals) -> Result<CompositeResult, SignalError> {
    DEFAULT_SCORER.score(signals)
}

fn transform(signals: &RawSignals) -> Result<FactorBreakdown, SignalError> {
    Ok(FactorBreakdown {
        moon: lift(signals.moon_illumination, factors::moon_score)?,
        light_pollution: lift(signals.light_pollution_class, factors::bortle_score)?,
        weather: lift(signals.cloud_cover, factors::weather_score)?,
    })
}

fn lift<T>(
    raw: Option<T>,
    transform: fn(T) -> Result<f64, SignalError>,
) -> Result<FactorScore, SignalError> {
    match raw {
        Some(value) => transform(value).map(FactorScore::Available),
        None => Ok(FactorScore::Unavailable),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchEntry {
    pub name: String,
    #[serde(flatten)]
    pub signals: RawSignals,
}

#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub name: String,
    pub result: Result<CompositeResult, SignalError>,
}

impl BatchOutcome {
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }
}

// Scored entries above unavailable ones, invalid entries last.
fn outcome_rank(outcome: &BatchOutcome) -> (u8, u8) {
    match &outcome.result {
        Ok(result) => match result.total.value() {
            Some(total) => (2, total),
            None => (1, 0),
        },
        Err(_) => (0, 0),
    }
}
