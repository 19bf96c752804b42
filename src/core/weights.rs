//! Factor weights and their process-wide holder.
//!
//! A [`WeightTable`] can only be built through [`WeightTable::new`], so every
//! table in circulation sums to 1.0. [`SharedWeights`] swaps whole tables;
//! there is no way to edit one weight in place.

use crate::core::factors::Factor;
use crate::error::WeightError;
use serde::Serialize;
use std::sync::{Arc, RwLock};
use tracing::info;

const SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightTable {
    moon: f64,
    light_pollution: f64,
    weather: f64,
}

impl Default for WeightTable {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl WeightTable {
    pub const DEFAULT: Self = Self {
        moon: 0.40,
        light_pollution: 0.30,
        weather: 0.30,
    };

    pub fn new(moon: f64, light_pollution: f64, weather: f64) -> Result<Self, WeightError> {
        for (factor, value) in [
            (Factor::Moon, moon),
            (Factor::LightPollution, light_pollution),
            (Factor::Weather, weather),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(WeightError::OutOfRange {
                    factor: factor.as_str(),
                    value,
                });
            }
        }

        let sum = moon + light_pollution + weather;
        if (sum - 1.0).abs() > SUM_TOLERANCE {
            return Err(WeightError::BadSum(sum));
        }

        Ok(Self {
            moon,
            light_pollution,
            weather,
        })
    }

    pub fn weight(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Moon => self.moon,
            Factor::LightPollution => self.light_pollution,
            Factor::Weather => self.weather,
        }
    }
}

/// Weight table shared between concurrent scorers.
///
/// Readers clone the current `Arc` and score against that snapshot, so a
/// replacement mid-call never mixes weights from two tables.
#[derive(Debug, Default)]
pub struct SharedWeights {
    inner: RwLock<Arc<WeightTable>>,
}

impl SharedWeights {
    pub fn new(table: WeightTable) -> Self {
        Self {
            inner: RwLock::new(Arc::new(table)),
        }
    }

    pub fn snapshot(&self) -> Arc<WeightTable> {
        // A poisoned lock still holds a complete table.
        match self.inner.read() {
            Ok(guard) => Arc::clone(&*guard),
            Err(poisoned) => Arc::clone(&*poisoned.into_inner()),
        }
    }

    pub fn replace(&self, table: WeightTable) {
        let next = Arc::new(table);
        match self.inner.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
        info!(
            moon = table.moon,
            light_pollution = table.light_pollution,
            weather = table.weather,
            "weight table replaced"
        );
    }
}
