//! Stargazing conditions scoring.
//!
//! Reduces moon illumination, Bortle class, and cloud cover into a single
//! 0-100 score with a quality label. Missing signals drop out of the blend
//! instead of counting against the night; out-of-domain signals are rejected.
//!
//! ```
//! use skyscore::{RawSignals, Total, score};
//!
//! let signals = RawSignals::default()
//!     .with_moon_illumination(50.0)
//!     .with_cloud_cover(20.0);
//! let result = score(&signals).unwrap();
//! assert_eq!(result.total, Total::Score(63));
//! ```

pub mod config;
pub mod core;
pub mod error;

pub use crate::core::composite::{Aggregation, Aggregator, WeightedGeometricMean, WeightedMean};
pub use crate::core::report::{CompositeResult, FactorBreakdown, FactorScore, Total};
pub use crate::core::score::{Quality, Thresholds};
pub use crate::core::weights::{SharedWeights, WeightTable};
pub use crate::core::{BatchEntry, BatchOutcome, RawSignals, Scorer, score};
pub use crate::error::{ConfigError, SignalError, ThresholdError, WeightError};
