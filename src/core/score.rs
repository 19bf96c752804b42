use crate::error::ThresholdError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Quality {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive lower bounds for each label above `poor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Thresholds {
    excellent: u8,
    good: u8,
    fair: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            excellent: 80,
            good: 60,
            fair: 40,
        }
    }
}

impl Thresholds {
    pub fn new(excellent: u8, good: u8, fair: u8) -> Result<Self, ThresholdError> {
        if excellent > 100 || excellent <= good || good <= fair {
            return Err(ThresholdError::NotDescending {
                excellent,
                good,
                fair,
            });
        }
        Ok(Self {
            excellent,
            good,
            fair,
        })
    }

    pub fn lower_bound(&self, quality: Quality) -> u8 {
        match quality {
            Quality::Excellent => self.excellent,
            Quality::Good => self.good,
            Quality::Fair => self.fair,
            Quality::Poor => 0,
        }
    }
}

pub fn classify(score: u8, thresholds: &Thresholds) -> Quality {
    if score >= thresholds.excellent {
        Quality::Excellent
    } else if score >= thresholds.good {
        Quality::Good
    } else if score >= thresholds.fair {
        Quality::Fair
    } else {
        Quality::Poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_on_inclusive_lower_bounds() {
        let thresholds = Thresholds::default();
        let cases = [
            (100, Quality::Excellent),
            (80, Quality::Excellent),
            (79, Quality::Good),
            (60, Quality::Good),
            (59, Quality::Fair),
            (40, Quality::Fair),
            (39, Quality::Poor),
            (0, Quality::Poor),
        ];
        for (score, want) in cases {
            assert_eq!(classify(score, &thresholds), want, "score {score}");
        }
    }

    #[test]
    fn custom_thresholds_shift_labels() {
        let thresholds = Thresholds::new(90, 70, 50).unwrap();
        assert_eq!(classify(85, &thresholds), Quality::Good);
        assert_eq!(classify(50, &thresholds), Quality::Fair);
        assert_eq!(classify(49, &thresholds), Quality::Poor);
    }

    #[test]
    fn rejects_unordered_thresholds() {
        assert!(Thresholds::new(60, 80, 40).is_err());
        assert!(Thresholds::new(80, 60, 60).is_err());
        assert!(Thresholds::new(101, 60, 40).is_err());
    }

    #[test]
    fn quality_orders_from_poor_to_excellent() {
        assert!(Quality::Poor < Quality::Fair);
        assert!(Quality::Good < Quality::Excellent);
        assert_eq!(
            serde_json::to_string(&Quality::Excellent).unwrap(),
            "\"excellent\""
        );
    }
}
