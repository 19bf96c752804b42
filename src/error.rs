use thiserror::Error;

/// A raw signal outside its documented domain. Inputs are never clamped.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SignalError {
    #[error("moon illumination {0} is outside 0..=100 percent")]
    MoonIllumination(f64),

    #[error("light pollution class {0} is outside the Bortle scale 1..=9")]
    LightPollutionClass(i64),

    #[error("cloud cover {0} is outside 0..=100 percent")]
    CloudCover(f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightError {
    #[error("{factor} weight {value} must be a finite number in 0..=1")]
    OutOfRange { factor: &'static str, value: f64 },

    #[error("weights must sum to 1.0 (got {0})")]
    BadSum(f64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThresholdError {
    #[error("thresholds must satisfy 100 >= excellent > good > fair (got {excellent}/{good}/{fair})")]
    NotDescending { excellent: u8, good: u8, fair: u8 },
}

/// Errors raised while turning a parsed config file into a scorer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid [weights]: {0}")]
    Weights(#[from] WeightError),

    #[error("invalid [thresholds]: {0}")]
    Thresholds(#[from] ThresholdError),
}
