//! Per-factor transforms: raw signal to a 0-100 sub-score.
//!
//! Each transform is total over its domain and rejects anything outside it.
//! Absent inputs never reach these functions; see [`FactorScore`].
//!
//! [`FactorScore`]: crate::core::report::FactorScore

use crate::error::SignalError;

/// Bortle class 1..=9 to score, indexed by `class - 1`.
///
/// Flat at both ends: 1 and 2 are equally dark for casual observing, 8 and 9
/// are equally unusable.
pub const BORTLE_SCORES: [u8; 9] = [100, 100, 80, 60, 45, 30, 15, 0, 0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Factor {
    Moon,
    LightPollution,
    Weather,
}

impl Factor {
    pub const ALL: [Factor; 3] = [Factor::Moon, Factor::LightPollution, Factor::Weather];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Moon => "moon",
            Self::LightPollution => "light pollution",
            Self::Weather => "weather",
        }
    }
}

/// `100 - illumination`. Linear on purpose.
pub fn moon_score(illumination: f64) -> Result<f64, SignalError> {
    if !in_percent_domain(illumination) {
        return Err(SignalError::MoonIllumination(illumination));
    }
    Ok(100.0 - illumination)
}

/// Takes a wide integer so any whole number reaches the domain check.
pub fn bortle_score(class: i64) -> Result<f64, SignalError> {
    match class {
        1..=9 => Ok(f64::from(BORTLE_SCORES[(class - 1) as usize])),
        _ => Err(SignalError::LightPollutionClass(class)),
    }
}

/// `100 - cloud_cover`.
pub fn weather_score(cloud_cover: f64) -> Result<f64, SignalError> {
    if !in_percent_domain(cloud_cover) {
        return Err(SignalError::CloudCover(cloud_cover));
    }
    Ok(100.0 - cloud_cover)
}

fn in_percent_domain(value: f64) -> bool {
    value.is_finite() && (0.0..=100.0).contains(&value)
}
