use crate::core::score::Quality;
use crate::core::BatchOutcome;
use colored::Colorize;
use serde::{Serialize, Serializer};
use std::fmt;

const UNAVAILABLE: &str = "unavailable";

/// A factor sub-score, or the marker for a signal that was not supplied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FactorScore {
    Available(f64),
    Unavailable,
}

impl FactorScore {
    pub fn value(self) -> Option<f64> {
        match self {
            Self::Available(value) => Some(value),
            Self::Unavailable => None,
        }
    }
}

impl Serialize for FactorScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Available(value) => serializer.serialize_f64(*value),
            Self::Unavailable => serializer.serialize_str(UNAVAILABLE),
        }
    }
}

impl fmt::Display for FactorScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available(value) => write!(f, "{value:.1}"),
            Self::Unavailable => f.write_str(UNAVAILABLE),
        }
    }
}

/// Composite score. `Unavailable` means nothing was measured, which is not
/// the same as a poor night.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Total {
    Score(u8),
    Unavailable,
}

impl Total {
    pub fn value(self) -> Option<u8> {
        match self {
            Self::Score(value) => Some(value),
            Self::Unavailable => None,
        }
    }
}

impl Serialize for Total {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Score(value) => serializer.serialize_u8(*value),
            Self::Unavailable => serializer.serialize_str(UNAVAILABLE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorBreakdown {
    pub moon: FactorScore,
    pub light_pollution: FactorScore,
    pub weather: FactorScore,
}

impl FactorBreakdown {
    pub fn present_count(&self) -> usize {
        [self.moon, self.light_pollution, self.weather]
            .iter()
            .filter(|factor| factor.value().is_some())
            .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CompositeResult {
    pub total: Total,
    pub quality: Option<Quality>,
    pub factors: FactorBreakdown,
}

#[derive(Debug, Clone)]
pub struct GateStatus {
    pub ok: bool,
    pub reasons: Vec<String>,
}

impl GateStatus {
    pub fn reason_line(&self) -> String {
        self.reasons.join("; ")
    }
}

pub fn evaluate_gate(result: &CompositeResult, min_quality: Quality) -> GateStatus {
    let mut reasons = Vec::new();

    match result.quality {
        None => reasons.push("no conditions data available".to_string()),
        Some(quality) if quality < min_quality => reasons.push(format!(
            "quality {} is below min_quality {}",
            quality, min_quality
        )),
        Some(_) => {}
    }

    GateStatus {
        ok: reasons.is_empty(),
        reasons,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonBatchEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<CompositeResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&BatchOutcome> for JsonBatchEntry {
    fn from(outcome: &BatchOutcome) -> Self {
        match &outcome.result {
            Ok(result) => Self {
                name: outcome.name.clone(),
                result: Some(*result),
                error: None,
            },
            Err(err) => Self {
                name: outcome.name.clone(),
                result: None,
                error: Some(err.to_string()),
            },
        }
    }
}

fn colored_quality(quality: Option<Quality>) -> String {
    match quality {
        Some(Quality::Excellent) => "EXCELLENT".green().bold().to_string(),
        Some(Quality::Good) => "GOOD".cyan().bold().to_string(),
        Some(Quality::Fair) => "FAIR".yellow().bold().to_string(),
        Some(Quality::Poor) => "POOR".red().bold().to_string(),
        None => "NO DATA".dimmed().bold().to_string(),
    }
}

fn total_line(total: Total) -> String {
    match total {
        Total::Score(value) => format!("{}/100", value),
        Total::Unavailable => UNAVAILABLE.to_string(),
    }
}

pub fn print_human(result: &CompositeResult, gate: &GateStatus) {
    println!(
        "Stargazing Score: {} ({})",
        total_line(result.total),
        colored_quality(result.quality)
    );
    println!();
    println!("moon             {}", result.factors.moon);
    println!("light pollution  {}", result.factors.light_pollution);
    println!("weather          {}", result.factors.weather);

    println!();
    if gate.ok {
        println!("exit: OK");
    } else {
        println!("exit: FAILED ({})", gate.reason_line());
    }
}

pub fn print_batch_human(outcomes: &[BatchOutcome]) {
    for outcome in outcomes {
        match &outcome.result {
            Ok(result) => println!(
                "{:<24} {:>12}  {}",
                outcome.name,
                total_line(result.total),
                colored_quality(result.quality)
            ),
            Err(err) => println!(
                "{:<24} {:>12}  {}",
                outcome.name,
                "-",
                format!("invalid: {err}").red()
            ),
        }
    }
}
