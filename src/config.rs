use crate::core::composite::Aggregation;
use crate::core::score::{Quality, Thresholds};
use crate::core::weights::WeightTable;
use crate::error::{ThresholdError, WeightError};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "skyscore.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub weights: WeightsConfig,
    pub thresholds: ThresholdsConfig,
    pub scoring: ScoringConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub min_quality: Quality,
    pub json: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            min_quality: Quality::Poor,
            json: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightsConfig {
    pub moon: f64,
    pub light_pollution: f64,
    pub weather: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            moon: 0.40,
            light_pollution: 0.30,
            weather: 0.30,
        }
    }
}

impl WeightsConfig {
    pub fn to_table(&self) -> Result<WeightTable, WeightError> {
        WeightTable::new(self.moon, self.light_pollution, self.weather)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdsConfig {
    pub excellent: u8,
    pub good: u8,
    pub fair: u8,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            excellent: 80,
            good: 60,
            fair: 40,
        }
    }
}

impl ThresholdsConfig {
    pub fn to_thresholds(&self) -> Result<Thresholds, ThresholdError> {
        Thresholds::new(self.excellent, self.good, self.fair)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub aggregation: Aggregation,
}

pub fn load_config(cli_config_path: Option<&Path>, cwd: &Path) -> Result<Config> {
    if let Some(path) = cli_config_path {
        if !path.exists() {
            bail!(
                "config file not found at {} (passed with --config)",
                path.display()
            );
        }
        return read_config(path);
    }

    let local_path = cwd.join(CONFIG_FILE_NAME);
    if local_path.exists() {
        return read_config(&local_path);
    }

    Ok(Config::default())
}

pub fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!(
            "refusing to overwrite existing config file: {}",
            path.display()
        );
    }

    let content = default_config_toml()?;
    fs::write(path, content).with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}

pub fn default_config_toml() -> Result<String> {
    toml::to_string_pretty(&Config::default()).context("failed to serialize default config")
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed reading config file {}", path.display()))?;
    let config = toml::from_str::<Config>(&content)
        .with_context(|| format!("failed parsing config file {}", path.display()))?;
    validate(&config).with_context(|| format!("invalid config file {}", path.display()))?;
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    config.weights.to_table()?;
    config.thresholds.to_thresholds()?;
    Ok(())
}
