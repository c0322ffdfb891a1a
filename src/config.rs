use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::{Validate, ValidationError};

use crate::domain::{PeakHours, HOURS_PER_DAY};
use crate::error::SimResult;
use crate::simulation::EfficiencyRules;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct Config {
    #[validate(nested)]
    pub simulation: SimulationConfig,
    #[validate(nested)]
    pub optimizer: EfficiencyRules,
    pub chart: ChartConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SimulationConfig {
    #[validate(range(min = 0.0))]
    pub cost_per_kwh: f64,
    #[validate(range(min = 0.0))]
    pub baseline_usage_kwh: f64,
    #[validate(custom(function = "validate_peak_hours"))]
    pub peak_hours: PeakHours,
    /// Fixed seed for reproducible runs; `None` seeds from entropy
    pub random_seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            cost_per_kwh: 0.2,
            baseline_usage_kwh: 100.0,
            peak_hours: PeakHours::default(),
            random_seed: None,
        }
    }
}

fn validate_peak_hours(peak: &PeakHours) -> Result<(), ValidationError> {
    if peak.start > peak.end || peak.end >= HOURS_PER_DAY {
        return Err(ValidationError::new("peak_hours_out_of_range"));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMode {
    /// Open a viewer window
    #[default]
    Spawn,
    /// Write a recording to `ChartConfig::path`
    Save,
    Off,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfig {
    pub mode: ChartMode,
    pub path: PathBuf,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            mode: ChartMode::default(),
            path: PathBuf::from("energy_consumption.rrd"),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file("config/default.toml"))
            .merge(Env::prefixed("BEMS__").split("__"));
        let config: Config = figment.extract()?;
        config.check()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn check(&self) -> SimResult<()> {
        self.validate()?;
        Ok(())
    }
}
