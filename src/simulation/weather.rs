//! Ambient temperature forecast.
//!
//! A single daily distribution: the forecast does not depend on the hour.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherForecasterConfig {
    /// Lowest forecast temperature in °C
    pub min_temp_c: f64,
    /// Highest forecast temperature in °C
    pub max_temp_c: f64,
}

impl Default for WeatherForecasterConfig {
    fn default() -> Self {
        Self {
            min_temp_c: 24.0,
            max_temp_c: 35.0,
        }
    }
}

pub struct WeatherForecaster {
    config: WeatherForecasterConfig,
}

impl WeatherForecaster {
    pub fn new(config: WeatherForecasterConfig) -> Self {
        Self { config }
    }

    /// Forecast the ambient temperature in °C (one draw from `rng`)
    pub fn forecast<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.config.min_temp_c..=self.config.max_temp_c)
    }
}

impl Default for WeatherForecaster {
    fn default() -> Self {
        Self::new(WeatherForecasterConfig::default())
    }
}
