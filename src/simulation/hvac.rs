use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::HourlyConditions;

/// Multiplicative HVAC adjustment rules.
///
/// Starting from a factor of 1.0:
/// - occupancy below `low_occupancy_threshold` multiplies by `vacancy_factor`
/// - temperature below `mild_temp_c` multiplies by `mild_factor`, otherwise
///   temperature above `hot_temp_c` multiplies by `hot_factor`
///
/// Temperatures in `[mild_temp_c, hot_temp_c]` leave the factor untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_temperature_band"))]
pub struct EfficiencyRules {
    #[validate(range(min = 0.0, max = 1.0))]
    pub low_occupancy_threshold: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub vacancy_factor: f64,
    pub mild_temp_c: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub mild_factor: f64,
    pub hot_temp_c: f64,
    #[validate(range(exclusive_min = 0.0))]
    pub hot_factor: f64,
}

impl Default for EfficiencyRules {
    fn default() -> Self {
        Self {
            low_occupancy_threshold: 0.3,
            vacancy_factor: 0.7,
            mild_temp_c: 26.0,
            mild_factor: 0.9,
            hot_temp_c: 30.0,
            hot_factor: 1.1,
        }
    }
}

fn validate_temperature_band(rules: &EfficiencyRules) -> Result<(), ValidationError> {
    if rules.mild_temp_c > rules.hot_temp_c {
        return Err(ValidationError::new("mild_temp_above_hot_temp"));
    }
    Ok(())
}

/// Rule-based HVAC optimizer.
///
/// Scales the historical usage of an hour by an efficiency factor derived from
/// occupancy and temperature. The factor can exceed 1.0 on hot days, so the
/// optimized usage may be higher than the historical one.
#[derive(Debug, Clone, Default)]
pub struct HvacOptimizer {
    rules: EfficiencyRules,
}

impl HvacOptimizer {
    pub fn new(rules: EfficiencyRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &EfficiencyRules {
        &self.rules
    }

    /// Cumulative efficiency factor for the given occupancy and temperature
    pub fn efficiency_factor(&self, occupancy: f64, temperature_c: f64) -> f64 {
        let mut factor = 1.0;

        if occupancy < self.rules.low_occupancy_threshold {
            factor *= self.rules.vacancy_factor;
        }

        if temperature_c < self.rules.mild_temp_c {
            factor *= self.rules.mild_factor;
        } else if temperature_c > self.rules.hot_temp_c {
            factor *= self.rules.hot_factor;
        }

        factor
    }

    /// Optimized usage in kWh for one hour
    pub fn optimize(&self, conditions: &HourlyConditions) -> f64 {
        conditions.historical_usage_kwh
            * self.efficiency_factor(conditions.occupancy, conditions.temperature_c)
    }
}
