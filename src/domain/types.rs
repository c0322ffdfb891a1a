use serde::{Deserialize, Serialize};

/// Number of hourly steps in one simulated day.
pub const HOURS_PER_DAY: u32 = 24;

// ============================================================================
// Peak Hours
// ============================================================================

/// Inclusive range of office hours treated as high occupancy / high usage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakHours {
    pub start: u32,
    pub end: u32,
}

impl PeakHours {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Check whether `hour` falls within the peak window (both ends inclusive)
    pub fn contains(&self, hour: u32) -> bool {
        (self.start..=self.end).contains(&hour)
    }
}

impl Default for PeakHours {
    fn default() -> Self {
        Self { start: 8, end: 18 }
    }
}

// ============================================================================
// Hourly Data
// ============================================================================

/// Inputs the optimizer sees for a single hour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyConditions {
    /// Fraction of the building that is occupied (0-1)
    pub occupancy: f64,
    /// Ambient temperature forecast in °C
    pub temperature_c: f64,
    /// Baseline energy usage for the hour in kWh
    pub historical_usage_kwh: f64,
}

/// One simulated hour. Created once per step and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlySample {
    pub hour: u32,
    pub occupancy: f64,
    pub temperature_c: f64,
    pub historical_usage_kwh: f64,
    pub optimized_usage_kwh: f64,
}

impl HourlySample {
    pub fn new(hour: u32, conditions: HourlyConditions, optimized_usage_kwh: f64) -> Self {
        Self {
            hour,
            occupancy: conditions.occupancy,
            temperature_c: conditions.temperature_c,
            historical_usage_kwh: conditions.historical_usage_kwh,
            optimized_usage_kwh,
        }
    }

    /// Energy saved this hour in kWh. Negative when the optimizer raised usage.
    pub fn energy_saved_kwh(&self) -> f64 {
        self.historical_usage_kwh - self.optimized_usage_kwh
    }

    /// Cost saved this hour at the given tariff
    pub fn cost_saved(&self, cost_per_kwh: f64) -> f64 {
        self.energy_saved_kwh() * cost_per_kwh
    }
}

// ============================================================================
// Run Result
// ============================================================================

/// Outcome of one full-day run: the hourly samples in hour order plus the
/// accumulated savings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub samples: Vec<HourlySample>,
    pub total_energy_saved_kwh: f64,
    pub total_cost_saved: f64,
}

impl RunResult {
    pub fn with_capacity(hours: usize) -> Self {
        Self {
            samples: Vec::with_capacity(hours),
            ..Default::default()
        }
    }

    /// Append a sample and fold its savings into the running totals
    pub fn record(&mut self, sample: HourlySample, cost_per_kwh: f64) {
        self.total_energy_saved_kwh += sample.energy_saved_kwh();
        self.total_cost_saved += sample.cost_saved(cost_per_kwh);
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn hours(&self) -> Vec<u32> {
        self.samples.iter().map(|s| s.hour).collect()
    }

    pub fn historical_series(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.historical_usage_kwh).collect()
    }

    pub fn optimized_series(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.optimized_usage_kwh).collect()
    }
}
