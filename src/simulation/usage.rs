//! # Historical Usage Estimation
//!
//! Baseline energy usage for an hour, before any HVAC optimization: a fixed
//! building baseline plus a random peak or off-peak addend.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::PeakHours;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalUsageConfig {
    /// Constant consumption present every hour in kWh
    pub baseline_usage_kwh: f64,
    pub peak_hours: PeakHours,
    /// Inclusive addend range during peak hours in kWh
    pub peak_addend_kwh: (f64, f64),
    /// Inclusive addend range outside peak hours in kWh
    pub off_peak_addend_kwh: (f64, f64),
}

impl Default for HistoricalUsageConfig {
    fn default() -> Self {
        Self {
            baseline_usage_kwh: 100.0,
            peak_hours: PeakHours::default(),
            peak_addend_kwh: (50.0, 100.0),
            off_peak_addend_kwh: (0.0, 30.0),
        }
    }
}

pub struct HistoricalUsageEstimator {
    config: HistoricalUsageConfig,
}

impl HistoricalUsageEstimator {
    pub fn new(config: HistoricalUsageConfig) -> Self {
        Self { config }
    }

    /// Estimate the baseline usage for `hour` in kWh (one draw from `rng`)
    pub fn estimate<R: Rng + ?Sized>(&self, hour: u32, rng: &mut R) -> f64 {
        let (low, high) = if self.config.peak_hours.contains(hour) {
            self.config.peak_addend_kwh
        } else {
            self.config.off_peak_addend_kwh
        };
        self.config.baseline_usage_kwh + rng.gen_range(low..=high)
    }
}

impl Default for HistoricalUsageEstimator {
    fn default() -> Self {
        Self::new(HistoricalUsageConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    #[rstest]
    #[case(8, 150.0, 200.0)]
    #[case(13, 150.0, 200.0)]
    #[case(18, 150.0, 200.0)]
    #[case(0, 100.0, 130.0)]
    #[case(7, 100.0, 130.0)]
    #[case(19, 100.0, 130.0)]
    fn test_usage_range_by_hour(#[case] hour: u32, #[case] low: f64, #[case] high: f64) {
        let estimator = HistoricalUsageEstimator::default();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let usage = estimator.estimate(hour, &mut rng);
            assert!(usage >= low && usage <= high, "hour {hour}: {usage}");
        }
    }

    #[test]
    fn test_baseline_shifts_estimate() {
        let estimator = HistoricalUsageEstimator::new(HistoricalUsageConfig {
            baseline_usage_kwh: 0.0,
            ..Default::default()
        });
        let usage = estimator.estimate(3, &mut StdRng::seed_from_u64(5));
        assert!((0.0..=30.0).contains(&usage));
    }

    proptest! {
        #[test]
        fn usage_is_never_negative(hour in 0u32..24, seed in any::<u64>()) {
            let estimator = HistoricalUsageEstimator::default();
            let usage = estimator.estimate(hour, &mut StdRng::seed_from_u64(seed));
            prop_assert!(usage >= 100.0);
        }
    }
}
