//! # Occupancy Simulation
//!
//! Draws the fraction of the building that is occupied in a given hour.
//! Office hours are busy, the rest of the day is close to empty.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::PeakHours;

/// Occupancy bounds for office hours and for the rest of the day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupancySimulatorConfig {
    pub peak_hours: PeakHours,
    /// Inclusive occupancy range during peak hours
    pub busy_range: (f64, f64),
    /// Inclusive occupancy range outside peak hours
    pub quiet_range: (f64, f64),
}

impl Default for OccupancySimulatorConfig {
    fn default() -> Self {
        Self {
            peak_hours: PeakHours::default(),
            busy_range: (0.4, 1.0),
            quiet_range: (0.0, 0.2),
        }
    }
}

pub struct OccupancySimulator {
    config: OccupancySimulatorConfig,
}

impl OccupancySimulator {
    pub fn new(config: OccupancySimulatorConfig) -> Self {
        Self { config }
    }

    /// Simulate occupancy for `hour`, consuming exactly one draw from `rng`
    pub fn simulate<R: Rng + ?Sized>(&self, hour: u32, rng: &mut R) -> f64 {
        let (low, high) = if self.config.peak_hours.contains(hour) {
            self.config.busy_range
        } else {
            self.config.quiet_range
        };
        rng.gen_range(low..=high)
    }
}

impl Default for OccupancySimulator {
    fn default() -> Self {
        Self::new(OccupancySimulatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};
    use rstest::rstest;

    #[rstest]
    #[case(8)]
    #[case(12)]
    #[case(18)]
    fn test_office_hours_are_busy(#[case] hour: u32) {
        let sim = OccupancySimulator::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let occupancy = sim.simulate(hour, &mut rng);
            assert!((0.4..=1.0).contains(&occupancy), "hour {hour}: {occupancy}");
        }
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(19)]
    #[case(23)]
    fn test_off_hours_are_quiet(#[case] hour: u32) {
        let sim = OccupancySimulator::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let occupancy = sim.simulate(hour, &mut rng);
            assert!((0.0..=0.2).contains(&occupancy), "hour {hour}: {occupancy}");
        }
    }

    #[test]
    fn test_custom_peak_window() {
        let sim = OccupancySimulator::new(OccupancySimulatorConfig {
            peak_hours: PeakHours::new(20, 22),
            ..Default::default()
        });
        let mut rng = StdRng::seed_from_u64(7);

        assert!(sim.simulate(21, &mut rng) >= 0.4);
        assert!(sim.simulate(12, &mut rng) <= 0.2);
    }

    proptest! {
        #[test]
        fn occupancy_stays_in_band(hour in 0u32..24, seed in any::<u64>()) {
            let sim = OccupancySimulator::default();
            let mut rng = StdRng::seed_from_u64(seed);
            let occupancy = sim.simulate(hour, &mut rng);

            if (8..=18).contains(&hour) {
                prop_assert!((0.4..=1.0).contains(&occupancy));
            } else {
                prop_assert!((0.0..=0.2).contains(&occupancy));
            }
        }
    }
}
