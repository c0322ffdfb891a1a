//! # Simulation Runner
//!
//! Drives one simulated day, hour by hour, through the occupancy, weather and
//! usage simulators and the HVAC optimizer, accumulating the savings.
//!
//! ## Usage
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use smart_building_energy::config::SimulationConfig;
//! use smart_building_energy::simulation::{EfficiencyRules, SimulationRunner};
//!
//! let config = SimulationConfig::default();
//! let runner = SimulationRunner::new(&config, EfficiencyRules::default(), StdRng::seed_from_u64(42));
//! let result = runner.finish();
//!
//! assert_eq!(result.len(), 24);
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};
use strum::Display;
use tracing::{debug, info, trace};

use super::{
    EfficiencyRules, HistoricalUsageConfig, HistoricalUsageEstimator, HvacOptimizer,
    OccupancySimulator, OccupancySimulatorConfig, WeatherForecaster,
};
use crate::config::SimulationConfig;
use crate::domain::{HourlyConditions, HourlySample, RunResult, HOURS_PER_DAY};

/// Lifecycle of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RunPhase {
    NotStarted,
    /// The given hour has been simulated
    Running(u32),
    /// All hours simulated; the result is being presented
    Reporting,
    Done,
}

pub struct SimulationRunner<R: Rng> {
    occupancy: OccupancySimulator,
    weather: WeatherForecaster,
    usage: HistoricalUsageEstimator,
    optimizer: HvacOptimizer,
    cost_per_kwh: f64,
    rng: R,
    phase: RunPhase,
    result: RunResult,
}

impl<R: Rng> SimulationRunner<R> {
    pub fn new(config: &SimulationConfig, rules: EfficiencyRules, rng: R) -> Self {
        let peak_hours = config.peak_hours;

        Self {
            occupancy: OccupancySimulator::new(OccupancySimulatorConfig {
                peak_hours,
                ..Default::default()
            }),
            weather: WeatherForecaster::default(),
            usage: HistoricalUsageEstimator::new(HistoricalUsageConfig {
                baseline_usage_kwh: config.baseline_usage_kwh,
                peak_hours,
                ..Default::default()
            }),
            optimizer: HvacOptimizer::new(rules),
            cost_per_kwh: config.cost_per_kwh,
            rng,
            phase: RunPhase::NotStarted,
            result: RunResult::with_capacity(HOURS_PER_DAY as usize),
        }
    }

    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Samples recorded so far
    pub fn samples(&self) -> &[HourlySample] {
        &self.result.samples
    }

    /// Simulate the next hour.
    ///
    /// Returns `None` once every hour of the day has been simulated; the runner
    /// is then in [`RunPhase::Reporting`].
    pub fn step(&mut self) -> Option<HourlySample> {
        let hour = match self.phase {
            RunPhase::NotStarted => 0,
            RunPhase::Running(last) if last + 1 < HOURS_PER_DAY => last + 1,
            RunPhase::Running(_) => {
                self.transition(RunPhase::Reporting);
                info!(
                    hours = self.result.len(),
                    total_energy_saved_kwh = self.result.total_energy_saved_kwh,
                    total_cost_saved = self.result.total_cost_saved,
                    "simulation complete"
                );
                return None;
            }
            RunPhase::Reporting | RunPhase::Done => return None,
        };

        self.transition(RunPhase::Running(hour));

        // Draw order matters for seeded reproducibility: occupancy, weather, usage.
        let conditions = HourlyConditions {
            occupancy: self.occupancy.simulate(hour, &mut self.rng),
            temperature_c: self.weather.forecast(&mut self.rng),
            historical_usage_kwh: self.usage.estimate(hour, &mut self.rng),
        };
        let optimized = self.optimizer.optimize(&conditions);
        let sample = HourlySample::new(hour, conditions, optimized);

        trace!(
            hour,
            occupancy = sample.occupancy,
            temperature_c = sample.temperature_c,
            historical_kwh = sample.historical_usage_kwh,
            optimized_kwh = sample.optimized_usage_kwh,
            "hour simulated"
        );

        self.result.record(sample, self.cost_per_kwh);
        Some(sample)
    }

    /// Result accumulated so far
    pub fn result(&self) -> &RunResult {
        &self.result
    }

    /// Run any remaining hours and lend out the result for presentation.
    ///
    /// The runner stays in [`RunPhase::Reporting`] until [`finish`](Self::finish).
    pub fn run_to_report(&mut self) -> &RunResult {
        while self.step().is_some() {}
        &self.result
    }

    /// Close the run and hand over the result
    pub fn finish(mut self) -> RunResult {
        self.run_to_report();
        self.transition(RunPhase::Done);
        self.result
    }

    fn transition(&mut self, next: RunPhase) {
        if std::mem::discriminant(&self.phase) != std::mem::discriminant(&next) {
            debug!(from = %self.phase, to = %next, "run phase changed");
        }
        self.phase = next;
    }
}

/// Runner seeded from the configured seed, or from entropy when none is set
pub fn runner_for(config: &SimulationConfig, rules: EfficiencyRules) -> SimulationRunner<StdRng> {
    let rng = match config.random_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    SimulationRunner::new(config, rules, rng)
}

/// Run one full day without presenting it
pub fn simulate(config: &SimulationConfig, rules: EfficiencyRules) -> RunResult {
    runner_for(config, rules).finish()
}
