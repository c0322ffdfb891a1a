//! # Building Simulation Module
//!
//! Simulates the conditions of a building for each hour of a day and the
//! HVAC adjustment applied to them.
//!
//! ## Components
//!
//! - **Occupancy**: random occupancy fraction, busy during office hours
//! - **Weather**: random ambient temperature forecast, same distribution all day
//! - **Usage**: random historical (baseline) energy usage per hour
//! - **HVAC**: rule-based efficiency factor applied to the historical usage
//! - **Runner**: steps through the day and accumulates the savings
//!
//! Every random component takes its random source as an argument, so a seeded
//! `StdRng` reproduces a run exactly.

pub mod hvac;
pub mod occupancy;
pub mod runner;
pub mod usage;
pub mod weather;

pub use hvac::{EfficiencyRules, HvacOptimizer};
pub use occupancy::{OccupancySimulator, OccupancySimulatorConfig};
pub use runner::{runner_for, simulate, RunPhase, SimulationRunner};
pub use usage::{HistoricalUsageConfig, HistoricalUsageEstimator};
pub use weather::{WeatherForecaster, WeatherForecasterConfig};
