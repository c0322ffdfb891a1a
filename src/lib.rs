//! # Smart Building Energy
//!
//! Simulates one day of building energy usage and applies a rule-based HVAC
//! adjustment to each hour, reporting the energy and cost saved.
//!
//! The crate is split into a pure computation stage ([`simulation`]) that
//! produces a [`domain::RunResult`], and presentation stages ([`report`]) that
//! only consume that result.

pub mod config;
pub mod domain;
pub mod error;
pub mod report;
pub mod simulation;
pub mod telemetry;

pub use error::SimError;
