//! Presentation of a finished run. Both stages only read the [`RunResult`].
//!
//! [`RunResult`]: crate::domain::RunResult

#[cfg(feature = "chart")]
pub mod chart;
pub mod table;

pub use table::{format_report, write_report};
