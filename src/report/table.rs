use std::io;

use crate::domain::{HourlySample, RunResult};

pub const HEADER: &str = "Hour | Occupancy | Temp (°C) | Historical (kWh) | Optimized (kWh)";

pub fn format_row(sample: &HourlySample) -> String {
    format!(
        "{:>4} | {:.2}      | {:.1}       | {:.1}            | {:.1}",
        sample.hour,
        sample.occupancy,
        sample.temperature_c,
        sample.historical_usage_kwh,
        sample.optimized_usage_kwh
    )
}

/// Blank separator line followed by the two savings totals
pub fn format_summary(result: &RunResult) -> String {
    format!(
        "\nTotal Energy Saved: {:.2} kWh\nTotal Cost Saved: ${:.2}",
        result.total_energy_saved_kwh, result.total_cost_saved
    )
}

/// Full text report: header, one row per hour, then the totals
pub fn format_report(result: &RunResult) -> String {
    let mut lines = Vec::with_capacity(result.len() + 2);
    lines.push(HEADER.to_string());
    lines.extend(result.samples.iter().map(format_row));
    lines.push(format_summary(result));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

pub fn write_report<W: io::Write>(mut writer: W, result: &RunResult) -> io::Result<()> {
    writer.write_all(format_report(result).as_bytes())?;
    writer.flush()
}
