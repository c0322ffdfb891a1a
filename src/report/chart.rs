use rerun as rr;
use tracing::info;

use crate::config::{ChartConfig, ChartMode};
use crate::domain::{HourlySample, RunResult};
use crate::error::SimResult;

pub const CHART_TITLE: &str = "Energy Consumption Comparison";
pub const X_AXIS_LABEL: &str = "Hour of the Day";
pub const Y_AXIS_LABEL: &str = "Energy (kWh)";
pub const HISTORICAL_SERIES: &str = "Historical Usage (kWh)";
pub const OPTIMIZED_SERIES: &str = "Optimized Usage (kWh)";

const APP_ID: &str = "smart_building_energy";
pub const TIMELINE: &str = "hour_of_the_day";
// Top-level paths so the viewer builds a single time series view for both series.
pub const HISTORICAL_PATH: &str = "energy/historical_usage";
pub const OPTIMIZED_PATH: &str = "energy/optimized_usage";
const CAPTION_PATH: &str = "caption";

/// One plotted series: its static style plus one `(hour, kWh)` point per hour
#[derive(Debug, Clone, PartialEq)]
pub struct UsageSeries {
    pub path: &'static str,
    pub name: &'static str,
    pub rgb: [u8; 3],
    pub marker: rr::components::MarkerShape,
    pub points: Vec<(i64, f64)>,
}

/// Everything the comparison chart shows, independent of any recording stream
#[derive(Debug, Clone, PartialEq)]
pub struct UsageChart {
    /// Markdown caption carrying the title and axis labels
    pub caption: String,
    pub timeline: &'static str,
    pub series: [UsageSeries; 2],
}

fn usage_series(
    result: &RunResult,
    path: &'static str,
    name: &'static str,
    rgb: [u8; 3],
    value: fn(&HourlySample) -> f64,
) -> UsageSeries {
    UsageSeries {
        path,
        name,
        rgb,
        marker: rr::components::MarkerShape::Circle,
        points: result
            .samples
            .iter()
            .map(|s| (s.hour as i64, value(s)))
            .collect(),
    }
}

impl UsageChart {
    pub fn from_result(result: &RunResult) -> Self {
        Self {
            caption: format!(
                "# {CHART_TITLE}\n\n* x: {X_AXIS_LABEL} (`{TIMELINE}` timeline)\n* y: {Y_AXIS_LABEL}\n"
            ),
            timeline: TIMELINE,
            series: [
                usage_series(result, HISTORICAL_PATH, HISTORICAL_SERIES, [31, 119, 180], |s| {
                    s.historical_usage_kwh
                }),
                usage_series(result, OPTIMIZED_PATH, OPTIMIZED_SERIES, [255, 127, 14], |s| {
                    s.optimized_usage_kwh
                }),
            ],
        }
    }
}

/// Open a recording stream for the configured output, or `None` when charts are off.
///
/// `Spawn` starts (or connects to) a viewer and fails when none can be launched.
pub fn start_session(config: &ChartConfig) -> SimResult<Option<rr::RecordingStream>> {
    let builder = rr::RecordingStreamBuilder::new(APP_ID);
    let session = match config.mode {
        ChartMode::Spawn => Some(builder.spawn()?),
        ChartMode::Save => Some(builder.save(&config.path)?),
        ChartMode::Off => None,
    };
    Ok(session)
}

fn series_style(session: &rr::RecordingStream, series: &UsageSeries) -> SimResult<()> {
    session.log_static(
        series.path,
        &rr::SeriesLines::new()
            .with_colors([series.rgb])
            .with_names([series.name])
            .with_widths([1.5]),
    )?;
    session.log_static(
        series.path,
        &rr::SeriesPoints::new()
            .with_colors([series.rgb])
            .with_names([series.name])
            .with_markers([series.marker])
            .with_marker_sizes([4.0]),
    )?;
    Ok(())
}

/// Logs a prepared chart: caption, series styles, then every point on the chart's timeline.
pub fn log_chart(session: &rr::RecordingStream, chart: &UsageChart) -> SimResult<()> {
    session.log_static(
        CAPTION_PATH,
        &rr::TextDocument::from_markdown(chart.caption.clone()),
    )?;

    for series in &chart.series {
        series_style(session, series)?;
    }

    for series in &chart.series {
        for &(hour, kwh) in &series.points {
            session.set_time_sequence(chart.timeline, hour);
            session.log(series.path, &rr::Scalars::single(kwh))?;
        }
    }

    Ok(())
}

/// Draws historical vs optimized usage as two marked line series over the day.
pub fn draw_usage_comparison(session: &rr::RecordingStream, result: &RunResult) -> SimResult<()> {
    log_chart(session, &UsageChart::from_result(result))
}

/// Render the comparison chart to the configured output
pub fn render(config: &ChartConfig, result: &RunResult) -> SimResult<()> {
    let Some(session) = start_session(config)? else {
        info!("chart output disabled");
        return Ok(());
    };

    draw_usage_comparison(&session, result)?;
    info!(mode = ?config.mode, points = result.len(), "chart rendered");
    Ok(())
}
