use anyhow::{Context, Result};
use smart_building_energy::{config, report, simulation, telemetry};
use config::Config;
use telemetry::init_tracing;
use tracing::info;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cfg = Config::load().context("loading configuration")?;

    match cfg.simulation.random_seed {
        Some(seed) => info!(seed, "starting seeded simulation"),
        None => info!("starting simulation"),
    }

    let mut runner = simulation::runner_for(&cfg.simulation, cfg.optimizer.clone());
    let result = runner.run_to_report();

    report::write_report(std::io::stdout().lock(), result).context("writing report")?;

    #[cfg(feature = "chart")]
    report::chart::render(&cfg.chart, result).context("rendering chart")?;

    #[cfg(not(feature = "chart"))]
    if cfg.chart.mode != config::ChartMode::Off {
        tracing::warn!("built without the `chart` feature, skipping chart output");
    }

    runner.finish();
    Ok(())
}
