//! End-to-end runs of the simulation through the public API.

use rand::{rngs::StdRng, SeedableRng};
use rstest::rstest;
use smart_building_energy::config::{Config, SimulationConfig};
use smart_building_energy::domain::HOURS_PER_DAY;
use smart_building_energy::report::{format_report, table::HEADER};
use smart_building_energy::simulation::{simulate, EfficiencyRules, SimulationRunner};

fn seeded(seed: u64) -> SimulationConfig {
    SimulationConfig {
        random_seed: Some(seed),
        ..Default::default()
    }
}

#[rstest]
#[case(0)]
#[case(42)]
#[case(2024)]
fn full_day_invariants(#[case] seed: u64) {
    let result = simulate(&seeded(seed), EfficiencyRules::default());

    assert_eq!(result.len(), HOURS_PER_DAY as usize);
    assert_eq!(result.hours(), (0..HOURS_PER_DAY).collect::<Vec<_>>());

    let expected_energy: f64 = result
        .samples
        .iter()
        .map(|s| s.historical_usage_kwh - s.optimized_usage_kwh)
        .sum();
    assert!((result.total_energy_saved_kwh - expected_energy).abs() < 1e-9);
    assert!((result.total_cost_saved - result.total_energy_saved_kwh * 0.2).abs() < 1e-9);

    for sample in &result.samples {
        assert!((0.0..=1.0).contains(&sample.occupancy));
        assert!((24.0..=35.0).contains(&sample.temperature_c));
        assert!(sample.historical_usage_kwh >= 100.0);
        assert!(sample.optimized_usage_kwh >= 0.0);
    }
}

#[test]
fn report_has_header_rows_and_totals() {
    let result = simulate(&seeded(5), EfficiencyRules::default());
    let report = format_report(&result);
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines.len(), 1 + 24 + 3);
    assert_eq!(lines[0], HEADER);
    assert!(lines[1].starts_with("   0 | "));
    assert!(lines[24].starts_with("  23 | "));
    assert_eq!(lines[25], "");
    assert_eq!(
        lines[26],
        format!("Total Energy Saved: {:.2} kWh", result.total_energy_saved_kwh)
    );
    assert_eq!(
        lines[27],
        format!("Total Cost Saved: ${:.2}", result.total_cost_saved)
    );
}

#[test]
fn custom_tariff_scales_cost() {
    let config = SimulationConfig {
        cost_per_kwh: 0.5,
        ..seeded(8)
    };
    let result = simulate(&config, EfficiencyRules::default());
    assert!((result.total_cost_saved - result.total_energy_saved_kwh * 0.5).abs() < 1e-9);
}

#[test]
fn neutral_rules_save_nothing() {
    let rules = EfficiencyRules {
        vacancy_factor: 1.0,
        mild_factor: 1.0,
        hot_factor: 1.0,
        ..Default::default()
    };
    let result = SimulationRunner::new(&SimulationConfig::default(), rules, StdRng::seed_from_u64(3))
        .finish();

    assert_eq!(result.total_energy_saved_kwh, 0.0);
    assert_eq!(result.historical_series(), result.optimized_series());
}

#[test]
fn default_config_is_valid() {
    assert!(Config::default().check().is_ok());
}
