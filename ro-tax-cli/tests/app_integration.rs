//! End-to-end runs of the command dispatcher against the on-disk fixtures.

use std::path::{Path, PathBuf};

use ro_tax_cli::app::{self, Command, Request};
use ro_tax_cli::config::{ConfigOverrides, load_config};
use ro_tax_cli::rates_loader;
use ro_tax_cli::report::OutputFormat;
use ro_tax_core::calculations::RegimeEngine;
use ro_tax_core::{IncomeInterval, RegimeVariant};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn request(command: Command) -> Request {
    Request {
        config_path: Some(fixture("config.toml")),
        rates_path: Some(fixture("rates.csv")),
        overrides: ConfigOverrides::default(),
        format: OutputFormat::Json,
        command,
    }
}

// ============================================================================
// Fixture loading
// ============================================================================

#[test]
fn test_fixture_config_loads() {
    let config = load_config(&fixture("config.toml")).expect("fixture config should load");

    assert_eq!(config.income, dec!(2500));
    assert_eq!(config.income_currency, "EUR");
    assert_eq!(config.income_interval, IncomeInterval::Monthly);
    assert_eq!(config.minimum_wage, dec!(3300));
}

#[test]
fn test_fixture_rates_load() {
    let rates =
        rates_loader::load_from_file(&fixture("rates.csv")).expect("fixture rates should load");

    assert_eq!(rates.len(), 2);
    assert_eq!(rates.rate("eur"), Some(dec!(5)));
    assert_eq!(rates.rate("USD"), Some(dec!(4.5)));
}

#[test]
fn test_fixture_pfa_breakdown() {
    let config = load_config(&fixture("config.toml")).unwrap();
    let rates = rates_loader::load_from_file(&fixture("rates.csv")).unwrap();

    let result = RegimeEngine::new(Some(&rates))
        .calculate(&config, RegimeVariant::Pfa)
        .ready()
        .expect("EUR is in the rate table");

    assert_eq!(result.gross_income_in_base_currency, dec!(150000));
    assert_eq!(result.pension_tax_amount_in_base_currency, dec!(19800));
    assert_eq!(result.health_tax_amount_in_base_currency, dec!(15000));
    assert_eq!(result.income_tax_amount_in_base_currency, dec!(11520));
    assert_eq!(result.total_tax_amount_in_base_currency, dec!(46320));
    assert_eq!(result.total_net_income_in_base_currency, dec!(103680));
    // Monthly, back in EUR.
    assert_eq!(result.net_income, dec!(1728));
}

// ============================================================================
// Commands
// ============================================================================

#[test]
fn test_calculate_json_reports_regime_and_advisories() {
    let output = app::run(&request(Command::Calculate {
        regime: RegimeVariant::SrlVenit,
    }))
    .expect("calculation should succeed");
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["result"]["regime"], "srl-venit");
    assert_eq!(value["advisories"][0]["kind"], "reduced-revenue-tax-available");
}

#[test]
fn test_compare_returns_every_regime() {
    let output = app::run(&request(Command::Compare)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    let regimes: Vec<_> = value
        .as_array()
        .expect("comparison is a list")
        .iter()
        .map(|report| report["result"]["regime"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(regimes, vec!["pfa", "srl-venit", "srl-profit"]);
}

#[test]
fn test_compare_text_without_rates_waits() {
    let mut request = request(Command::Compare);
    request.rates_path = None;
    request.format = OutputFormat::Text;

    let output = app::run(&request).unwrap();

    assert!(output.contains("Waiting for exchange rates (EUR income"));
}

#[test]
fn test_overrides_win_over_config_file() {
    let mut request = request(Command::Calculate {
        regime: RegimeVariant::Pfa,
    });
    request.overrides.currency = Some("RON".to_string());
    request.overrides.income = Some(dec!(12500));

    let output = app::run(&request).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    // 12500 RON a month is 150000 a year, the same as the EUR fixture.
    let gross: Decimal = value["result"]["gross_income_in_base_currency"]
        .as_str()
        .and_then(|amount| amount.parse().ok())
        .expect("amounts serialize as decimal strings");
    assert_eq!(gross, dec!(150000));
}

#[test]
fn test_chart_csv_from_fixture() {
    let mut request = request(Command::Chart {
        regime: RegimeVariant::Pfa,
        steps: 10,
    });
    request.format = OutputFormat::Text;

    let output = app::run(&request).unwrap();

    assert_eq!(output.lines().count(), 12);
    assert!(output.starts_with("income,"));
}
