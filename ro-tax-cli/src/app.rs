//! Command dispatch: resolves the configuration and exchange rates, runs the
//! requested calculation and renders its output.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;
use ro_tax_core::calculations::{ChartSampler, RegimeEngine, advisories};
use ro_tax_core::constants::CHART_STEPS;
use ro_tax_core::{Calculation, ExchangeRates, RegimeVariant, TaxConfiguration};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::config::{ConfigOverrides, load_config};
use crate::rates_loader;
use crate::report::{self, OutputFormat, RegimeReport};

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Estimate taxes under one regime.
    Calculate {
        /// pfa, srl-venit or srl-profit.
        #[arg(long, default_value = "pfa")]
        regime: RegimeVariant,
    },

    /// Estimate taxes under every regime side by side.
    Compare,

    /// Sample tax percentages from zero to twice the configured income.
    Chart {
        #[arg(long, default_value = "pfa")]
        regime: RegimeVariant,

        /// Number of increments between the samples.
        #[arg(long, default_value_t = CHART_STEPS)]
        steps: u32,
    },
}

/// Everything needed to run one command.
#[derive(Debug, Clone)]
pub struct Request {
    pub config_path: Option<PathBuf>,
    pub rates_path: Option<PathBuf>,
    pub overrides: ConfigOverrides,
    pub format: OutputFormat,
    pub command: Command,
}

/// Runs `request` and returns the text to print on stdout.
pub fn run(request: &Request) -> Result<String> {
    let config = resolve_config(request)?;
    let rates = resolve_rates(request)?;
    debug!(
        income = %config.income,
        currency = %config.income_currency,
        interval = %config.income_interval,
        "Configuration resolved"
    );

    match request.command {
        Command::Calculate { regime } => calculate(&config, &rates, regime, request.format),
        Command::Compare => compare(&config, &rates, request.format),
        Command::Chart { regime, steps } => chart(&config, &rates, regime, steps, request.format),
    }
}

fn resolve_config(request: &Request) -> Result<TaxConfiguration> {
    let config = match &request.config_path {
        Some(path) => {
            info!(path = %path.display(), "Loading configuration");
            load_config(path)?
        }
        None => TaxConfiguration::default(),
    };
    Ok(request.overrides.apply(config))
}

/// Without a rates file only the base currency resolves.
fn resolve_rates(request: &Request) -> Result<ExchangeRates> {
    match &request.rates_path {
        Some(path) => {
            info!(path = %path.display(), "Loading exchange rates");
            rates_loader::load_from_file(path)
                .with_context(|| format!("failed to load exchange rates from '{}'", path.display()))
        }
        None => Ok(ExchangeRates::new()),
    }
}

fn regime_report(
    engine: &RegimeEngine<'_>,
    config: &TaxConfiguration,
    regime: RegimeVariant,
) -> Calculation<RegimeReport> {
    engine.calculate(config, regime).map(|result| RegimeReport {
        advisories: advisories(config, &result),
        result,
    })
}

fn calculate(
    config: &TaxConfiguration,
    rates: &ExchangeRates,
    regime: RegimeVariant,
    format: OutputFormat,
) -> Result<String> {
    let engine = RegimeEngine::new(Some(rates));
    let Calculation::Ready(report) = regime_report(&engine, config, regime) else {
        return Ok(report::pending_notice(config));
    };

    match format {
        OutputFormat::Text => Ok(report::render_text(config, &report)?),
        OutputFormat::Json => Ok(report::render_json(&report)?),
    }
}

fn compare(
    config: &TaxConfiguration,
    rates: &ExchangeRates,
    format: OutputFormat,
) -> Result<String> {
    let engine = RegimeEngine::new(Some(rates));
    let reports: Option<Vec<RegimeReport>> = RegimeVariant::ALL
        .into_iter()
        .map(|regime| regime_report(&engine, config, regime).ready())
        .collect();
    let Some(reports) = reports else {
        return Ok(report::pending_notice(config));
    };

    match format {
        OutputFormat::Text => Ok(report::render_comparison(config, &reports)?),
        OutputFormat::Json => Ok(report::render_json(&reports)?),
    }
}

fn chart(
    config: &TaxConfiguration,
    rates: &ExchangeRates,
    regime: RegimeVariant,
    steps: u32,
    format: OutputFormat,
) -> Result<String> {
    if config.income <= Decimal::ZERO {
        return Ok("Nothing to chart: income must be positive.\n".to_string());
    }
    let Some(chart) = ChartSampler::new(steps).sample(config, regime, Some(rates)) else {
        return Ok(report::pending_notice(config));
    };

    match format {
        OutputFormat::Text => report::render_chart_csv(&chart),
        OutputFormat::Json => Ok(report::render_json(&chart)?),
    }
}
