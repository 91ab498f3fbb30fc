//! Loading a [`TaxConfiguration`] from TOML and applying command-line overrides.
//!
//! Every key is optional; anything not present keeps its default value.
//!
//! ```toml
//! income = 12000
//! income_currency = "EUR"
//! income_interval = "monthly"
//! vacation_weeks_per_year = 4
//!
//! [statutory]
//! health_rate = 0.10
//! ```
use std::path::{Path, PathBuf};

use clap::Args;
use ro_tax_core::{DeductibleExpensesInterval, IncomeInterval, TaxConfiguration};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::utils::parse_decimal;

/// Errors raised while reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read configuration '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Parses TOML text into a configuration.
pub fn parse_config(input: &str) -> Result<TaxConfiguration, toml::de::Error> {
    toml::from_str(input)
}

/// Reads and parses the configuration file at `path`.
pub fn load_config(path: &Path) -> Result<TaxConfiguration, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Command-line values that take precedence over the configuration file.
#[derive(Debug, Clone, Default, Args)]
pub struct ConfigOverrides {
    /// Income amount per interval.
    #[arg(long, value_parser = parse_decimal)]
    pub income: Option<Decimal>,

    /// Currency the income is expressed in (e.g. RON, EUR).
    #[arg(long)]
    pub currency: Option<String>,

    /// Income interval: hourly, daily, monthly or yearly.
    #[arg(long)]
    pub interval: Option<IncomeInterval>,

    #[arg(long, value_parser = parse_decimal)]
    pub hours_per_week: Option<Decimal>,

    #[arg(long, value_parser = parse_decimal)]
    pub days_per_week: Option<Decimal>,

    #[arg(long, value_parser = parse_decimal)]
    pub vacation_weeks: Option<Decimal>,

    /// Deductible expenses per expense interval.
    #[arg(long, value_parser = parse_decimal)]
    pub expenses: Option<Decimal>,

    #[arg(long)]
    pub expenses_currency: Option<String>,

    /// Expense interval: monthly or yearly.
    #[arg(long)]
    pub expenses_interval: Option<DeductibleExpensesInterval>,

    /// Gross monthly minimum wage.
    #[arg(long, value_parser = parse_decimal)]
    pub minimum_wage: Option<Decimal>,
}

impl ConfigOverrides {
    /// Returns `config` with every provided override applied.
    pub fn apply(
        &self,
        config: TaxConfiguration,
    ) -> TaxConfiguration {
        let overrides = self.clone();
        TaxConfiguration {
            income: overrides.income.unwrap_or(config.income),
            income_currency: overrides.currency.unwrap_or(config.income_currency),
            income_interval: overrides.interval.unwrap_or(config.income_interval),
            working_hours_per_week: overrides
                .hours_per_week
                .unwrap_or(config.working_hours_per_week),
            working_days_per_week: overrides
                .days_per_week
                .unwrap_or(config.working_days_per_week),
            vacation_weeks_per_year: overrides
                .vacation_weeks
                .unwrap_or(config.vacation_weeks_per_year),
            deductible_expenses: overrides.expenses.unwrap_or(config.deductible_expenses),
            deductible_expenses_currency: overrides
                .expenses_currency
                .unwrap_or(config.deductible_expenses_currency),
            deductible_expenses_interval: overrides
                .expenses_interval
                .unwrap_or(config.deductible_expenses_interval),
            minimum_wage: overrides.minimum_wage.unwrap_or(config.minimum_wage),
            ..config
        }
    }
}
