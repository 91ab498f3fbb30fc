//! CSV loader for resolved exchange rates.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Whitespace
//! around headers and values is trimmed.
//!
//! | Column     | Required | Type    | Notes |
//! |------------|----------|---------|-------|
//! | `currency` | yes      | string  | ISO code, case-insensitive (e.g. `EUR`) |
//! | `rate`     | yes      | decimal | RON per one unit of `currency`, must be > 0 |
//!
//! ### Example
//!
//! ```csv
//! currency,rate
//! EUR,4.9763
//! USD,4.6012
//! ```
use std::path::Path;

use ro_tax_core::ExchangeRates;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CsvRow {
    currency: String,
    rate: Decimal,
}

/// Errors that can occur while loading an exchange-rate table.
#[derive(Debug, thiserror::Error)]
pub enum RatesLoadError {
    /// The file could not be read.
    #[error("cannot read rates file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The CSV is structurally invalid or a value has the wrong type.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A rate is zero or negative. `row` is 1-based (header = row 0).
    #[error("rate {rate} for '{currency}' on row {row} must be positive")]
    InvalidRate {
        currency: String,
        rate: Decimal,
        row: usize,
    },

    /// The same currency appears twice.
    #[error("duplicate currency '{currency}' on row {row}")]
    DuplicateCurrency { currency: String, row: usize },
}

/// Parses CSV text into an [`ExchangeRates`] table.
///
/// # Errors
///
/// * [`RatesLoadError::Parse`] if the CSV is invalid or a column is missing.
/// * [`RatesLoadError::InvalidRate`] if a rate is not positive.
/// * [`RatesLoadError::DuplicateCurrency`] if a currency is listed twice.
pub fn load_from_str(input: &str) -> Result<ExchangeRates, RatesLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let mut rates = ExchangeRates::new();
    for (idx, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = result?;
        let row_number = idx + 1;

        if row.rate <= Decimal::ZERO {
            return Err(RatesLoadError::InvalidRate {
                currency: row.currency,
                rate: row.rate,
                row: row_number,
            });
        }
        if rates.insert(&row.currency, row.rate).is_some() {
            return Err(RatesLoadError::DuplicateCurrency {
                currency: row.currency,
                row: row_number,
            });
        }
    }

    tracing::debug!(currencies = rates.len(), "Exchange rates parsed");
    Ok(rates)
}

/// Reads a file from disk and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<ExchangeRates, RatesLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| RatesLoadError::Read {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const RATES_CSV: &str = "\
currency,rate
EUR,4.9763
USD,4.6012
";

    // -----------------------------------------------------------------------
    // Valid input
    // -----------------------------------------------------------------------
    #[test]
    fn test_parses_every_row() {
        let rates = load_from_str(RATES_CSV).expect("should parse rates");

        assert_eq!(rates.len(), 2);
        assert_eq!(rates.rate("EUR"), Some(dec!(4.9763)));
        assert_eq!(rates.rate("USD"), Some(dec!(4.6012)));
    }

    #[test]
    fn test_base_currency_always_resolves() {
        let rates = load_from_str(RATES_CSV).unwrap();

        assert_eq!(rates.rate("RON"), Some(Decimal::ONE));
    }

    #[test]
    fn test_column_order_and_whitespace_do_not_matter() {
        let csv = "\
 rate , currency
 4.97 , eur
";
        let rates = load_from_str(csv).expect("should tolerate reordering");

        assert_eq!(rates.rate("EUR"), Some(dec!(4.97)));
    }

    #[test]
    fn test_header_only_is_empty_table() {
        let rates = load_from_str("currency,rate\n").expect("header-only CSV is valid");

        assert!(rates.is_empty());
    }

    // -----------------------------------------------------------------------
    // Errors
    // -----------------------------------------------------------------------
    #[test]
    fn test_missing_column_returns_parse_error() {
        let result = load_from_str("currency\nEUR\n");

        match result.unwrap_err() {
            RatesLoadError::Parse(_) => { /* expected */ }
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_rate_returns_parse_error() {
        let result = load_from_str("currency,rate\nEUR,abc\n");

        assert!(matches!(result, Err(RatesLoadError::Parse(_))));
    }

    #[test]
    fn test_zero_rate_is_rejected_with_row() {
        let csv = "\
currency,rate
EUR,4.97
USD,0
";
        match load_from_str(csv).unwrap_err() {
            RatesLoadError::InvalidRate { currency, rate, row } => {
                assert_eq!(currency, "USD");
                assert_eq!(rate, dec!(0));
                assert_eq!(row, 2);
            }
            other => panic!("expected InvalidRate, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_currency_is_rejected() {
        let csv = "\
currency,rate
EUR,4.97
eur,4.98
";
        match load_from_str(csv).unwrap_err() {
            RatesLoadError::DuplicateCurrency { currency, row } => {
                assert_eq!(currency, "eur");
                assert_eq!(row, 2);
            }
            other => panic!("expected DuplicateCurrency, got {:?}", other),
        }
    }
}
