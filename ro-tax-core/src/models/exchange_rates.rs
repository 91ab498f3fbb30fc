use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::BASE_CURRENCY;

/// Resolved conversion factors into the base currency.
///
/// Each factor is the base-currency value of one unit of the keyed currency.
/// Currency codes are compared case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRates {
    rates: BTreeMap<String, Decimal>,
}

impl ExchangeRates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the factor for `currency`, returning the previous one.
    pub fn insert(
        &mut self,
        currency: &str,
        rate: Decimal,
    ) -> Option<Decimal> {
        self.rates.insert(normalize_code(currency), rate)
    }

    /// Factor for `currency`. The base currency is always 1.
    pub fn rate(
        &self,
        currency: &str,
    ) -> Option<Decimal> {
        if is_base_currency(currency) {
            return Some(Decimal::ONE);
        }
        self.rates.get(&normalize_code(currency)).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.rates.iter().map(|(code, rate)| (code.as_str(), *rate))
    }
}

impl<S: AsRef<str>> FromIterator<(S, Decimal)> for ExchangeRates {
    fn from_iter<I: IntoIterator<Item = (S, Decimal)>>(iter: I) -> Self {
        let mut rates = Self::new();
        for (code, rate) in iter {
            rates.insert(code.as_ref(), rate);
        }
        rates
    }
}

/// Whether `currency` names the base currency.
pub fn is_base_currency(currency: &str) -> bool {
    currency.trim().eq_ignore_ascii_case(BASE_CURRENCY)
}

fn normalize_code(currency: &str) -> String {
    currency.trim().to_ascii_uppercase()
}
