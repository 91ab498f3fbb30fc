use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when an interval name is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown interval '{0}'")]
pub struct ParseIntervalError(pub String);

/// Billing interval of an income figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeInterval {
    Hourly,
    Daily,
    #[default]
    Monthly,
    Yearly,
}

impl IncomeInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hourly" => Some(Self::Hourly),
            "daily" => Some(Self::Daily),
            "monthly" => Some(Self::Monthly),
            "yearly" => Some(Self::Yearly),
            _ => None,
        }
    }
}

impl FromStr for IncomeInterval {
    type Err = ParseIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseIntervalError(s.to_string()))
    }
}

impl fmt::Display for IncomeInterval {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Billing interval of deductible expenses.
///
/// Expenses are not adjusted for vacation time, so only calendar intervals
/// are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeductibleExpensesInterval {
    #[default]
    Monthly,
    Yearly,
}

impl DeductibleExpensesInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Some(Self::Monthly),
            "yearly" => Some(Self::Yearly),
            _ => None,
        }
    }
}

impl FromStr for DeductibleExpensesInterval {
    type Err = ParseIntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseIntervalError(s.to_string()))
    }
}

impl fmt::Display for DeductibleExpensesInterval {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn income_interval_round_trips_through_as_str() {
        for interval in [
            IncomeInterval::Hourly,
            IncomeInterval::Daily,
            IncomeInterval::Monthly,
            IncomeInterval::Yearly,
        ] {
            assert_eq!(IncomeInterval::parse(interval.as_str()), Some(interval));
        }
    }

    #[test]
    fn income_interval_parse_ignores_case_and_whitespace() {
        assert_eq!(IncomeInterval::parse(" Hourly "), Some(IncomeInterval::Hourly));
    }

    #[test]
    fn income_interval_from_str_rejects_unknown() {
        let err = "weekly".parse::<IncomeInterval>().unwrap_err();

        assert_eq!(err, ParseIntervalError("weekly".to_string()));
    }

    #[test]
    fn deductible_interval_has_no_hourly_variant() {
        assert_eq!(DeductibleExpensesInterval::parse("hourly"), None);
        assert_eq!(
            DeductibleExpensesInterval::parse("yearly"),
            Some(DeductibleExpensesInterval::Yearly)
        );
    }
}
