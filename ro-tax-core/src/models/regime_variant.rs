use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a regime name is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown regime '{0}' (expected pfa, srl-venit or srl-profit)")]
pub struct ParseRegimeError(pub String);

/// Business structure a calculation is run for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegimeVariant {
    /// Sole proprietor taxed on net income.
    Pfa,
    /// Limited company taxed on revenue.
    SrlVenit,
    /// Limited company taxed on profit.
    SrlProfit,
}

impl RegimeVariant {
    pub const ALL: [RegimeVariant; 3] = [Self::Pfa, Self::SrlVenit, Self::SrlProfit];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pfa => "pfa",
            Self::SrlVenit => "srl-venit",
            Self::SrlProfit => "srl-profit",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pfa" => Some(Self::Pfa),
            "srl-venit" => Some(Self::SrlVenit),
            "srl-profit" => Some(Self::SrlProfit),
            _ => None,
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pfa => "PFA",
            Self::SrlVenit => "SRL (revenue tax)",
            Self::SrlProfit => "SRL (profit tax)",
        }
    }

    /// Whether income is taxed in the hands of an individual rather than a company.
    pub fn is_individual(&self) -> bool {
        matches!(self, Self::Pfa)
    }
}

impl FromStr for RegimeVariant {
    type Err = ParseRegimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseRegimeError(s.to_string()))
    }
}

impl fmt::Display for RegimeVariant {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
