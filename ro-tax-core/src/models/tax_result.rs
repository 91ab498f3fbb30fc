use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::RegimeVariant;

/// Breakdown of the yearly tax burden for one regime.
///
/// Amounts suffixed `_in_base_currency` are annual and in the base currency.
/// Percentages are relative to the gross income before any deduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    pub regime: RegimeVariant,

    pub gross_income_in_base_currency: Decimal,
    pub gross_income_over_vat_threshold: bool,

    pub total_net_income_in_base_currency: Decimal,
    /// Net income in the currency and interval the income was entered in.
    pub net_income: Decimal,

    pub total_tax_amount_in_base_currency: Decimal,
    pub total_tax_percentage: Decimal,

    pub pension_tax_amount_in_base_currency: Decimal,
    pub pension_tax_percentage: Decimal,

    pub health_tax_amount_in_base_currency: Decimal,
    pub health_tax_percentage: Decimal,

    /// For companies this also holds the company-level levies.
    pub income_tax_amount_in_base_currency: Decimal,
    pub income_tax_percentage: Decimal,

    /// Revenue or profit tax plus dividend tax. Zero for PFA.
    pub company_taxes_in_base_currency: Decimal,
    /// Net minimum-wage salary paid to the owner. Zero for PFA.
    pub owner_salary_in_base_currency: Decimal,
}

/// Outcome of a calculation that may depend on exchange rates not yet known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Calculation<T> {
    Ready(T),
    /// A non-base currency was requested before its rate was available.
    Pending,
}

impl<T> Calculation<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn ready(self) -> Option<T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Pending => None,
        }
    }

    pub fn as_ref(&self) -> Calculation<&T> {
        match self {
            Self::Ready(value) => Calculation::Ready(value),
            Self::Pending => Calculation::Pending,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(
        self,
        f: F,
    ) -> Calculation<U> {
        match self {
            Self::Ready(value) => Calculation::Ready(f(value)),
            Self::Pending => Calculation::Pending,
        }
    }
}

/// One sample of a chart sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    /// Raw income in the configured currency and interval.
    pub income: Decimal,
    pub pension_tax_percentage: Decimal,
    pub health_tax_percentage: Decimal,
    pub income_tax_percentage: Decimal,
    pub net_income: Decimal,
}

/// A chart sweep plus the full result at the configured income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxChart {
    pub data: Vec<ChartDataPoint>,
    pub result: TaxResult,
}
