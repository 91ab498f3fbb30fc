use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::{
    BASE_CURRENCY, HEALTH_PERCENTAGE, INCOME_TAX_PERCENTAGE, PENSION_PERCENTAGE,
    PERSONAL_DEDUCTIBLE, WAGE_COMPANY_TAX_PERCENTAGE,
};
use crate::models::{DeductibleExpensesInterval, IncomeInterval};

/// Contribution and income tax rates fixed by law rather than chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatutoryRates {
    /// Pension contribution (CAS).
    pub pension_rate: Decimal,
    /// Health contribution (CASS).
    pub health_rate: Decimal,
    pub income_tax_rate: Decimal,
    /// Personal deduction applied to a salary before income tax.
    pub personal_deductible_rate: Decimal,
    /// Employer contribution (CAM) paid on top of a salary.
    pub wage_company_tax_rate: Decimal,
}

impl Default for StatutoryRates {
    fn default() -> Self {
        Self {
            pension_rate: PENSION_PERCENTAGE,
            health_rate: HEALTH_PERCENTAGE,
            income_tax_rate: INCOME_TAX_PERCENTAGE,
            personal_deductible_rate: PERSONAL_DEDUCTIBLE,
            wage_company_tax_rate: WAGE_COMPANY_TAX_PERCENTAGE,
        }
    }
}

/// Working time used to annualize hourly, daily and monthly figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkSchedule {
    pub hours_per_week: Decimal,
    pub days_per_week: Decimal,
    pub vacation_weeks_per_year: Decimal,
}

/// Every user-tunable input of a calculation.
///
/// A configuration is an immutable snapshot: the engine only ever borrows it.
/// Missing keys deserialize to the [`Default`] values, which reproduce the
/// 2024 parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxConfiguration {
    pub income: Decimal,
    pub income_currency: String,
    pub income_interval: IncomeInterval,
    pub working_hours_per_week: Decimal,
    pub working_days_per_week: Decimal,
    pub vacation_weeks_per_year: Decimal,

    pub deductible_expenses: Decimal,
    pub deductible_expenses_currency: String,
    pub deductible_expenses_interval: DeductibleExpensesInterval,

    // Values are in RON for 2024
    pub minimum_wage: Decimal,
    pub minimum_wage_tax_free_deductible: Decimal,
    pub vat_threshold: Decimal,

    pub dividends_tax: Decimal,
    pub company_income_tax: Decimal,
    pub company_high_income_tax: Decimal,
    pub company_profit_tax: Decimal,
    pub company_income_tax_threshold: Decimal,
    pub company_income_tax_to_profit_threshold: Decimal,

    pub statutory: StatutoryRates,
}

impl Default for TaxConfiguration {
    fn default() -> Self {
        Self {
            income: dec!(12000),
            income_currency: BASE_CURRENCY.to_string(),
            income_interval: IncomeInterval::Monthly,
            working_hours_per_week: dec!(40),
            working_days_per_week: dec!(5),
            vacation_weeks_per_year: dec!(4),
            deductible_expenses: Decimal::ZERO,
            deductible_expenses_currency: BASE_CURRENCY.to_string(),
            deductible_expenses_interval: DeductibleExpensesInterval::Monthly,
            minimum_wage: dec!(3300),
            minimum_wage_tax_free_deductible: dec!(300),
            vat_threshold: dec!(300000),
            dividends_tax: dec!(0.10),
            company_income_tax: dec!(0.01),
            company_high_income_tax: dec!(0.03),
            company_profit_tax: dec!(0.16),
            company_income_tax_threshold: dec!(298476),
            company_income_tax_to_profit_threshold: dec!(2487300),
            statutory: StatutoryRates::default(),
        }
    }
}

impl TaxConfiguration {
    pub fn schedule(&self) -> WorkSchedule {
        WorkSchedule {
            hours_per_week: self.working_hours_per_week,
            days_per_week: self.working_days_per_week,
            vacation_weeks_per_year: self.vacation_weeks_per_year,
        }
    }

    /// Returns a copy with only the raw income figure replaced.
    pub fn with_income(
        &self,
        income: Decimal,
    ) -> Self {
        Self {
            income,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_matches_2024_parameters() {
        let config = TaxConfiguration::default();

        assert_eq!(config.income, dec!(12000));
        assert_eq!(config.income_currency, "RON");
        assert_eq!(config.minimum_wage, dec!(3300));
        assert_eq!(config.statutory.pension_rate, dec!(0.25));
        assert_eq!(config.statutory.health_rate, dec!(0.10));
    }

    #[test]
    fn with_income_keeps_everything_else() {
        let config = TaxConfiguration::default();

        let changed = config.with_income(dec!(5));

        assert_eq!(changed.income, dec!(5));
        assert_eq!(changed.with_income(config.income), config);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config: TaxConfiguration =
            serde_json::from_str(r#"{"income": "500", "income_interval": "daily"}"#).unwrap();

        assert_eq!(config.income, dec!(500));
        assert_eq!(config.income_interval, IncomeInterval::Daily);
        assert_eq!(config.vat_threshold, dec!(300000));
        assert_eq!(config.statutory, StatutoryRates::default());
    }
}
