//! Full tax computation for one business structure.
//!
//! # Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1 | Resolve exchange rates; without them a non-base currency is `Pending` |
//! | 2 | Gross income: annualize, clamp at zero, convert to base currency |
//! | 3 | Deductible expenses: annualize (SRL-venit adds 12 minimum wages), convert |
//! | 4 | Regime adjustment: expenses for PFA, company levies and owner salary for SRL |
//! | 5 | Pension (CAS) and health (CASS) contributions |
//! | 6 | Taxable income = max(income − CAS − CASS − company levies, 0) |
//! | 7 | Income tax: PFA taxes the taxable income, SRL reports the consumed levies |
//! | 8 | Totals, net income and percentages of gross income |
//!
//! The regime is chosen once per call; branches never share state.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculations::common::{max, percentage_of, saturating_div};
use crate::calculations::contributions::ContributionCalculator;
use crate::calculations::income::{annualize, annualize_expenses, deannualize};
use crate::calculations::wage::split_minimum_wage;
use crate::constants::MONTHS_PER_YEAR;
use crate::models::{
    Calculation, ExchangeRates, RegimeVariant, TaxConfiguration, TaxResult, is_base_currency,
};

/// Income left after the regime-specific adjustment, before contributions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AdjustedIncome {
    income: Decimal,
    company_taxes: Decimal,
    owner_salary: Decimal,
}

/// Conversion factors for the two currencies a configuration mentions.
#[derive(Debug, Clone, Copy)]
struct ConversionFactors {
    income: Decimal,
    expenses: Decimal,
}

/// Calculator for a single regime.
///
/// The engine only borrows the exchange-rate table, so one table can serve
/// any number of engines and calls at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegimeEngine<'a> {
    rates: Option<&'a ExchangeRates>,
}

impl<'a> RegimeEngine<'a> {
    /// Creates an engine. `rates` is `None` while exchange rates are still
    /// being resolved.
    pub fn new(rates: Option<&'a ExchangeRates>) -> Self {
        Self { rates }
    }

    /// Runs the full calculation for `regime`.
    ///
    /// Returns [`Calculation::Pending`] when the income or expense currency
    /// differs from the base currency and its rate is not available yet.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use ro_tax_core::calculations::RegimeEngine;
    /// use ro_tax_core::{Calculation, RegimeVariant, TaxConfiguration};
    ///
    /// let config = TaxConfiguration {
    ///     income_currency: "EUR".to_string(),
    ///     ..TaxConfiguration::default()
    /// };
    ///
    /// let engine = RegimeEngine::new(None);
    ///
    /// assert_eq!(engine.calculate(&config, RegimeVariant::Pfa), Calculation::Pending);
    /// ```
    pub fn calculate(
        &self,
        config: &TaxConfiguration,
        regime: RegimeVariant,
    ) -> Calculation<TaxResult> {
        let Some(factors) = self.conversion_factors(config) else {
            debug!(
                income_currency = %config.income_currency,
                expenses_currency = %config.deductible_expenses_currency,
                "Exchange rates not available; calculation pending"
            );
            return Calculation::Pending;
        };

        let schedule = config.schedule();

        let gross_income = self.gross_income(config, factors.income);
        let deductible_expenses = self.deductible_expenses(config, regime, factors.expenses);

        let adjusted = match regime {
            RegimeVariant::Pfa => self.pfa_income(gross_income, deductible_expenses),
            RegimeVariant::SrlVenit => self.srl_venit_income(config, gross_income),
            RegimeVariant::SrlProfit => {
                self.srl_profit_income(config, gross_income, deductible_expenses)
            }
        };
        let income = adjusted.income;

        let contributions = ContributionCalculator::new(&config.statutory);
        let is_individual = regime.is_individual();
        let pension = contributions.pension(income, config.minimum_wage, is_individual);
        let health = contributions.health(income, config.minimum_wage, is_individual);

        let taxable_income = self.taxable_income(income, pension, health, adjusted.company_taxes);
        let income_tax = if is_individual {
            taxable_income.saturating_mul(config.statutory.income_tax_rate)
        } else {
            income.saturating_sub(taxable_income)
        };

        let total_tax = pension.saturating_add(health).saturating_add(income_tax);
        let total_net_income = gross_income.saturating_sub(total_tax);
        let net_income = self.display_net_income(config, total_net_income, factors.income);

        debug!(
            regime = %regime,
            gross_income = %gross_income,
            income = %income,
            pension = %pension,
            health = %health,
            income_tax = %income_tax,
            "Regime calculation complete"
        );

        Calculation::Ready(TaxResult {
            regime,
            gross_income_in_base_currency: gross_income,
            gross_income_over_vat_threshold: gross_income > config.vat_threshold,
            total_net_income_in_base_currency: total_net_income,
            net_income: deannualize(net_income, config.income_interval, &schedule),
            total_tax_amount_in_base_currency: total_tax,
            total_tax_percentage: percentage_of(total_tax, gross_income),
            pension_tax_amount_in_base_currency: pension,
            pension_tax_percentage: percentage_of(pension, gross_income),
            health_tax_amount_in_base_currency: health,
            health_tax_percentage: percentage_of(health, gross_income),
            income_tax_amount_in_base_currency: income_tax,
            income_tax_percentage: percentage_of(income_tax, gross_income),
            company_taxes_in_base_currency: adjusted.company_taxes,
            owner_salary_in_base_currency: adjusted.owner_salary,
        })
    }

    /// Runs [`calculate`](Self::calculate) for every regime.
    pub fn calculate_all(
        &self,
        config: &TaxConfiguration,
    ) -> Vec<(RegimeVariant, Calculation<TaxResult>)> {
        RegimeVariant::ALL
            .into_iter()
            .map(|regime| (regime, self.calculate(config, regime)))
            .collect()
    }

    fn conversion_factors(
        &self,
        config: &TaxConfiguration,
    ) -> Option<ConversionFactors> {
        Some(ConversionFactors {
            income: self.conversion_factor(&config.income_currency)?,
            expenses: self.conversion_factor(&config.deductible_expenses_currency)?,
        })
    }

    fn conversion_factor(
        &self,
        currency: &str,
    ) -> Option<Decimal> {
        if is_base_currency(currency) {
            return Some(Decimal::ONE);
        }
        self.rates?.rate(currency)
    }

    /// Yearly gross income in the base currency.
    fn gross_income(
        &self,
        config: &TaxConfiguration,
        rate: Decimal,
    ) -> Decimal {
        let yearly = annualize(config.income, config.income_interval, &config.schedule());
        convert(yearly, &config.income_currency, rate)
    }

    /// Yearly deductible expenses in the base currency.
    ///
    /// The mandatory owner salary of an SRL-venit is added before conversion.
    fn deductible_expenses(
        &self,
        config: &TaxConfiguration,
        regime: RegimeVariant,
        rate: Decimal,
    ) -> Decimal {
        let mut expenses = annualize_expenses(
            config.deductible_expenses,
            config.deductible_expenses_interval,
        );
        if regime == RegimeVariant::SrlVenit {
            expenses = expenses.saturating_add(config.minimum_wage.saturating_mul(MONTHS_PER_YEAR));
        }
        convert(expenses, &config.deductible_expenses_currency, rate)
    }

    fn pfa_income(
        &self,
        gross_income: Decimal,
        deductible_expenses: Decimal,
    ) -> AdjustedIncome {
        if deductible_expenses > gross_income {
            warn!(
                gross_income = %gross_income,
                deductible_expenses = %deductible_expenses,
                "Deductible expenses exceed gross income"
            );
        }
        AdjustedIncome {
            income: gross_income.saturating_sub(deductible_expenses),
            company_taxes: Decimal::ZERO,
            owner_salary: Decimal::ZERO,
        }
    }

    /// Revenue tax on the whole gross income, then dividend tax on the rest.
    fn srl_venit_income(
        &self,
        config: &TaxConfiguration,
        gross_income: Decimal,
    ) -> AdjustedIncome {
        let revenue_tax = max(
            gross_income.saturating_mul(config.company_high_income_tax),
            Decimal::ZERO,
        );
        let profits = gross_income - revenue_tax;
        self.distribute_profits(config, profits, revenue_tax)
    }

    /// Profit tax on gross income minus expenses, then dividend tax on the rest.
    fn srl_profit_income(
        &self,
        config: &TaxConfiguration,
        gross_income: Decimal,
        deductible_expenses: Decimal,
    ) -> AdjustedIncome {
        let profit_base = gross_income.saturating_sub(deductible_expenses);
        let profit_tax = max(profit_base.saturating_mul(config.company_profit_tax), Decimal::ZERO);
        let profits = profit_base - profit_tax;
        self.distribute_profits(config, profits, profit_tax)
    }

    /// Pays `profits` out as dividends and adds the owner's net salary.
    fn distribute_profits(
        &self,
        config: &TaxConfiguration,
        profits: Decimal,
        company_tax: Decimal,
    ) -> AdjustedIncome {
        let dividend_tax = profits.saturating_mul(config.dividends_tax);
        let salary = split_minimum_wage(
            config.minimum_wage,
            config.minimum_wage_tax_free_deductible,
            &config.statutory,
        );

        AdjustedIncome {
            income: profits
                .saturating_sub(dividend_tax)
                .saturating_add(salary.net_salary),
            company_taxes: company_tax.saturating_add(dividend_tax),
            owner_salary: salary.net_salary,
        }
    }

    fn taxable_income(
        &self,
        income: Decimal,
        pension: Decimal,
        health: Decimal,
        company_taxes: Decimal,
    ) -> Decimal {
        let remaining = income
            .saturating_sub(pension)
            .saturating_sub(health)
            .saturating_sub(company_taxes);
        max(remaining, Decimal::ZERO)
    }

    /// Converts the yearly net income back into the income currency.
    fn display_net_income(
        &self,
        config: &TaxConfiguration,
        total_net_income: Decimal,
        rate: Decimal,
    ) -> Decimal {
        if is_base_currency(&config.income_currency) || rate.is_zero() {
            return total_net_income;
        }
        saturating_div(total_net_income, rate)
    }
}

fn convert(
    amount: Decimal,
    currency: &str,
    rate: Decimal,
) -> Decimal {
    if is_base_currency(currency) {
        amount
    } else {
        amount.saturating_mul(rate)
    }
}
