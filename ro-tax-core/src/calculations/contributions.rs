//! Pension (CAS) and health (CASS) contributions.
//!
//! Both contributions are stepped functions of the income measured in
//! multiples of the minimum wage. Each is described by an ordered bracket
//! table; the first bracket whose conditions hold decides the amount.
//!
//! # Pension (CAS)
//!
//! | Applies to | Income ≥      | Amount |
//! |------------|---------------|--------|
//! | individual | 24 × wage     | 24 × wage × rate |
//! | individual | 12 × wage     | 12 × wage × rate |
//!
//! # Health (CASS)
//!
//! | Applies to | Income ≥      | Amount |
//! |------------|---------------|--------|
//! | individual | 60 × wage     | 60 × wage × rate |
//! | individual | 6 × wage      | income × rate |
//! | company    | 24 × wage     | 24 × wage × rate |
//! | company    | 12 × wage     | 12 × wage × rate |
//! | any        | 6 × wage      | 6 × wage × rate |
//!
//! Income below every bracket owes nothing.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::StatutoryRates;

/// Which kind of income a bracket applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Applicability {
    Individual,
    Company,
    Any,
}

impl Applicability {
    fn matches(
        self,
        is_individual: bool,
    ) -> bool {
        match self {
            Self::Individual => is_individual,
            Self::Company => !is_individual,
            Self::Any => true,
        }
    }
}

/// How the amount owed inside a bracket is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Amount {
    /// The bracket floor times the rate.
    Flat,
    /// The whole income times the rate.
    Proportional,
}

#[derive(Debug, Clone, Copy)]
struct ContributionBracket {
    applies_to: Applicability,
    minimum_wages: u32,
    amount: Amount,
}

impl ContributionBracket {
    const fn new(
        applies_to: Applicability,
        minimum_wages: u32,
        amount: Amount,
    ) -> Self {
        Self {
            applies_to,
            minimum_wages,
            amount,
        }
    }

    fn floor(
        &self,
        minimum_wage: Decimal,
    ) -> Decimal {
        minimum_wage.saturating_mul(Decimal::from(self.minimum_wages))
    }
}

const PENSION_BRACKETS: &[ContributionBracket] = &[
    ContributionBracket::new(Applicability::Individual, 24, Amount::Flat),
    ContributionBracket::new(Applicability::Individual, 12, Amount::Flat),
];

const HEALTH_BRACKETS: &[ContributionBracket] = &[
    ContributionBracket::new(Applicability::Individual, 60, Amount::Flat),
    ContributionBracket::new(Applicability::Individual, 6, Amount::Proportional),
    ContributionBracket::new(Applicability::Company, 24, Amount::Flat),
    ContributionBracket::new(Applicability::Company, 12, Amount::Flat),
    ContributionBracket::new(Applicability::Any, 6, Amount::Flat),
];

/// Evaluates the contribution bracket tables.
#[derive(Debug, Clone)]
pub struct ContributionCalculator<'a> {
    rates: &'a StatutoryRates,
}

impl<'a> ContributionCalculator<'a> {
    pub fn new(rates: &'a StatutoryRates) -> Self {
        Self { rates }
    }

    /// Pension contribution (CAS). Company income never owes CAS here; the
    /// owner's salary already carries it.
    ///
    /// # Examples
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use ro_tax_core::StatutoryRates;
    /// use ro_tax_core::calculations::ContributionCalculator;
    ///
    /// let rates = StatutoryRates::default();
    /// let calculator = ContributionCalculator::new(&rates);
    ///
    /// // 144000 is above 24 minimum wages of 3300
    /// assert_eq!(calculator.pension(dec!(144000), dec!(3300), true), dec!(19800));
    /// assert_eq!(calculator.pension(dec!(144000), dec!(3300), false), dec!(0));
    /// ```
    pub fn pension(
        &self,
        income: Decimal,
        minimum_wage: Decimal,
        is_individual: bool,
    ) -> Decimal {
        let amount = evaluate(
            PENSION_BRACKETS,
            income,
            minimum_wage,
            is_individual,
            self.rates.pension_rate,
        );
        debug!(income = %income, is_individual, pension = %amount, "CAS computed");
        amount
    }

    /// Health contribution (CASS).
    pub fn health(
        &self,
        income: Decimal,
        minimum_wage: Decimal,
        is_individual: bool,
    ) -> Decimal {
        let amount = evaluate(
            HEALTH_BRACKETS,
            income,
            minimum_wage,
            is_individual,
            self.rates.health_rate,
        );
        debug!(income = %income, is_individual, health = %amount, "CASS computed");
        amount
    }
}

fn evaluate(
    brackets: &[ContributionBracket],
    income: Decimal,
    minimum_wage: Decimal,
    is_individual: bool,
    rate: Decimal,
) -> Decimal {
    brackets
        .iter()
        .find(|bracket| {
            bracket.applies_to.matches(is_individual) && income >= bracket.floor(minimum_wage)
        })
        .map(|bracket| match bracket.amount {
            Amount::Flat => bracket.floor(minimum_wage).saturating_mul(rate),
            Amount::Proportional => income.saturating_mul(rate),
        })
        .unwrap_or(Decimal::ZERO)
}
