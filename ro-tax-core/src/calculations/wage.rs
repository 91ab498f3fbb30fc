//! Split of a minimum-wage salary into net pay, employee taxes and employer tax.
//!
//! A company owner is assumed to draw the minimum wage. The split follows the
//! payroll order:
//!
//! | Step | Amount |
//! |------|--------|
//! | 1 | taxable wage = wage − tax-free deductible |
//! | 2 | pension = taxable wage × pension rate |
//! | 3 | health = taxable wage × health rate |
//! | 4 | personal deduction = taxable wage × personal deductible rate |
//! | 5 | base = taxable wage − pension − health − personal deduction |
//! | 6 | income tax = base × income tax rate |
//! | 7 | net salary = taxable wage − income tax + tax-free deductible |
//! | 8 | employer tax = taxable wage × wage company tax rate |

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::StatutoryRates;

/// Result of splitting a salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WageSplit {
    /// Salary received by the employee.
    pub net_salary: Decimal,
    /// Pension, health and income tax withheld from the employee.
    pub personal_taxes: Decimal,
    /// Contribution paid by the employer on top of the salary.
    pub company_tax: Decimal,
}

/// Splits `minimum_wage` into net salary and taxes.
///
/// `tax_free` is expected to be at most `minimum_wage`; larger values are
/// not rejected and simply produce negative taxes.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use ro_tax_core::StatutoryRates;
/// use ro_tax_core::calculations::wage::split_minimum_wage;
///
/// let split = split_minimum_wage(dec!(3300), dec!(300), &StatutoryRates::default());
///
/// assert_eq!(split.net_salary, dec!(3165));
/// assert_eq!(split.personal_taxes, dec!(1185));
/// ```
pub fn split_minimum_wage(
    minimum_wage: Decimal,
    tax_free: Decimal,
    rates: &StatutoryRates,
) -> WageSplit {
    let wage = minimum_wage.saturating_sub(tax_free);
    let pension = wage.saturating_mul(rates.pension_rate);
    let health = wage.saturating_mul(rates.health_rate);
    let personal_deductible_expense = wage.saturating_mul(rates.personal_deductible_rate);
    let base = wage
        .saturating_sub(pension)
        .saturating_sub(health)
        .saturating_sub(personal_deductible_expense);
    let income_tax = base.saturating_mul(rates.income_tax_rate);

    WageSplit {
        net_salary: wage.saturating_sub(income_tax).saturating_add(tax_free),
        personal_taxes: pension.saturating_add(health).saturating_add(income_tax),
        company_tax: wage.saturating_mul(rates.wage_company_tax_rate),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn split_2024_minimum_wage() {
        let split = split_minimum_wage(dec!(3300), dec!(300), &StatutoryRates::default());

        // taxable 3000: pension 750, health 300, personal 600, base 1350, tax 135
        assert_eq!(
            split,
            WageSplit {
                net_salary: dec!(3165),
                personal_taxes: dec!(1185),
                company_tax: dec!(67.5),
            }
        );
    }

    #[test]
    fn split_without_tax_free_amount() {
        let split = split_minimum_wage(dec!(1000), dec!(0), &StatutoryRates::default());

        // pension 250, health 100, personal 200, base 450, tax 45
        assert_eq!(split.net_salary, dec!(955));
        assert_eq!(split.personal_taxes, dec!(395));
        assert_eq!(split.company_tax, dec!(22.5));
    }

    #[test]
    fn split_fully_tax_free_wage_has_no_taxes() {
        let split = split_minimum_wage(dec!(300), dec!(300), &StatutoryRates::default());

        assert_eq!(split.net_salary, dec!(300));
        assert_eq!(split.personal_taxes, dec!(0));
        assert_eq!(split.company_tax, dec!(0));
    }

    #[test]
    fn split_zero_wage_is_zero() {
        let split = split_minimum_wage(dec!(0), dec!(0), &StatutoryRates::default());

        assert_eq!(split.net_salary, dec!(0));
        assert_eq!(split.personal_taxes, dec!(0));
    }

    #[test]
    fn split_honours_custom_rates() {
        let rates = StatutoryRates {
            income_tax_rate: dec!(0),
            ..StatutoryRates::default()
        };

        let split = split_minimum_wage(dec!(3300), dec!(300), &rates);

        assert_eq!(split.net_salary, dec!(3300));
        assert_eq!(split.personal_taxes, dec!(1050));
    }

    #[test]
    fn split_saturates_out_of_range_wage() {
        let split = split_minimum_wage(Decimal::MAX, dec!(-1), &StatutoryRates::default());

        assert!(split.net_salary > dec!(0));
        assert!(split.personal_taxes > dec!(0));
        assert!(split.company_tax > dec!(0));
    }
}
