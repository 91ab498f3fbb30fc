//! Conversion of periodic income and expense figures into yearly amounts.
//!
//! | Interval  | Yearly amount |
//! |-----------|---------------|
//! | `hourly`  | amount × hours per week × (52 − vacation weeks) |
//! | `daily`   | amount × days per week × (52 − vacation weeks) |
//! | `monthly` | amount × (12 − vacation weeks ÷ 4.333) |
//! | `yearly`  | amount |
//!
//! Currency conversion is not done here; the regime engine multiplies the
//! yearly figure by the exchange rate afterwards.

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::{max, saturating_div};
use crate::constants::{MONTHS_PER_YEAR, WEEKS_PER_MONTH, WEEKS_PER_YEAR};
use crate::models::{DeductibleExpensesInterval, IncomeInterval, WorkSchedule};

/// Multiplier turning one `interval` worth of income into a yearly figure.
///
/// The factor can be negative when more vacation weeks are entered than a
/// year has; callers clamp the product.
pub fn interval_factor(
    interval: IncomeInterval,
    schedule: &WorkSchedule,
) -> Decimal {
    match interval {
        IncomeInterval::Hourly => {
            let working_weeks = WEEKS_PER_YEAR.saturating_sub(schedule.vacation_weeks_per_year);
            schedule.hours_per_week.saturating_mul(working_weeks)
        }
        IncomeInterval::Daily => {
            let working_weeks = WEEKS_PER_YEAR.saturating_sub(schedule.vacation_weeks_per_year);
            schedule.days_per_week.saturating_mul(working_weeks)
        }
        IncomeInterval::Monthly => {
            MONTHS_PER_YEAR.saturating_sub(schedule.vacation_weeks_per_year / WEEKS_PER_MONTH)
        }
        IncomeInterval::Yearly => Decimal::ONE,
    }
}

/// Annualizes `amount`, never returning less than zero. Amounts too large to
/// represent saturate at [`Decimal::MAX`].
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use ro_tax_core::calculations::income::annualize;
/// use ro_tax_core::{IncomeInterval, WorkSchedule};
///
/// let schedule = WorkSchedule {
///     hours_per_week: dec!(40),
///     days_per_week: dec!(5),
///     vacation_weeks_per_year: dec!(2),
/// };
///
/// // 50 per hour, 40 hours a week, 50 working weeks
/// assert_eq!(annualize(dec!(50), IncomeInterval::Hourly, &schedule), dec!(100000));
/// ```
pub fn annualize(
    amount: Decimal,
    interval: IncomeInterval,
    schedule: &WorkSchedule,
) -> Decimal {
    if interval == IncomeInterval::Yearly {
        return max(amount, Decimal::ZERO);
    }

    let yearly = amount.saturating_mul(interval_factor(interval, schedule));
    if yearly < Decimal::ZERO {
        warn!(
            amount = %amount,
            interval = %interval,
            vacation_weeks = %schedule.vacation_weeks_per_year,
            "Annualized income is negative; clamping to zero"
        );
    }
    max(yearly, Decimal::ZERO)
}

/// Inverse of [`annualize`], used to show a yearly amount per `interval`.
///
/// Returns zero when the interval factor is zero or negative, since no
/// working time remains to spread the amount over.
pub fn deannualize(
    yearly: Decimal,
    interval: IncomeInterval,
    schedule: &WorkSchedule,
) -> Decimal {
    if interval == IncomeInterval::Yearly {
        return yearly;
    }

    let factor = interval_factor(interval, schedule);
    if factor <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    saturating_div(yearly, factor)
}

/// Annualizes deductible expenses. Vacation time does not reduce expenses.
pub fn annualize_expenses(
    amount: Decimal,
    interval: DeductibleExpensesInterval,
) -> Decimal {
    match interval {
        DeductibleExpensesInterval::Monthly => amount.saturating_mul(MONTHS_PER_YEAR),
        DeductibleExpensesInterval::Yearly => amount,
    }
}
