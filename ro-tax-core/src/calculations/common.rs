//! Rounding, clamping and percentage helpers shared by the regime
//! calculations.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to two decimal places, midpoints away from zero.
///
/// Amounts are kept unrounded through a calculation; this is only applied
/// when they are displayed.
///
/// ```
/// use rust_decimal_macros::dec;
/// use ro_tax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(7.625)), dec!(7.63));
/// assert_eq!(round_half_up(dec!(-7.625)), dec!(-7.63));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// The larger of `a` and `b`. Used to floor levies and taxable bases at 0.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// `a / b`, clamped to the representable range instead of overflowing.
///
/// A zero `b` yields zero.
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use ro_tax_core::calculations::common::saturating_div;
///
/// assert_eq!(saturating_div(dec!(10), dec!(4)), dec!(2.5));
/// assert_eq!(saturating_div(Decimal::MAX, dec!(0.5)), Decimal::MAX);
/// assert_eq!(saturating_div(Decimal::MIN, dec!(0.5)), Decimal::MIN);
/// ```
pub fn saturating_div(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if b.is_zero() {
        return Decimal::ZERO;
    }
    a.checked_div(b).unwrap_or(if a.is_sign_negative() == b.is_sign_negative() {
        Decimal::MAX
    } else {
        Decimal::MIN
    })
}

/// Expresses `amount` as a percentage of `total`.
///
/// A zero `total` yields zero, so every percentage of a zero gross income
/// is reported as 0. Ratios too large to represent saturate.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use ro_tax_core::calculations::common::percentage_of;
///
/// assert_eq!(percentage_of(dec!(19800), dec!(144000)), dec!(13.75));
/// assert_eq!(percentage_of(dec!(100), dec!(0)), dec!(0));
/// ```
pub fn percentage_of(
    amount: Decimal,
    total: Decimal,
) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    saturating_div(amount, total).saturating_mul(Decimal::ONE_HUNDRED)
}
