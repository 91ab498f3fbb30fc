//! Statutory constants shared by the calculations.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Currency every internal amount is normalized to.
pub const BASE_CURRENCY: &str = "RON";

pub const WEEKS_PER_YEAR: Decimal = dec!(52);
pub const WEEKS_PER_MONTH: Decimal = dec!(4.333);
pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Pension contribution (CAS) rate.
pub const PENSION_PERCENTAGE: Decimal = dec!(0.25);
/// Health contribution (CASS) rate.
pub const HEALTH_PERCENTAGE: Decimal = dec!(0.10);
pub const INCOME_TAX_PERCENTAGE: Decimal = dec!(0.10);
/// Share of a salary exempt from income tax as personal deduction.
pub const PERSONAL_DEDUCTIBLE: Decimal = dec!(0.20);
/// Employer work-insurance contribution (CAM) on wages.
pub const WAGE_COMPANY_TAX_PERCENTAGE: Decimal = dec!(0.0225);

/// Number of increments a chart sweep is divided into.
pub const CHART_STEPS: u32 = 100;
/// Income substituted for the zero point of a chart sweep.
pub const CHART_ZERO_INCOME: Decimal = dec!(0.1);
