//! Threshold notices derived from a finished calculation.
//!
//! These do not change any amount. They flag thresholds the configuration
//! carries that the simplified levy computation does not apply.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{RegimeVariant, TaxConfiguration, TaxResult};

/// A threshold crossed (or not reached) by the gross income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Advisory {
    /// Gross income exceeds the VAT registration threshold.
    VatRegistrationRequired {
        gross_income: Decimal,
        threshold: Decimal,
    },
    /// Revenue is low enough for the reduced company income tax rate, while
    /// the estimate uses the high rate.
    ReducedRevenueTaxAvailable {
        gross_income: Decimal,
        threshold: Decimal,
        reduced_rate: Decimal,
    },
    /// Revenue exceeds the cap of the revenue-taxed regime; the company would
    /// have to switch to profit tax.
    RevenueRegimeCapExceeded {
        gross_income: Decimal,
        threshold: Decimal,
    },
}

impl fmt::Display for Advisory {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::VatRegistrationRequired {
                gross_income,
                threshold,
            } => write!(
                f,
                "gross income {gross_income} exceeds the VAT threshold {threshold}; VAT registration required"
            ),
            Self::ReducedRevenueTaxAvailable {
                gross_income,
                threshold,
                reduced_rate,
            } => write!(
                f,
                "revenue {gross_income} is under {threshold}; the reduced revenue tax rate {reduced_rate} may apply"
            ),
            Self::RevenueRegimeCapExceeded {
                gross_income,
                threshold,
            } => write!(
                f,
                "revenue {gross_income} exceeds {threshold}; the company must pay profit tax instead"
            ),
        }
    }
}

/// Lists every advisory that applies to `result`.
pub fn advisories(
    config: &TaxConfiguration,
    result: &TaxResult,
) -> Vec<Advisory> {
    let gross_income = result.gross_income_in_base_currency;
    let mut advisories = Vec::new();

    if result.gross_income_over_vat_threshold {
        advisories.push(Advisory::VatRegistrationRequired {
            gross_income,
            threshold: config.vat_threshold,
        });
    }

    if result.regime == RegimeVariant::SrlVenit {
        if gross_income <= config.company_income_tax_threshold {
            advisories.push(Advisory::ReducedRevenueTaxAvailable {
                gross_income,
                threshold: config.company_income_tax_threshold,
                reduced_rate: config.company_income_tax,
            });
        }
        if gross_income > config.company_income_tax_to_profit_threshold {
            advisories.push(Advisory::RevenueRegimeCapExceeded {
                gross_income,
                threshold: config.company_income_tax_to_profit_threshold,
            });
        }
    }

    advisories
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::RegimeEngine;
    use crate::models::IncomeInterval;

    fn yearly(income: Decimal) -> TaxConfiguration {
        TaxConfiguration {
            income,
            income_interval: IncomeInterval::Yearly,
            ..TaxConfiguration::default()
        }
    }

    fn advisories_for(
        config: &TaxConfiguration,
        regime: RegimeVariant,
    ) -> Vec<Advisory> {
        let result = RegimeEngine::new(None)
            .calculate(config, regime)
            .ready()
            .expect("base currency calculation is ready");
        advisories(config, &result)
    }

    #[test]
    fn pfa_below_vat_threshold_has_no_advisories() {
        let result = advisories_for(&yearly(dec!(100000)), RegimeVariant::Pfa);

        assert_eq!(result, vec![]);
    }

    #[test]
    fn pfa_above_vat_threshold_requires_registration() {
        let result = advisories_for(&yearly(dec!(400000)), RegimeVariant::Pfa);

        assert_eq!(
            result,
            vec![Advisory::VatRegistrationRequired {
                gross_income: dec!(400000),
                threshold: dec!(300000),
            }]
        );
    }

    #[test]
    fn srl_venit_small_revenue_may_use_reduced_rate() {
        let result = advisories_for(&yearly(dec!(200000)), RegimeVariant::SrlVenit);

        assert_eq!(
            result,
            vec![Advisory::ReducedRevenueTaxAvailable {
                gross_income: dec!(200000),
                threshold: dec!(298476),
                reduced_rate: dec!(0.01),
            }]
        );
    }

    #[test]
    fn srl_venit_above_cap_must_switch_to_profit() {
        let result = advisories_for(&yearly(dec!(3000000)), RegimeVariant::SrlVenit);

        assert_eq!(result.len(), 2);
        assert!(matches!(result[0], Advisory::VatRegistrationRequired { .. }));
        assert!(matches!(result[1], Advisory::RevenueRegimeCapExceeded { .. }));
    }

    #[test]
    fn srl_profit_ignores_revenue_thresholds() {
        let result = advisories_for(&yearly(dec!(3000000)), RegimeVariant::SrlProfit);

        assert_eq!(result.len(), 1);
    }

    #[test]
    fn display_mentions_threshold() {
        let advisory = Advisory::RevenueRegimeCapExceeded {
            gross_income: dec!(3000000),
            threshold: dec!(2487300),
        };

        assert!(advisory.to_string().contains("2487300"));
    }
}
