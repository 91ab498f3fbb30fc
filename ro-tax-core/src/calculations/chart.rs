//! Sweeps the income range to chart how the tax burden evolves.

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::RegimeEngine;
use crate::constants::{CHART_STEPS, CHART_ZERO_INCOME};
use crate::models::{ChartDataPoint, ExchangeRates, RegimeVariant, TaxChart, TaxConfiguration};

/// Samples a regime over `0..=2 × income` in equal increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSampler {
    steps: u32,
}

impl Default for ChartSampler {
    fn default() -> Self {
        Self::new(CHART_STEPS)
    }
}

impl ChartSampler {
    /// Creates a sampler dividing the range into `steps` increments
    /// (at least one).
    pub fn new(steps: u32) -> Self {
        Self {
            steps: steps.max(1),
        }
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Produces `steps + 1` points plus the full result at the configured income.
    ///
    /// Returns `None` when there is nothing to chart: the exchange rates are
    /// not resolved yet, a currency is missing from them, or the income is not
    /// positive.
    /// The zero point is computed with a small positive income but reported
    /// as 0.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use ro_tax_core::calculations::ChartSampler;
    /// use ro_tax_core::{ExchangeRates, RegimeVariant, TaxConfiguration};
    ///
    /// let rates = ExchangeRates::new();
    /// let chart = ChartSampler::new(4)
    ///     .sample(&TaxConfiguration::default(), RegimeVariant::Pfa, Some(&rates))
    ///     .unwrap();
    ///
    /// let incomes: Vec<_> = chart.data.iter().map(|point| point.income).collect();
    /// assert_eq!(incomes, vec![dec!(0), dec!(6000), dec!(12000), dec!(18000), dec!(24000)]);
    /// ```
    pub fn sample(
        &self,
        config: &TaxConfiguration,
        regime: RegimeVariant,
        rates: Option<&ExchangeRates>,
    ) -> Option<TaxChart> {
        let rates = rates?;
        if config.income <= Decimal::ZERO {
            return None;
        }

        let engine = RegimeEngine::new(Some(rates));
        let income_to = config.income.saturating_mul(Decimal::TWO);
        let step = income_to / Decimal::from(self.steps);

        let data = (0..=self.steps)
            .map(|index| {
                let income = step.saturating_mul(Decimal::from(index));
                let sampled_income = if income.is_zero() {
                    CHART_ZERO_INCOME
                } else {
                    income
                };
                let result = engine
                    .calculate(&config.with_income(sampled_income), regime)
                    .ready()?;

                Some(ChartDataPoint {
                    income,
                    pension_tax_percentage: result.pension_tax_percentage,
                    health_tax_percentage: result.health_tax_percentage,
                    income_tax_percentage: result.income_tax_percentage,
                    net_income: result.net_income,
                })
            })
            .collect::<Option<Vec<_>>>()?;

        let result = engine.calculate(config, regime).ready()?;
        debug!(regime = %regime, points = data.len(), "Chart sampled");

        Some(TaxChart { data, result })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{Calculation, IncomeInterval};

    fn test_config() -> TaxConfiguration {
        TaxConfiguration {
            income: dec!(12000),
            income_interval: IncomeInterval::Monthly,
            vacation_weeks_per_year: dec!(0),
            ..TaxConfiguration::default()
        }
    }

    #[test]
    fn sample_has_steps_plus_one_points_over_double_income() {
        let rates = ExchangeRates::new();
        let sampler = ChartSampler::new(10);

        let chart = sampler
            .sample(&test_config(), RegimeVariant::Pfa, Some(&rates))
            .expect("chart should be produced");

        assert_eq!(chart.data.len(), 11);
        assert_eq!(chart.data[0].income, dec!(0));
        assert_eq!(chart.data[10].income, dec!(24000));
        assert!(chart.data.windows(2).all(|pair| pair[0].income < pair[1].income));
    }

    #[test]
    fn sample_default_uses_chart_steps() {
        let rates = ExchangeRates::new();

        let chart = ChartSampler::default()
            .sample(&test_config(), RegimeVariant::SrlVenit, Some(&rates))
            .unwrap();

        assert_eq!(chart.data.len(), CHART_STEPS as usize + 1);
    }

    #[test]
    fn sample_zero_point_uses_substituted_income() {
        let rates = ExchangeRates::new();
        let sampler = ChartSampler::new(2);

        let chart = sampler
            .sample(&test_config(), RegimeVariant::Pfa, Some(&rates))
            .unwrap();

        // 0.1 per month is below every contribution bracket, only income tax applies
        assert_eq!(chart.data[0].income, dec!(0));
        assert_eq!(chart.data[0].net_income, dec!(0.09));
        assert_eq!(chart.data[0].pension_tax_percentage, dec!(0));
        assert_eq!(chart.data[0].income_tax_percentage, dec!(10));
    }

    #[test]
    fn sample_midpoint_matches_direct_calculation() {
        let rates = ExchangeRates::new();
        let sampler = ChartSampler::new(2);
        let config = test_config();

        let chart = sampler.sample(&config, RegimeVariant::Pfa, Some(&rates)).unwrap();
        let direct = RegimeEngine::new(Some(&rates)).calculate(&config, RegimeVariant::Pfa);

        let Calculation::Ready(direct) = direct else {
            panic!("expected ready result");
        };
        assert_eq!(chart.data[1].net_income, direct.net_income);
        assert_eq!(chart.result, direct);
    }

    #[test]
    fn sample_without_rates_is_none() {
        let sampler = ChartSampler::new(10);

        let chart = sampler.sample(&test_config(), RegimeVariant::Pfa, None);

        assert_eq!(chart, None);
    }

    #[test]
    fn sample_zero_income_is_none() {
        let rates = ExchangeRates::new();
        let sampler = ChartSampler::new(10);

        let config = test_config().with_income(dec!(0));

        let chart = sampler.sample(&config, RegimeVariant::Pfa, Some(&rates));

        assert_eq!(chart, None);
    }

    #[test]
    fn sample_negative_income_is_none() {
        let rates = ExchangeRates::new();
        let config = test_config().with_income(dec!(-1000));

        let chart = ChartSampler::new(4).sample(&config, RegimeVariant::Pfa, Some(&rates));

        assert_eq!(chart, None);
    }

    #[test]
    fn sample_extreme_income_increases_without_overflow() {
        let rates = ExchangeRates::new();
        let config = test_config().with_income(dec!(50000000000000000000000000000));

        let chart = ChartSampler::new(4)
            .sample(&config, RegimeVariant::Pfa, Some(&rates))
            .expect("extreme income still charts");

        assert_eq!(chart.data.len(), 5);
        assert!(chart.data.windows(2).all(|pair| pair[0].income < pair[1].income));
    }

    #[test]
    fn sample_with_missing_currency_is_none() {
        let rates = ExchangeRates::new();
        let config = TaxConfiguration {
            income_currency: "EUR".to_string(),
            ..test_config()
        };

        let chart = ChartSampler::new(10).sample(&config, RegimeVariant::Pfa, Some(&rates));

        assert_eq!(chart, None);
    }

    #[test]
    fn new_never_uses_zero_steps() {
        assert_eq!(ChartSampler::new(0).steps(), 1);
    }
}
