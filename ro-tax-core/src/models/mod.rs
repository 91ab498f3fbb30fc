mod exchange_rates;
mod interval;
mod regime_variant;
mod tax_configuration;
mod tax_result;

pub use exchange_rates::{ExchangeRates, is_base_currency};
pub use interval::{DeductibleExpensesInterval, IncomeInterval, ParseIntervalError};
pub use regime_variant::{ParseRegimeError, RegimeVariant};
pub use tax_configuration::{StatutoryRates, TaxConfiguration, WorkSchedule};
pub use tax_result::{Calculation, ChartDataPoint, TaxChart, TaxResult};
