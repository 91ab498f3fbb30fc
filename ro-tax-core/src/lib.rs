//! Tax burden estimation for Romanian PFA and SRL business structures.
//!
//! The crate is a pure calculator: it takes an immutable [`TaxConfiguration`],
//! a [`RegimeVariant`] and an optional [`ExchangeRates`] table, and produces a
//! fresh [`TaxResult`] on every call. Nothing here performs I/O.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use ro_tax_core::calculations::RegimeEngine;
//! use ro_tax_core::{Calculation, IncomeInterval, RegimeVariant, TaxConfiguration};
//!
//! let config = TaxConfiguration {
//!     income: dec!(12000),
//!     income_interval: IncomeInterval::Monthly,
//!     vacation_weeks_per_year: dec!(0),
//!     ..TaxConfiguration::default()
//! };
//!
//! let engine = RegimeEngine::new(None);
//! let Calculation::Ready(result) = engine.calculate(&config, RegimeVariant::Pfa) else {
//!     panic!("base currency inputs never wait for exchange rates");
//! };
//!
//! assert_eq!(result.gross_income_in_base_currency, dec!(144000));
//! assert_eq!(result.total_tax_amount_in_base_currency, dec!(45180));
//! ```

pub mod calculations;
pub mod constants;
pub mod models;

pub use models::*;
