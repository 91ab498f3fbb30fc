//! Tax calculation modules for the PFA, SRL-venit and SRL-profit regimes.
//!
//! Leaf modules (`income`, `wage`, `contributions`) are pure helpers that the
//! [`RegimeEngine`] combines; [`ChartSampler`] repeatedly drives the engine.

pub mod advisory;
pub mod chart;
pub mod common;
pub mod contributions;
pub mod income;
pub mod regime;
pub mod wage;

pub use advisory::{Advisory, advisories};
pub use chart::ChartSampler;
pub use contributions::ContributionCalculator;
pub use regime::RegimeEngine;
pub use wage::{WageSplit, split_minimum_wage};
