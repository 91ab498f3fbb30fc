pub mod app;
pub mod config;
pub mod logging;
pub mod rates_loader;
pub mod report;
pub mod utils;
