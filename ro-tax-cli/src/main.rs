use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use ro_tax_cli::app::{self, Command, Request};
use ro_tax_cli::config::ConfigOverrides;
use ro_tax_cli::logging;
use ro_tax_cli::report::OutputFormat;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Romanian self-employment tax estimator.
///
/// Compares the taxes owed as a PFA and as a single-owner SRL (revenue or
/// profit taxed), starting from a TOML configuration, command-line
/// overrides and an optional exchange-rate table.
#[derive(Debug, Parser)]
#[command(name = "ro-tax", version, about, long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults apply to anything it omits.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// CSV exchange-rate table (`currency,rate`, RON per unit).
    #[arg(short, long, global = true)]
    rates: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    overrides: ConfigOverrides,

    #[command(subcommand)]
    command: Command,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.log_file.as_deref())?;
    debug!(command = ?cli.command, "Starting");

    let request = Request {
        config_path: cli.config,
        rates_path: cli.rates,
        overrides: cli.overrides,
        format: cli.format,
        command: cli.command,
    };
    let output = app::run(&request).context("Calculation failed")?;
    print!("{output}");

    Ok(())
}
