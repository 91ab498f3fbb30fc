//! Log output for the `ro-tax` binary.
//!
//! Events go to stderr so stdout carries only the command output. Each line
//! carries a local timestamp, the level and the `file:line` of the event.
//! `--log-file` adds a second, uncoloured copy appended to a file.

use std::{
    fs::File,
    io::{self, IsTerminal},
    path::Path,
    sync::Mutex,
};

use anyhow::{Context, Result};
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Filter used when `RUST_LOG` is not set.
///
/// `verbosity` counts `-v` flags: 0 is info, 1 is debug, 2 or more is trace.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "info,ro_tax_core=debug,ro_tax_cli=debug",
        _ => "trace",
    }
}

fn make_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)))
}

fn open_log_file(path: &Path) -> Result<File> {
    File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file '{}'", path.display()))
}

/// Initializes logging. Call once at startup.
///
/// The level comes from `RUST_LOG` when set, otherwise from `verbosity`.
/// Stderr output is coloured only when stderr is a terminal.
pub fn init_logging(
    verbosity: u8,
    log_file: Option<&Path>,
) -> Result<()> {
    let file_layer = log_file
        .map(open_log_file)
        .transpose()?
        .map(|file| {
            fmt::layer()
                .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
        });

    let stderr_layer = fmt::layer()
        .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(make_filter(verbosity))
        .with(stderr_layer)
        .with(file_layer)
        .try_init();
    Ok(())
}
