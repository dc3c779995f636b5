//! Logging setup: `tracing` events rendered to stderr.
//!
//! Stdout is reserved for the computed version.

use crate::config::LoggingConfig;
use tracing_subscriber::filter::EnvFilter;

/// Pick the log filter for this run.
///
/// `--quiet` beats `-v`/`-vv`, which beat `RUST_LOG`, which beats the level
/// from the settings file.
pub fn env_filter(quiet: bool, verbose: u8, logging: &LoggingConfig) -> EnvFilter {
    match (quiet, verbose) {
        (true, _) => EnvFilter::new("error"),
        (false, 0) => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&logging.level)),
        (false, 1) => EnvFilter::new("debug"),
        (false, _) => EnvFilter::new("trace"),
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(filter: EnvFilter) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
