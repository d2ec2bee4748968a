// src/logging.rs
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LoggingOptions;

/// Default filter for the given verbosity flags.
pub fn default_directive(options: &LoggingOptions) -> &'static str {
    if options.quiet {
        return "error";
    }
    match options.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr subscriber. `RUST_LOG`, when set, wins over the flags.
///
/// Records emitted through the `log` facade by the library crates are
/// forwarded as well.
pub fn init(options: &LoggingOptions) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(options)));
    // Ignore the error when a subscriber is already installed (tests).
    let _ = fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).try_init();
}
