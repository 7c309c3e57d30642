//! Tracing setup for the CLI. Logs go to stderr so stdout stays clean for
//! board output.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Pick the log level from the CLI flags
pub fn log_level(verbose: bool, debug: bool, quiet: bool) -> Level {
    if quiet {
        Level::ERROR
    } else if verbose {
        Level::TRACE
    } else if debug {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the flags when set.
pub fn configure_logging(verbose: bool, debug: bool, quiet: bool) {
    let level = log_level(verbose, debug, quiet);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let _ = registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
