//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV, VERBOSE_LOG_FILTER};

/// Install a compact stderr subscriber.
///
/// `TODO_LOG` wins when set; otherwise `--verbose` selects debug output.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        VERBOSE_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
