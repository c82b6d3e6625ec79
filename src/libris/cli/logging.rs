//! Diagnostics for the CLI.
//!
//! Library code emits `tracing` events; this installs the subscriber that
//! writes them to stderr so stdout only ever carries rendered views. The
//! filter comes from [`LOG_ENV`] when set, otherwise from the verbosity flag.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "LIBRIS_LOG";

const DEFAULT_FILTER: &str = "libris=error";
const VERBOSE_FILTER: &str = "libris=debug";

fn build_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            VERBOSE_FILTER
        } else {
            DEFAULT_FILTER
        })
    })
}

/// Installs the global subscriber. A failure to install is reported but never
/// stops the command from running.
pub fn init(verbose: bool) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .without_time()
        .try_init();

    if let Err(e) = result {
        eprintln!("Warning: could not initialize logging: {}", e);
    }
}
