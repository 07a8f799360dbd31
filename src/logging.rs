//! Diagnostic logging setup
//!
//! Logs go to stderr so stdout stays clean for CSV and listings.

use tracing_subscriber::EnvFilter;

/// Environment variable holding tracing filter directives
pub const LOG_ENV: &str = "EXTALLY_LOG";

fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("extally=debug");
    }
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
