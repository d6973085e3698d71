//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Picks the filter directive: `RUST_LOG` wins, then `--verbose`, then the
/// configured default.
pub fn build_filter(configured: &str, verbose: bool) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_new(configured).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global subscriber, writing to stderr so stdout stays clean
/// for command output.
///
/// Returns `false` when a subscriber was already installed; the existing one
/// is kept.
pub fn init_logging(configured: &str, verbose: bool) -> bool {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(build_filter(configured, verbose))
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();
    if !installed {
        tracing::debug!("Tracing subscriber already installed");
    }
    installed
}
