//! Initialization that needs to be done on startup

use tracing_subscriber::EnvFilter;

/// Installs the diagnostics subscriber. Safe to call more than once.
///
/// Diagnostics go to stderr so that they never mix with the per-file status lines on stdout.
/// Verbosity follows `RUST_LOG` and defaults to warnings only.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // fails only if a subscriber is already installed, which is fine
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
