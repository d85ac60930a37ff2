//! Development-time tracing for debugging the generator.
//!
//! Tracing is diagnostics only (`RUST_LOG`, stderr). The messages a user is
//! meant to read (config path, next command, written files) go to stdout and
//! are printed regardless of the filter.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=vstgen::io::render=debug vstgen --root ~/vst-gen --create-effect My Effect
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
