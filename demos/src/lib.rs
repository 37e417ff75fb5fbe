//! Shared setup for the demo binaries.

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber honouring `RUST_LOG`, defaulting to `info`
pub fn setup_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber installed earlier in the process stays in place.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
