//! Tracing setup for embedders
//!
//! The core only emits through `tracing`; hosts that want the diagnostics on
//! stderr can call this once at startup. Safe to call more than once.

use tracing_subscriber::EnvFilter;

/// Initialize a stderr tracing subscriber honoring `RUST_LOG`
pub fn init(verbose: bool) {
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .try_init();
}
