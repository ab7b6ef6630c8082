//! Tracing setup for the CLI
//!
//! Library crates report per-repo and cleanup failures through
//! `tracing::warn!`, so warnings must reach the terminal by default.
//! `RUST_LOG` overrides everything; `--debug` raises the default level.

use tracing_subscriber::EnvFilter;

pub fn init(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
