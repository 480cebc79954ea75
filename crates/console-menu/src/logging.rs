//! Tracing subscriber setup for the console tools.

use std::io;

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs a global `fmt` subscriber writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` is used. Output
/// goes to stderr so diagnostics never interleave with the menu on stdout.
/// A second initialisation is logged and ignored.
pub fn init_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}
