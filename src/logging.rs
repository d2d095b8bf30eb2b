//! Logging setup for the runshield binary.
//!
//! The library logs through `tracing` macros; this module installs the
//! subscriber. `RUST_LOG` wins when set, otherwise the level follows the
//! number of `-v` flags:
//!
//! ```bash
//! RUST_LOG=runshield=trace runshield -l data.1
//! runshield -vv data.1        # debug
//! ```
//!
//! Logs go to stderr so listings on stdout stay clean.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default filter for a given `-v` count.
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "runshield=warn",
        1 => "runshield=info",
        2 => "runshield=debug",
        _ => "runshield=trace",
    }
}

/// Install the global subscriber.
///
/// Call this once at startup (in main.rs).
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact(),
    );

    // Ignore the error if a subscriber is already set
    let _ = tracing::subscriber::set_global_default(subscriber);
}
