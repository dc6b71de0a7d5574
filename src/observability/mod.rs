//! Logging setup for the `codesniff` binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is the
//! binary's job and happens once, before any command runs.

use tracing_subscriber::EnvFilter;

/// Default filter for a given `-v` count, used when `RUST_LOG` is unset.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "codesniff=warn",
        1 => "codesniff=info",
        2 => "codesniff=debug",
        _ => "codesniff=trace",
    }
}

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `verbosity`. Calling this twice is
/// harmless; the second subscriber is simply not installed.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
