//! Tracing subscriber setup.
//!
//! Library crates log through the `log` facade; the subscriber's
//! `tracing-log` bridge forwards those records alongside native
//! `tracing` events.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count, or `None` to defer to the
/// environment and config file.
pub fn verbosity_filter(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Install the global subscriber, writing to stderr.
///
/// `-v` flags win over `RUST_LOG`, which wins over `default_level`.
/// Calling this more than once is harmless.
pub fn init_logging(verbose: u8, default_level: &str) {
    let filter = match verbosity_filter(verbose) {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
