//! Tracing subscriber setup shared by the binaries.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count.
pub fn filter_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a `fmt` subscriber. `RUST_LOG` takes precedence over `verbosity`.
///
/// Safe to call more than once; later calls are ignored.
pub fn setup_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
