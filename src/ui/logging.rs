//! Diagnostic logging on stderr.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
/// `RUST_LOG` wins; otherwise 0 → warn, 1 → info, 2+ → debug.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rbiccame={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
