//! Logging setup for hosts embedding the imitation engine

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber.
///
/// Hosts pass the loaded `Config::log_level` as `level`.
/// `RUST_LOG` takes precedence over `level`. Returns `false` when a global
/// subscriber was already installed, in which case nothing changes.
pub fn init(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
