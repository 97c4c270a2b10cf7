use crate::error::{DispatchError, Result};
use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `default_directive`. Fails if a subscriber
/// is already installed.
pub fn init_tracing(default_directive: &str) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| {
            DispatchError::ConfigError(format!("failed to install tracing subscriber: {}", e))
        })
}
