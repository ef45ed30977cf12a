//! Tracing subscriber setup.

use crate::ObservabilityConfig;
use gembridge_error::{BridgeResult, ConfigError};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured filter. Fails if the filter does not
/// parse or a global subscriber is already installed.
pub fn init_observability(config: &ObservabilityConfig) -> BridgeResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.filter()))
        .map_err(|e| {
            ConfigError::new(format!("Invalid log filter '{}': {}", config.filter(), e))
        })?;

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if *config.json() {
        registry.with(fmt::layer().json()).try_init()
    } else {
        registry.with(fmt::layer()).try_init()
    };
    installed.map_err(|e| ConfigError::new(format!("Failed to install tracing subscriber: {}", e)))?;

    info!(json = *config.json(), "Observability initialized");
    Ok(())
}
