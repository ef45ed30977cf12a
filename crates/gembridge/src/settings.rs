//! Bridge configuration.

use derive_getters::Getters;
use gembridge_error::{BridgeResult, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Environment variable prefix; nested keys are separated by `__`.
pub const ENV_PREFIX: &str = "GEMBRIDGE";

/// How requested model names are checked against the upstream listing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ModelResolution {
    /// Forward the requested name unchanged.
    Passthrough,
    /// Replace the name with its canonical spelling when known.
    #[default]
    Canonicalize,
    /// Reject names the upstream has not listed.
    Strict,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    filter: String,
    /// Emit JSON lines instead of human-readable output
    json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: false,
        }
    }
}

impl ObservabilityConfig {
    /// Creates a builder for `ObservabilityConfig`.
    pub fn builder() -> ObservabilityConfigBuilder {
        ObservabilityConfigBuilder::default()
    }
}

/// Top-level bridge configuration.
///
/// # Example TOML
///
/// ```toml
/// model_resolution = "strict"
///
/// [observability]
/// filter = "gembridge=debug,info"
/// json = true
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct BridgeConfig {
    /// Model name resolution policy
    model_resolution: ModelResolution,
    /// Logging setup
    observability: ObservabilityConfig,
}

impl BridgeConfig {
    /// Creates a builder for `BridgeConfig`.
    pub fn builder() -> BridgeConfigBuilder {
        BridgeConfigBuilder::default()
    }

    /// Load configuration from an optional TOML file, overridden by
    /// `GEMBRIDGE__*` environment variables (for example
    /// `GEMBRIDGE__MODEL_RESOLUTION=strict` or
    /// `GEMBRIDGE__OBSERVABILITY__JSON=true`).
    #[instrument]
    pub fn load(path: Option<&Path>) -> BridgeResult<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            debug!(path = %path.display(), "Adding config file source");
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let loaded = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to load config: {}", e)))?;

        let config: Self = loaded
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        debug!(model_resolution = %config.model_resolution, "Loaded bridge config");
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> BridgeResult<Self> {
        let config = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }
}
