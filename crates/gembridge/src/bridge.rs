//! The bridge context handed to request handlers.

use crate::{BridgeConfig, ModelResolution};
use derive_getters::Getters;
use gembridge_content::ToolResult;
use gembridge_error::{BridgeResult, ModelError, ModelErrorKind};
use gembridge_models::{ModelRegistry, normalize_model_id};
use gembridge_schema::function_declarations;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Translation context for one gateway process.
///
/// Owns the configuration and a handle to the model registry. Clones share
/// the registry, so a listing ingested through one clone is visible to all.
#[derive(Debug, Clone, Getters)]
pub struct Bridge {
    /// Bridge configuration
    config: BridgeConfig,
    /// Upstream model ids
    models: Arc<ModelRegistry>,
}

impl Bridge {
    /// Create a bridge with a fresh, empty model registry.
    pub fn new(config: BridgeConfig) -> Self {
        Self::with_registry(config, Arc::new(ModelRegistry::new()))
    }

    /// Create a bridge around an existing registry.
    pub fn with_registry(config: BridgeConfig, models: Arc<ModelRegistry>) -> Self {
        Self { config, models }
    }

    /// Translate Claude tool definitions into the Gemini `tools` array.
    pub fn translate_tools(&self, tools: &[Value]) -> Value {
        function_declarations(tools)
    }

    /// Translate a Claude `tool_result` block into Gemini parts.
    ///
    /// `function_name` is the name of the tool the matching `tool_use`
    /// called; Claude results only carry the call id. Returns `None` when
    /// the block has no `tool_use_id`.
    pub fn translate_tool_result(&self, function_name: &str, block: &Value) -> Option<Vec<Value>> {
        ToolResult::from_block(block).map(|result| result.to_gemini_parts(function_name))
    }

    /// Feed an upstream model-listing response into the registry.
    pub fn ingest_model_listing(&self, listing: Option<&Value>) {
        self.models.update_from_listing(listing);
    }

    /// Resolve a client-requested model name according to the configured
    /// [`ModelResolution`] policy.
    #[instrument(skip(self), fields(policy = %self.config.model_resolution()))]
    pub fn resolve_model(&self, requested: &str) -> BridgeResult<String> {
        let Some(normalized) = normalize_model_id(requested) else {
            return Err(ModelError::new(ModelErrorKind::Empty).into());
        };
        let requested = requested.trim();

        match self.config.model_resolution() {
            ModelResolution::Passthrough => Ok(requested.to_string()),
            ModelResolution::Canonicalize => Ok(self
                .models
                .resolve(normalized)
                .unwrap_or_else(|| requested.to_string())),
            ModelResolution::Strict => match self.models.resolve(normalized) {
                Some(canonical) => Ok(canonical),
                None if self.models.is_empty() => {
                    debug!("No upstream listing yet, passing model through");
                    Ok(requested.to_string())
                }
                None => {
                    warn!(known = self.models.count(), "Rejecting unlisted model");
                    Err(ModelError::new(ModelErrorKind::Unknown(normalized.to_string())).into())
                }
            },
        }
    }
}
