//! Claude to Gemini tool-calling bridge.
//!
//! Client applications speak the Claude tool-calling dialect; the gateway
//! forwards to a Gemini-style upstream. This crate ties the pieces
//! together:
//!
//! 1. **Schema** - tool parameter schemas rewritten for Gemini ([`normalize`])
//! 2. **Content** - inline images split out of tool results ([`sanitize`])
//! 3. **Models** - upstream model ids cached for name resolution ([`ModelRegistry`])
//!
//! [`Bridge`] owns the configuration and model registry for a gateway
//! process.
//!
//! # Example
//!
//! ```
//! use gembridge::{Bridge, BridgeConfig};
//! use serde_json::json;
//!
//! let bridge = Bridge::new(BridgeConfig::default());
//! bridge.ingest_model_listing(Some(&json!({"models/Gemini-2.5-Pro": {}})));
//! assert_eq!(bridge.resolve_model("gemini-2.5-pro").unwrap(), "Gemini-2.5-Pro");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bridge;
mod observability;
mod settings;

pub use bridge::Bridge;
pub use observability::init_observability;
pub use settings::{
    BridgeConfig, BridgeConfigBuilder, ENV_PREFIX, ModelResolution, ObservabilityConfig,
    ObservabilityConfigBuilder,
};

pub use gembridge_content::{
    ContentBlock, InlineImage, InlinePart, SanitizedToolResult, ToolResult, estimate_base64_bytes,
    sanitize,
};
pub use gembridge_error::{
    BridgeError, BridgeErrorKind, BridgeResult, ConfigError, ModelError, ModelErrorKind,
};
pub use gembridge_models::{ModelRegistry, normalize_model_id};
pub use gembridge_schema::{
    EnumUnion, GeminiFunctionDeclaration, ToolSchema, ToolSchemaConverter, function_declarations,
    merge_enum_any_of, normalize,
};
