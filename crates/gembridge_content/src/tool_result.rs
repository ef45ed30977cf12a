//! Claude `tool_result` blocks to Gemini response parts.

use crate::{InlinePart, sanitize};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, instrument};

/// A Claude `tool_result` content block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct ToolResult {
    /// Id of the `tool_use` block this answers
    tool_use_id: String,
    /// String or block sequence returned by the tool
    #[serde(default)]
    content: Value,
    /// Whether the tool reported a failure
    #[serde(default)]
    is_error: bool,
}

impl ToolResult {
    /// Create a new tool result.
    pub fn new(tool_use_id: impl Into<String>, content: Value, is_error: bool) -> Self {
        Self {
            tool_use_id: tool_use_id.into(),
            content,
            is_error,
        }
    }

    /// Read a tool result from a raw block. `None` if it lacks a `tool_use_id`.
    pub fn from_block(block: &Value) -> Option<Self> {
        let tool_use_id = block.get("tool_use_id").and_then(Value::as_str)?;
        Some(Self::new(
            tool_use_id,
            block.get("content").cloned().unwrap_or(Value::Null),
            block
                .get("is_error")
                .and_then(Value::as_bool)
                .unwrap_or_default(),
        ))
    }

    /// Gemini parts answering the call to `function_name`.
    ///
    /// The first part is a `functionResponse` holding the sanitized text
    /// (under `error` when the tool failed, `content` otherwise). One
    /// `inlineData` part per extracted image follows, in order.
    #[instrument(skip(self), fields(tool_use_id = %self.tool_use_id))]
    pub fn to_gemini_parts(&self, function_name: &str) -> Vec<Value> {
        let (content_text, _, inline_parts) = sanitize(&self.content).into_parts();
        let response = if self.is_error {
            json!({ "error": content_text })
        } else {
            json!({ "content": content_text })
        };

        let mut parts = Vec::with_capacity(1 + inline_parts.len());
        parts.push(json!({
            "functionResponse": {
                "id": self.tool_use_id,
                "name": function_name,
                "response": response,
            }
        }));
        parts.extend(inline_parts.iter().map(InlinePart::to_part));
        debug!(parts = parts.len(), "Built Gemini parts for tool result");
        parts
    }
}
