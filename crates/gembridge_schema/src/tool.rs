//! Claude tool definitions to Gemini function declarations.

use crate::normalize;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, instrument};

/// Provider-neutral tool definition.
#[derive(Debug, Clone)]
pub struct ToolSchema {
    /// Tool name
    pub name: String,
    /// Tool description
    pub description: String,
    /// Input schema (JSON Schema)
    pub input_schema: Value,
}

impl ToolSchema {
    /// Create a new tool schema.
    pub fn new(name: impl Into<String>, description: impl Into<String>, input_schema: Value) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }

    /// Read a Claude tool definition (`{name, description, input_schema}`).
    ///
    /// Returns `None` when the tool has no usable name. A missing input
    /// schema becomes an empty object schema.
    pub fn from_claude(tool: &Value) -> Option<Self> {
        let name = tool
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())?;
        let description = tool
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let input_schema = tool
            .get("input_schema")
            .filter(|schema| !schema.is_null())
            .cloned()
            .unwrap_or_else(|| json!({"type": "object", "properties": {}}));
        Some(Self::new(name, description, input_schema))
    }
}

/// Trait for converting tool schemas to provider-specific formats.
pub trait ToolSchemaConverter {
    /// The provider-specific tool format.
    type Output;

    /// Convert a tool schema to the provider format.
    fn convert(schema: &ToolSchema) -> Self::Output;
}

/// Gemini function declaration format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeminiFunctionDeclaration {
    /// Function name
    pub name: String,
    /// Function description
    pub description: String,
    /// Parameters schema, already in the Gemini dialect
    pub parameters: Value,
}

impl GeminiFunctionDeclaration {
    /// Wire representation.
    pub fn to_value(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "parameters": self.parameters,
        })
    }
}

impl ToolSchemaConverter for GeminiFunctionDeclaration {
    type Output = Self;

    fn convert(schema: &ToolSchema) -> Self::Output {
        Self {
            name: schema.name.clone(),
            description: schema.description.clone(),
            parameters: normalize(&schema.input_schema),
        }
    }
}

/// Build the Gemini `tools` array from Claude tool definitions.
///
/// All declarations go into a single `functionDeclarations` group. Tools
/// without a name are skipped. No tools yields an empty array.
#[instrument(skip_all, fields(tools = tools.len()))]
pub fn function_declarations(tools: &[Value]) -> Value {
    let declarations: Vec<Value> = tools
        .iter()
        .filter_map(|tool| {
            let schema = ToolSchema::from_claude(tool);
            if schema.is_none() {
                debug!("Skipping tool definition without a name");
            }
            schema
        })
        .map(|schema| GeminiFunctionDeclaration::convert(&schema).to_value())
        .collect();

    if declarations.is_empty() {
        return Value::Array(Vec::new());
    }

    json!([{ "functionDeclarations": declarations }])
}
