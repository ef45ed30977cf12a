//! Rewrites JSON-Schema tool parameters into the Gemini schema dialect.

use crate::merge_enum_any_of;
use serde_json::{Map, Value};
use tracing::debug;

/// Validation keywords Gemini cannot express, in summary order.
const VALIDATION_KEYWORDS: [&str; 8] = [
    "minLength",
    "maxLength",
    "minimum",
    "maximum",
    "exclusiveMinimum",
    "exclusiveMaximum",
    "minItems",
    "maxItems",
];

/// Keywords dropped without a trace.
const UNSUPPORTED_KEYWORDS: [&str; 7] = [
    "$schema",
    "additionalProperties",
    "default",
    "uniqueItems",
    "propertyNames",
    "patternProperties",
    "unevaluatedProperties",
];

/// Type used when a `type` union is empty.
const FALLBACK_TYPE: &str = "string";

/// Normalize a tool parameter schema for the Gemini dialect.
///
/// Total: any JSON value is accepted and something is always returned.
/// Validation keywords are summarized into `description`, `const` becomes a
/// single-value `enum`, unsupported keywords are dropped, type unions
/// collapse to one type, simple enum `anyOf` unions are folded, and every
/// `type` ends up uppercase.
///
/// # Examples
///
/// ```
/// use gembridge_schema::normalize;
/// use serde_json::json;
///
/// let schema = json!({
///     "type": "object",
///     "properties": {
///         "count": {"type": ["integer", "null"], "minimum": 1}
///     },
///     "additionalProperties": false
/// });
///
/// assert_eq!(
///     normalize(&schema),
///     json!({
///         "type": "OBJECT",
///         "properties": {
///             "count": {"type": "INTEGER", "description": "Validation: minimum: 1"}
///         }
///     })
/// );
/// ```
pub fn normalize(schema: &Value) -> Value {
    let mut cleaned = clean(schema);
    uppercase_types(&mut cleaned);
    cleaned
}

fn clean(schema: &Value) -> Value {
    match schema {
        Value::Object(node) => Value::Object(clean_node(node)),
        Value::Array(items) => Value::Array(items.iter().map(clean).collect()),
        scalar => scalar.clone(),
    }
}

/// Strings render bare, whole floats without a fraction, everything else as JSON.
fn text_form(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) if n.is_f64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

fn validation_summaries(node: &Map<String, Value>) -> Vec<String> {
    VALIDATION_KEYWORDS
        .iter()
        .filter_map(|keyword| {
            node.get(*keyword)
                .map(|value| format!("{}: {}", keyword, text_form(value)))
        })
        .collect()
}

/// Prefer the first non-null member, then the first member at all.
fn collapse_type_union(candidates: &[Value]) -> Value {
    candidates
        .iter()
        .find(|candidate| candidate.as_str() != Some("null"))
        .or_else(|| candidates.first())
        .cloned()
        .unwrap_or_else(|| Value::String(FALLBACK_TYPE.to_string()))
}

/// A branch that arrived with validation keywords is not a plain enum, even
/// after those keywords were folded into its description.
fn any_branch_validated(node: &Map<String, Value>) -> bool {
    node.get("anyOf")
        .and_then(Value::as_array)
        .is_some_and(|branches| {
            branches.iter().any(|branch| {
                branch.as_object().is_some_and(|fields| {
                    VALIDATION_KEYWORDS
                        .iter()
                        .any(|keyword| fields.contains_key(*keyword))
                })
            })
        })
}

fn is_unset(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

fn clean_node(node: &Map<String, Value>) -> Map<String, Value> {
    let validations = validation_summaries(node);
    let mut const_value = None;
    let mut cleaned = Map::new();

    for (key, value) in node {
        let keyword = key.as_str();
        if keyword == "const" {
            const_value = Some(value);
            continue;
        }
        if UNSUPPORTED_KEYWORDS.contains(&keyword) || VALIDATION_KEYWORDS.contains(&keyword) {
            continue;
        }

        let cleaned_value = match (keyword, value) {
            // Property names are user data, never keywords.
            ("properties", Value::Object(properties)) => Value::Object(
                properties
                    .iter()
                    .map(|(name, property)| (name.clone(), clean(property)))
                    .collect(),
            ),
            ("type", Value::Array(candidates)) => collapse_type_union(candidates),
            ("description", description) if !validations.is_empty() => Value::String(format!(
                "{} ({})",
                text_form(description),
                validations.join(", ")
            )),
            (_, other) => clean(other),
        };
        cleaned.insert(key.clone(), cleaned_value);
    }

    // Overwrites any enum already present.
    if let Some(constant) = const_value {
        cleaned.insert("enum".to_string(), Value::Array(vec![constant.clone()]));
    }

    if !validations.is_empty() && !cleaned.contains_key("description") {
        cleaned.insert(
            "description".to_string(),
            Value::String(format!("Validation: {}", validations.join(", "))),
        );
    }

    if let Some(Value::Array(branches)) = cleaned.get("anyOf") {
        let branch_count = branches.len();
        match merge_enum_any_of(branches).filter(|_| !any_branch_validated(node)) {
            Some(union) => {
                debug!(
                    branches = branch_count,
                    values = union.values.len(),
                    "Folded anyOf enum union"
                );
                cleaned.shift_remove("anyOf");
                if let Some(schema_type) = union.schema_type {
                    if is_unset(cleaned.get("type")) {
                        cleaned.insert("type".to_string(), Value::String(schema_type));
                    }
                }
                if matches!(cleaned.get("enum"), None | Some(Value::Null)) {
                    cleaned.insert("enum".to_string(), Value::Array(union.values));
                }
            }
            None => debug!(branches = branch_count, "Left anyOf in place"),
        }
    }

    cleaned
}

/// Uppercase every `type` token in the tree.
fn uppercase_types(schema: &mut Value) {
    match schema {
        Value::Object(node) => {
            for (key, value) in node.iter_mut() {
                match (key.as_str(), value) {
                    ("type", Value::String(token)) => *token = token.to_uppercase(),
                    ("type", Value::Array(tokens)) => {
                        for token in tokens.iter_mut() {
                            if let Value::String(token) = token {
                                *token = token.to_uppercase();
                            }
                        }
                    }
                    ("type", _) => {}
                    ("properties", Value::Object(properties)) => {
                        properties.values_mut().for_each(uppercase_types)
                    }
                    (_, other) => uppercase_types(other),
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(uppercase_types),
        _ => {}
    }
}
