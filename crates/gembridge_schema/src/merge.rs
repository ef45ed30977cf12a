//! Folding `anyOf` unions of plain enum branches into a single enum.

use serde_json::Value;
use std::collections::HashSet;

/// Keys a branch may carry and still count as a plain enum branch.
const BRANCH_KEYS: [&str; 4] = ["type", "enum", "description", "title"];

/// Result of a successful `anyOf` fold.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumUnion {
    /// Type shared by every branch that declared one
    pub schema_type: Option<String>,
    /// Union of all branch values, first-seen order
    pub values: Vec<Value>,
}

/// Dedup key: JSON kind plus string form, so `1` and `"1"` stay distinct.
fn enum_token(value: &Value) -> (&'static str, String) {
    match value {
        Value::Null => ("null", "null".to_string()),
        Value::Bool(b) => ("boolean", b.to_string()),
        Value::Number(n) => ("number", n.to_string()),
        Value::String(s) => ("string", s.clone()),
        Value::Array(_) => ("array", value.to_string()),
        Value::Object(_) => ("object", value.to_string()),
    }
}

/// Try to fold `anyOf` branches into one `type` + `enum` pair.
///
/// Every branch must be an object with a non-empty `enum` and no keys
/// beyond `type`, `enum`, `description` and `title`. Branches that declare
/// a `type` must agree on it (case-insensitively). Returns `None` when the
/// branches do not fit; the input is never modified.
///
/// # Examples
///
/// ```
/// use gembridge_schema::merge_enum_any_of;
/// use serde_json::json;
///
/// let branches = [
///     json!({"type": "string", "enum": ["a", "b"]}),
///     json!({"type": "string", "enum": ["b", "c"]}),
/// ];
/// let union = merge_enum_any_of(&branches).unwrap();
/// assert_eq!(union.schema_type.as_deref(), Some("string"));
/// assert_eq!(union.values, vec![json!("a"), json!("b"), json!("c")]);
/// ```
pub fn merge_enum_any_of(branches: &[Value]) -> Option<EnumUnion> {
    let mut schema_type: Option<&str> = None;
    let mut values = Vec::new();
    let mut seen = HashSet::new();

    for branch in branches {
        let option = branch.as_object()?;
        let variants = option
            .get("enum")
            .and_then(Value::as_array)
            .filter(|variants| !variants.is_empty())?;

        if let Some(declared) = option.get("type") {
            let declared = declared.as_str().filter(|t| !t.is_empty())?;
            match schema_type {
                None => schema_type = Some(declared),
                Some(current) if current.eq_ignore_ascii_case(declared) => {}
                Some(_) => return None,
            }
        }

        if option.keys().any(|key| !BRANCH_KEYS.contains(&key.as_str())) {
            return None;
        }

        for value in variants {
            if seen.insert(enum_token(value)) {
                values.push(value.clone());
            }
        }
    }

    if values.is_empty() {
        return None;
    }

    Some(EnumUnion {
        schema_type: schema_type.map(str::to_string),
        values,
    })
}
