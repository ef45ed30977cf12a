use gembridge_schema::{
    GeminiFunctionDeclaration, ToolSchema, ToolSchemaConverter, function_declarations,
};
use serde_json::json;

#[test]
fn test_convert_normalizes_parameters() {
    let schema = ToolSchema::new(
        "get_weather",
        "Look up the weather",
        json!({
            "type": "object",
            "properties": {"city": {"type": "string", "minLength": 1}},
            "required": ["city"],
            "additionalProperties": false
        }),
    );

    let declaration = GeminiFunctionDeclaration::convert(&schema);
    assert_eq!(declaration.name, "get_weather");
    assert_eq!(
        declaration.parameters,
        json!({
            "type": "OBJECT",
            "properties": {"city": {"type": "STRING", "description": "Validation: minLength: 1"}},
            "required": ["city"]
        })
    );
}

#[test]
fn test_from_claude_defaults() {
    let schema = ToolSchema::from_claude(&json!({"name": " ping "})).unwrap();
    assert_eq!(schema.name, "ping");
    assert_eq!(schema.description, "");
    assert_eq!(schema.input_schema, json!({"type": "object", "properties": {}}));

    assert!(ToolSchema::from_claude(&json!({"description": "nameless"})).is_none());
    assert!(ToolSchema::from_claude(&json!({"name": ""})).is_none());
}

#[test]
fn test_function_declarations_groups_tools() {
    let tools = vec![
        json!({
            "name": "search",
            "description": "Search the web",
            "input_schema": {
                "type": "object",
                "properties": {"query": {"type": "string"}, "limit": {"type": ["integer", "null"]}}
            }
        }),
        json!({"description": "ignored"}),
        json!({"name": "noop", "input_schema": {"type": "object"}}),
    ];

    let declared = function_declarations(&tools);
    let group = declared[0]["functionDeclarations"].as_array().unwrap();
    assert_eq!(declared.as_array().unwrap().len(), 1);
    assert_eq!(group.len(), 2);
    assert_eq!(group[0]["name"], json!("search"));
    assert_eq!(
        group[0]["parameters"]["properties"]["limit"],
        json!({"type": "INTEGER"})
    );
    assert_eq!(group[1], json!({"name": "noop", "description": "", "parameters": {"type": "OBJECT"}}));
}

#[test]
fn test_function_declarations_empty() {
    assert_eq!(function_declarations(&[]), json!([]));
    assert_eq!(function_declarations(&[json!({"type": "custom"})]), json!([]));
}
