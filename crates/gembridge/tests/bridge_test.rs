//! Tests for the Bridge translation context.

use gembridge::{
    Bridge, BridgeConfig, BridgeErrorKind, ModelErrorKind, ModelRegistry, ModelResolution,
};
use serde_json::json;
use std::sync::Arc;

fn bridge_with(policy: ModelResolution) -> Bridge {
    let config = BridgeConfig::builder()
        .model_resolution(policy)
        .build()
        .unwrap();
    Bridge::new(config)
}

#[test]
fn test_canonicalize_uses_listing_spelling() {
    let bridge = bridge_with(ModelResolution::Canonicalize);
    bridge.ingest_model_listing(Some(&json!([{"id": "models/Gemini-3-Pro"}])));

    assert_eq!(bridge.resolve_model(" GEMINI-3-PRO ").unwrap(), "Gemini-3-Pro");
    assert_eq!(bridge.resolve_model("claude-opus").unwrap(), "claude-opus");
}

#[test]
fn test_passthrough_ignores_registry() {
    let bridge = bridge_with(ModelResolution::Passthrough);
    bridge.ingest_model_listing(Some(&json!({"Gemini-3-Pro": {}})));

    assert_eq!(bridge.resolve_model("gemini-3-pro").unwrap(), "gemini-3-pro");
}

#[test]
fn test_strict_rejects_unlisted_model() {
    let bridge = bridge_with(ModelResolution::Strict);

    // Nothing listed yet: pass through.
    assert_eq!(bridge.resolve_model("gemini-x").unwrap(), "gemini-x");

    bridge.ingest_model_listing(Some(&json!({"gemini-3-pro": {}})));
    assert_eq!(bridge.resolve_model("Gemini-3-Pro").unwrap(), "gemini-3-pro");

    let err = bridge.resolve_model("models/gemini-x").unwrap_err();
    match err.kind() {
        BridgeErrorKind::Model(e) => {
            assert_eq!(e.kind, ModelErrorKind::Unknown("gemini-x".to_string()))
        }
        other => panic!("unexpected error kind: {}", other),
    }
}

#[test]
fn test_empty_model_name_is_rejected() {
    for policy in [
        ModelResolution::Passthrough,
        ModelResolution::Canonicalize,
        ModelResolution::Strict,
    ] {
        let err = bridge_with(policy).resolve_model("  models/ ").unwrap_err();
        assert!(
            matches!(err.kind(), BridgeErrorKind::Model(e) if e.kind == ModelErrorKind::Empty),
            "policy {} accepted an empty name",
            policy
        );
    }
}

#[test]
fn test_clones_share_registry() {
    let registry = Arc::new(ModelRegistry::new());
    let bridge = Bridge::with_registry(BridgeConfig::default(), Arc::clone(&registry));
    let clone = bridge.clone();

    clone.ingest_model_listing(Some(&json!(["gemini-2.5-flash"])));
    assert_eq!(bridge.models().count(), 1);
    assert_eq!(registry.resolve("GEMINI-2.5-FLASH"), Some("gemini-2.5-flash".to_string()));
}

#[test]
fn test_translate_tools_and_results() {
    let bridge = Bridge::new(BridgeConfig::default());

    let tools = bridge.translate_tools(&[json!({
        "name": "render",
        "description": "Render a chart",
        "input_schema": {
            "type": "object",
            "properties": {
                "kind": {"anyOf": [{"const": "bar"}, {"const": "line"}]},
                "width": {"type": "integer", "minimum": 100, "default": 640}
            }
        }
    })]);
    let parameters = &tools[0]["functionDeclarations"][0]["parameters"];
    assert_eq!(parameters["properties"]["width"], json!({
        "type": "INTEGER",
        "description": "Validation: minimum: 100"
    }));
    // `const` branches become single-value enums and then fold.
    assert_eq!(parameters["properties"]["kind"], json!({"enum": ["bar", "line"]}));

    let parts = bridge
        .translate_tool_result(
            "render",
            &json!({
                "type": "tool_result",
                "tool_use_id": "toolu_9",
                "content": [{"type": "image", "source": {"data": "QUJD", "media_type": "image/svg+xml"}}]
            }),
        )
        .unwrap();
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[1]["inlineData"]["mimeType"], json!("image/svg+xml"));

    assert!(bridge.translate_tool_result("render", &json!({"type": "text"})).is_none());
}
