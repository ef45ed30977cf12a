//! Tests for tool-result sanitization.

use gembridge_content::{InlinePart, ToolResult, estimate_base64_bytes, sanitize};
use serde_json::{Value, json};
use std::borrow::Cow;

#[test]
fn test_estimate_bytes() {
    assert_eq!(estimate_base64_bytes("QQ=="), 1);
    assert_eq!(estimate_base64_bytes("QUJD"), 3);
    assert_eq!(estimate_base64_bytes(""), 0);
}

#[test]
fn test_single_image_is_extracted() {
    let content = json!([{"type": "image", "source": {"data": "QQ==", "media_type": "image/png"}}]);
    let result = sanitize(&content);

    assert_eq!(result.inline_parts(), &vec![InlinePart::new("image/png", "QQ==")]);

    let placeholder = result.sanitized_content()[0]["source"]["data"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(placeholder.contains("image/png"));
    assert!(placeholder.contains("~1 bytes"));
    assert_eq!(
        result.sanitized_content()[0]["source"]["media_type"],
        json!("image/png")
    );
    assert!(result.content_text().contains(&placeholder));
}

#[test]
fn test_mixed_blocks_keep_order() {
    let content = json!([
        {"type": "text", "text": "Screenshot follows"},
        {"type": "image", "source": {"type": "base64", "mediaType": "image/jpeg", "data": "QUJD"}},
        {"type": "text", "text": ""},
        {"type": "document", "title": "notes"},
        {"type": "image", "source": {"data": "QUI="}},
        "loose string"
    ]);
    let result = sanitize(&content);

    assert_eq!(
        result.inline_parts(),
        &vec![
            InlinePart::new("image/jpeg", "QUJD"),
            InlinePart::new("image/png", "QUI="),
        ]
    );
    assert_eq!(
        result.content_text(),
        "Screenshot follows\n\
         [inline image omitted from JSON (image/jpeg, ~3 bytes)]\n\
         {\"type\":\"document\",\"title\":\"notes\"}\n\
         [inline image omitted from JSON (image/png, ~2 bytes)]\n\
         loose string"
    );

    let sanitized = result.sanitized_content().as_array().unwrap();
    assert_eq!(sanitized.len(), 6);
    assert_eq!(sanitized[0], content[0]);
    assert_eq!(sanitized[1]["source"]["type"], json!("base64"));
    assert_eq!(sanitized[2], content[2]);
    assert_eq!(sanitized[3], content[3]);
    assert_eq!(sanitized[5], content[5]);
    // Input is untouched.
    assert_eq!(content[1]["source"]["data"], json!("QUJD"));
}

#[test]
fn test_no_images_returns_input_borrowed() {
    let content = json!([
        {"type": "text", "text": "a"},
        {"type": "image", "source": {"type": "url", "url": "https://example.com/x.png"}}
    ]);
    let result = sanitize(&content);

    assert!(matches!(result.sanitized_content(), Cow::Borrowed(_)));
    assert!(result.inline_parts().is_empty());
    assert_eq!(
        result.content_text(),
        "a\n{\"type\":\"image\",\"source\":{\"type\":\"url\",\"url\":\"https://example.com/x.png\"}}"
    );
}

#[test]
fn test_non_sequence_content() {
    let text = json!("plain result");
    let result = sanitize(&text);
    assert_eq!(result.content_text(), "plain result");
    assert!(matches!(result.sanitized_content(), Cow::Borrowed(v) if *v == &text));

    let object = json!({"rows": 3});
    assert_eq!(sanitize(&object).content_text(), "{\"rows\":3}");
    assert_eq!(sanitize(&Value::Null).content_text(), "");
    assert!(sanitize(&Value::Null).inline_parts().is_empty());
}

#[test]
fn test_empty_sequence() {
    let content = json!([]);
    let result = sanitize(&content);
    assert_eq!(result.content_text(), "");
    assert!(matches!(result.sanitized_content(), Cow::Borrowed(_)));
}

#[test]
fn test_tool_result_parts() {
    let block = json!({
        "type": "tool_result",
        "tool_use_id": "toolu_01",
        "content": [
            {"type": "text", "text": "captured"},
            {"type": "image", "source": {"data": "QQ==", "media_type": "image/png"}}
        ]
    });
    let result = ToolResult::from_block(&block).unwrap();
    let parts = result.to_gemini_parts("take_screenshot");

    assert_eq!(parts.len(), 2);
    assert_eq!(
        parts[0],
        json!({
            "functionResponse": {
                "id": "toolu_01",
                "name": "take_screenshot",
                "response": {
                    "content": "captured\n[inline image omitted from JSON (image/png, ~1 bytes)]"
                }
            }
        })
    );
    assert_eq!(
        parts[1],
        json!({"inlineData": {"mimeType": "image/png", "data": "QQ=="}})
    );
}

#[test]
fn test_tool_result_error_parts() {
    let result = ToolResult::new("toolu_02", json!("permission denied"), true);
    let parts = result.to_gemini_parts("read_file");
    assert_eq!(parts.len(), 1);
    assert_eq!(
        parts[0]["functionResponse"]["response"],
        json!({"error": "permission denied"})
    );
}

#[test]
fn test_tool_result_requires_id() {
    assert!(ToolResult::from_block(&json!({"type": "tool_result", "content": "x"})).is_none());
}
