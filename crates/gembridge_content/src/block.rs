//! Content block classification.

use serde_json::Value;

/// Media type assumed when an image source names none.
pub const DEFAULT_IMAGE_MIME_TYPE: &str = "image/png";

/// Inline base64 image payload borrowed from an image block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineImage<'a> {
    /// Media type from `media_type` or `mediaType`
    pub mime_type: &'a str,
    /// Base64 payload
    pub data: &'a str,
}

impl InlineImage<'_> {
    /// Text that stands in for the payload once it has been extracted.
    pub fn placeholder(&self) -> String {
        format!(
            "[inline image omitted from JSON ({}, ~{} bytes)]",
            self.mime_type,
            estimate_base64_bytes(self.data)
        )
    }
}

/// A tool-result content block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ContentBlock<'a> {
    /// `{"type": "text", "text": ...}`. Empty when `text` is missing or not a string.
    Text(&'a str),
    /// `{"type": "image", "source": {"data": ..., "media_type": ...}}` with a payload.
    Image(InlineImage<'a>),
    /// Anything else, including image blocks without a usable payload.
    Other(&'a Value),
}

impl<'a> ContentBlock<'a> {
    /// Classify a raw JSON block. Never fails; unknown shapes are `Other`.
    pub fn classify(block: &'a Value) -> Self {
        let Some(fields) = block.as_object() else {
            return Self::Other(block);
        };

        match fields.get("type").and_then(Value::as_str) {
            Some("text") => Self::Text(fields.get("text").and_then(Value::as_str).unwrap_or_default()),
            Some("image") => fields
                .get("source")
                .and_then(Value::as_object)
                .and_then(|source| {
                    let data = source
                        .get("data")
                        .and_then(Value::as_str)
                        .filter(|data| !data.is_empty())?;
                    let mime_type = ["media_type", "mediaType"]
                        .iter()
                        .filter_map(|field| source.get(*field).and_then(Value::as_str))
                        .find(|mime_type| !mime_type.is_empty())
                        .unwrap_or(DEFAULT_IMAGE_MIME_TYPE);
                    Some(Self::Image(InlineImage { mime_type, data }))
                })
                .unwrap_or(Self::Other(block)),
            _ => Self::Other(block),
        }
    }
}

/// Approximate decoded size of a base64 string without decoding it.
///
/// `floor(len * 3 / 4)` minus one per trailing `=` (at most two).
///
/// # Examples
///
/// ```
/// use gembridge_content::estimate_base64_bytes;
///
/// assert_eq!(estimate_base64_bytes("QQ=="), 1);
/// assert_eq!(estimate_base64_bytes("QUJD"), 3);
/// assert_eq!(estimate_base64_bytes(" "), 0);
/// ```
pub fn estimate_base64_bytes(encoded: &str) -> usize {
    let encoded = encoded.trim();
    if encoded.is_empty() {
        return 0;
    }
    let padding = if encoded.ends_with("==") {
        2
    } else if encoded.ends_with('=') {
        1
    } else {
        0
    };
    (encoded.len() * 3 / 4).saturating_sub(padding)
}
