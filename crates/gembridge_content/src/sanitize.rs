//! Splitting inline images out of tool-result content.

use crate::{ContentBlock, InlineImage};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::borrow::Cow;
use tracing::{debug, instrument};

/// Binary payload carried as a Gemini `inlineData` part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct InlinePart {
    /// Media type of the payload
    mime_type: String,
    /// Base64-encoded payload
    data: String,
}

impl InlinePart {
    /// Create a new inline part.
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Gemini part representation: `{"inlineData": {"mimeType", "data"}}`.
    pub fn to_part(&self) -> Value {
        json!({
            "inlineData": {
                "mimeType": self.mime_type,
                "data": self.data,
            }
        })
    }
}

impl From<InlineImage<'_>> for InlinePart {
    fn from(image: InlineImage<'_>) -> Self {
        Self::new(image.mime_type, image.data)
    }
}

/// Outcome of [`sanitize`].
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct SanitizedToolResult<'a> {
    /// Text rendering of the content, one segment per line
    content_text: String,
    /// Content with image payloads replaced by placeholders; borrowed when
    /// nothing was replaced
    sanitized_content: Cow<'a, Value>,
    /// Extracted payloads in encounter order
    inline_parts: Vec<InlinePart>,
}

impl<'a> SanitizedToolResult<'a> {
    /// Split into `(content_text, sanitized_content, inline_parts)`.
    pub fn into_parts(self) -> (String, Cow<'a, Value>, Vec<InlinePart>) {
        (self.content_text, self.sanitized_content, self.inline_parts)
    }
}

/// Textual hint for a block that is kept as-is.
fn block_text(block: &Value) -> String {
    match block {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Text for content that is not a block sequence. Falsy scalars render empty.
fn loose_content_text(content: &Value) -> String {
    match content {
        Value::String(s) => s.clone(),
        Value::Null | Value::Bool(false) => String::new(),
        Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
        other => other.to_string(),
    }
}

fn replace_payload(block: &Value, placeholder: &str) -> Value {
    let mut rewritten = block.clone();
    if let Some(data) = rewritten
        .get_mut("source")
        .and_then(|source| source.get_mut("data"))
    {
        *data = Value::String(placeholder.to_string());
    }
    rewritten
}

/// Extract inline image payloads from tool-result content.
///
/// Total: every input produces a result. Text blocks contribute their text,
/// image blocks with a base64 payload are moved into
/// [`SanitizedToolResult::inline_parts`] and replaced by a placeholder, and
/// anything else is kept while its JSON form joins the text. Non-sequence
/// content is treated as a single text block.
///
/// # Examples
///
/// ```
/// use gembridge_content::sanitize;
/// use serde_json::json;
///
/// let content = json!([{"type": "image", "source": {"data": "QQ==", "media_type": "image/png"}}]);
/// let result = sanitize(&content);
///
/// assert_eq!(result.inline_parts().len(), 1);
/// assert_eq!(
///     result.content_text(),
///     "[inline image omitted from JSON (image/png, ~1 bytes)]"
/// );
/// ```
#[instrument(skip_all)]
pub fn sanitize(content: &Value) -> SanitizedToolResult<'_> {
    let Value::Array(blocks) = content else {
        return SanitizedToolResult {
            content_text: loose_content_text(content),
            sanitized_content: Cow::Borrowed(content),
            inline_parts: Vec::new(),
        };
    };

    let mut inline_parts = Vec::new();
    let mut segments = Vec::with_capacity(blocks.len());
    let mut sanitized: Vec<Cow<'_, Value>> = Vec::with_capacity(blocks.len());

    for block in blocks {
        match ContentBlock::classify(block) {
            ContentBlock::Text(text) => {
                if !text.is_empty() {
                    segments.push(text.to_string());
                }
                sanitized.push(Cow::Borrowed(block));
            }
            ContentBlock::Image(image) => {
                let placeholder = image.placeholder();
                debug!(mime_type = image.mime_type, "Extracted inline image from tool result");
                sanitized.push(Cow::Owned(replace_payload(block, &placeholder)));
                segments.push(placeholder);
                inline_parts.push(InlinePart::from(image));
            }
            ContentBlock::Other(other) => {
                segments.push(block_text(other));
                sanitized.push(Cow::Borrowed(block));
            }
        }
    }

    let sanitized_content = if inline_parts.is_empty() {
        Cow::Borrowed(content)
    } else {
        Cow::Owned(Value::Array(
            sanitized.into_iter().map(Cow::into_owned).collect(),
        ))
    };

    SanitizedToolResult {
        content_text: segments.join("\n"),
        sanitized_content,
        inline_parts,
    }
}
