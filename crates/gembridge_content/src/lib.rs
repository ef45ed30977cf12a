//! Multimodal content handling for tool results.
//!
//! Claude tool results may embed base64 images inside JSON content blocks.
//! Gemini wants those payloads as separate `inlineData` parts, so
//! [`sanitize`] pulls them out, leaves a placeholder behind, and renders a
//! text fallback of the whole result.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod block;
mod sanitize;
mod tool_result;

pub use block::{ContentBlock, DEFAULT_IMAGE_MIME_TYPE, InlineImage, estimate_base64_bytes};
pub use sanitize::{InlinePart, SanitizedToolResult, sanitize};
pub use tool_result::ToolResult;
