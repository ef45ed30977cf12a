//! Model resolution error types.

use derive_more::{Display, Error};

/// Reasons a requested model name could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum ModelErrorKind {
    /// The request named no model at all.
    #[display("Model name is empty")]
    Empty,
    /// The upstream listing does not contain the requested model.
    #[display("Model not recognized by upstream: {}", _0)]
    Unknown(String),
}

/// Model resolution error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Model Error: {} at line {} in {}", kind, line, file)]
pub struct ModelError {
    /// The specific error kind.
    pub kind: ModelErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// File where error occurred.
    pub file: &'static str,
}

impl ModelError {
    /// Creates a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ModelErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ModelErrorKind {
        &self.kind
    }
}
