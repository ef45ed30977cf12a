//! Error types for the gembridge workspace.
//!
//! The translation functions themselves are total and never fail. Errors
//! only surface at the edges: loading configuration and enforcing a strict
//! model resolution policy.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod model;

pub use config::ConfigError;
pub use model::{ModelError, ModelErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum BridgeErrorKind {
    /// Configuration error
    Config(ConfigError),
    /// Model resolution error
    Model(ModelError),
}

impl std::fmt::Display for BridgeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BridgeErrorKind::Config(e) => write!(f, "{}", e),
            BridgeErrorKind::Model(e) => write!(f, "{}", e),
        }
    }
}

/// Bridge error with kind discrimination.
#[derive(Debug)]
pub struct BridgeError(Box<BridgeErrorKind>);

impl BridgeError {
    /// Create a new error from a kind.
    pub fn new(kind: BridgeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BridgeErrorKind {
        &self.0
    }
}

impl std::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bridge Error: {}", self.0)
    }
}

impl std::error::Error for BridgeError {}

impl<T> From<T> for BridgeError
where
    T: Into<BridgeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for gembridge operations.
pub type BridgeResult<T> = std::result::Result<T, BridgeError>;
