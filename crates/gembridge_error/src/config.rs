//! Errors raised while loading bridge settings or installing logging.

use derive_more::{Display, Error};

/// A bridge setting could not be read, parsed or applied.
///
/// Carries the call site that rejected the setting, so a bad
/// `GEMBRIDGE__*` override points at the loader that tripped on it.
#[derive(Debug, Clone, Display, Error)]
#[display("Bridge settings rejected: {} ({}:{})", reason, file, line)]
pub struct ConfigError {
    /// What was wrong with the setting.
    pub reason: String,
    /// Line of the rejecting call site.
    pub line: u32,
    /// File of the rejecting call site.
    pub file: &'static str,
}

impl ConfigError {
    /// Records `reason` against the caller's location.
    ///
    /// ```
    /// use gembridge_error::ConfigError;
    ///
    /// let err = ConfigError::new("unknown model resolution mode");
    /// assert!(err.to_string().starts_with("Bridge settings rejected: unknown model"));
    /// ```
    #[track_caller]
    pub fn new(reason: impl Into<String>) -> Self {
        let caller = std::panic::Location::caller();
        Self {
            reason: reason.into(),
            line: caller.line(),
            file: caller.file(),
        }
    }
}
