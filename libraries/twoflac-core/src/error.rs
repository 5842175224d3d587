/// Core error types for 2FLAC
use thiserror::Error;

/// Result type alias using `FlacError`
pub type Result<T> = std::result::Result<T, FlacError>;

/// Core error type for 2FLAC
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlacError {
    /// A required field is missing or malformed
    #[error("{0}")]
    Validation(String),

    /// The backend failed to produce a result
    #[error("Backend error: {0}")]
    Backend(String),
}

impl FlacError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a backend error
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }

    /// Whether the error was caused by the caller's input
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
