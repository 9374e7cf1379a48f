//! Error types for pgpatch

use thiserror::Error;

/// Result type alias for patch compilation
pub type PatchResult<T> = Result<T, PatchError>;

/// Error types for patch compilation
#[derive(Debug, Error)]
pub enum PatchError {
    /// Caller supplied an empty update payload
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl PatchError {
    /// Create a bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Check if this is a bad request error
    pub fn is_bad_request(&self) -> bool {
        matches!(self, Self::BadRequest(_))
    }
}
