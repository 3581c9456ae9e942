//! Store error model.

use thiserror::Error;

/// Failure of a pantry store operation.
///
/// Every variant is recovered inside the interpreter (spoken apology); none
/// of them may surface as a transport-level failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be reached (transport error, timeout).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store answered with a non-success status.
    #[error("store returned status {0}")]
    Status(u16),

    /// The store answered, but the payload could not be decoded.
    #[error("store payload could not be decoded: {0}")]
    Decode(String),

    /// The addressed item does not exist.
    #[error("item not found")]
    NotFound,
}

impl StoreError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}
