//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level conversational error.
///
/// Keep this focused on deterministic failures of understanding (malformed
/// input, nothing matched). Storage concerns belong to `despensa-store`.
/// Both variants are recovered inside the dispatcher and keep the session
/// open.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The input could not be understood (e.g. an empty product name);
    /// the user is asked to rephrase.
    #[error("validation failed: {0}")]
    Validation(String),

    /// No pantry entry matched the spoken term.
    #[error("no pantry entry matched {0:?}")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(term: impl Into<String>) -> Self {
        Self::NotFound(term.into())
    }
}
