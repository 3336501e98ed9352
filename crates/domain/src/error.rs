//! Domain error types

use thiserror::Error;

/// Rejections raised by the sandbox dataset.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A sandbox record was not found.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// Record type.
        kind: &'static str,
        /// Requested id.
        id: String,
    },

    /// A sandbox operation received unusable input.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    /// Creates a `NotFound` error.
    #[must_use]
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
