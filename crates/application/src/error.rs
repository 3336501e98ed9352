//! Application error types

use planeats_domain::DomainError;
use thiserror::Error;

use crate::ports::SandboxStoreError;

/// Errors raised by the [`Sandbox`](crate::sandbox::Sandbox) service.
#[derive(Debug, Error)]
pub enum SandboxError {
    /// The operation was rejected by the dataset.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The snapshot could not be read or written.
    #[error("storage error: {0}")]
    Storage(#[from] SandboxStoreError),
}

/// Result type alias for sandbox operations.
pub type SandboxResult<T> = Result<T, SandboxError>;
