//! Sandbox persistence port

use async_trait::async_trait;
use planeats_domain::SandboxState;

/// Errors that can occur while persisting the sandbox.
#[derive(Debug, thiserror::Error)]
pub enum SandboxStoreError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Repository for the sandbox snapshot.
#[async_trait]
pub trait SandboxRepository: Send + Sync {
    /// Loads the stored snapshot, `None` on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot exists but cannot be read.
    async fn load(&self) -> Result<Option<SandboxState>, SandboxStoreError>;

    /// Rewrites the stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    async fn save(&self, state: &SandboxState) -> Result<(), SandboxStoreError>;
}
