//! In-memory session token storage.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::ports::{SessionStore, SessionStoreError};

/// Thread-safe in-memory session store.
///
/// Holds the sealed token for the lifetime of the process only.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    token: Arc<RwLock<Option<String>>>,
}

impl MemorySessionStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `token`.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(Some(token.into()))),
        }
    }

    /// Returns true if a token is stored.
    pub async fn is_empty(&self) -> bool {
        self.token.read().await.is_none()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> Result<Option<String>, SessionStoreError> {
        Ok(self.token.read().await.clone())
    }

    async fn save(&self, token: &str) -> Result<(), SessionStoreError> {
        let mut slot = self.token.write().await;
        *slot = Some(token.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        let mut slot = self.token.write().await;
        *slot = None;
        Ok(())
    }
}
