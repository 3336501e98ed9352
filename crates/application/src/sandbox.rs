//! Local sandbox service
//!
//! Wraps a [`SandboxState`] and persists it after every successful
//! mutation. Never talks to the backend.

use std::sync::Arc;

use planeats_domain::{DomainResult, SandboxState};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::SandboxResult;
use crate::ports::{Clock, SandboxRepository, SandboxStoreError};

/// The persisted demo dataset.
pub struct Sandbox {
    state: Mutex<SandboxState>,
    repo: Arc<dyn SandboxRepository>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for Sandbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sandbox").finish_non_exhaustive()
    }
}

impl Sandbox {
    /// Restores the stored snapshot, or starts from the seeded dataset.
    ///
    /// A snapshot that no longer parses is replaced by the seeded dataset
    /// on the next write.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot exists but cannot be read.
    pub async fn load(
        repo: Arc<dyn SandboxRepository>,
        clock: Arc<dyn Clock>,
    ) -> SandboxResult<Self> {
        let state = match repo.load().await {
            Ok(Some(state)) => {
                debug!(
                    recipes = state.recipes.len(),
                    ingredients = state.ingredients.len(),
                    "sandbox restored"
                );
                state
            }
            Ok(None) => SandboxState::default(),
            Err(SandboxStoreError::Serialization(message)) => {
                warn!(%message, "sandbox snapshot is unreadable, starting over");
                SandboxState::default()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            state: Mutex::new(state),
            repo,
            clock,
        })
    }

    /// Runs a read-only query against the dataset.
    pub async fn read<R>(&self, query: impl FnOnce(&SandboxState) -> R) -> R {
        let state = self.state.lock().await;
        query(&state)
    }

    /// Returns a copy of the whole dataset.
    pub async fn snapshot(&self) -> SandboxState {
        self.state.lock().await.clone()
    }

    /// Applies `change` and persists the result.
    ///
    /// The in-memory dataset only moves forward once the snapshot has been
    /// written, so a failed change or a failed write leaves it untouched.
    ///
    /// # Errors
    ///
    /// Returns the dataset's rejection, or a storage error.
    pub async fn mutate<R>(
        &self,
        change: impl FnOnce(&mut SandboxState, &dyn Clock) -> DomainResult<R>,
    ) -> SandboxResult<R> {
        let mut state = self.state.lock().await;
        let mut next = state.clone();
        let result = change(&mut next, self.clock.as_ref())?;

        self.repo.save(&next).await?;
        *state = next;
        debug!("sandbox saved");
        Ok(result)
    }

    /// Drops every change and restores the seeded dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    pub async fn reset(&self) -> SandboxResult<()> {
        self.mutate(|state, _| {
            *state = SandboxState::default();
            Ok(())
        })
        .await
    }
}
