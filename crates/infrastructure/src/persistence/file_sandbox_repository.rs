//! Sandbox snapshot file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use planeats_application::ports::{SandboxRepository, SandboxStoreError};
use planeats_domain::SandboxState;
use planeats_domain::sandbox::SANDBOX_STORAGE_KEY;
use tokio::fs;

use crate::serialization::{from_json_bytes, to_json_stable_bytes};

/// Stores the sandbox as `<data_dir>/planeats-storage.json`.
#[derive(Debug, Clone)]
pub struct FileSandboxRepository {
    path: PathBuf,
}

impl FileSandboxRepository {
    /// Creates a repository under `data_dir`.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(format!("{SANDBOX_STORAGE_KEY}.json")),
        }
    }

    /// Returns the snapshot path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SandboxRepository for FileSandboxRepository {
    async fn load(&self) -> Result<Option<SandboxState>, SandboxStoreError> {
        if !fs::try_exists(&self.path).await? {
            return Ok(None);
        }

        let content = fs::read(&self.path).await?;
        let state = from_json_bytes(&content)
            .map_err(|e| SandboxStoreError::Serialization(e.to_string()))?;
        Ok(Some(state))
    }

    async fn save(&self, state: &SandboxState) -> Result<(), SandboxStoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await?;
        }

        let content = to_json_stable_bytes(state)
            .map_err(|e| SandboxStoreError::Serialization(e.to_string()))?;

        // Write then rename so a crash never leaves a half-written snapshot.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}
