//! Session cookie file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use planeats_application::ports::{SessionStore, SessionStoreError};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Keeps the sealed session token in a single file.
///
/// On unix the file is readable by its owner only.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// File name inside the data directory.
    pub const FILE_NAME: &'static str = "session";

    /// Permission bits of the token file on unix.
    #[cfg(unix)]
    pub const FILE_MODE: u32 = 0o600;

    /// Creates a store under `data_dir`.
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(Self::FILE_NAME),
        }
    }

    /// Returns the token file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> Result<Option<String>, SessionStoreError> {
        match fs::read_to_string(&self.path).await {
            Ok(token) => {
                let token = token.trim();
                Ok((!token.is_empty()).then(|| token.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, token: &str) -> Result<(), SessionStoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await?;
        }

        // Write then rename so readers never see a partial token.
        let tmp = self.path.with_extension("tmp");
        if let Err(e) = fs::remove_file(&tmp).await
            && e.kind() != ErrorKind::NotFound
        {
            return Err(e.into());
        }
        let mut options = fs::OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        options.mode(Self::FILE_MODE);

        let mut file = options.open(&tmp).await?;
        file.write_all(token.as_bytes()).await?;
        file.sync_all().await?;
        drop(file);
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        match fs::remove_file(&self.path).await {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}
