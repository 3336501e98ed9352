//! Session token ports

use async_trait::async_trait;
use planeats_domain::SessionClaims;

/// Errors raised while sealing or opening a session token.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SessionCodecError {
    /// The configured secret cannot derive a key.
    #[error("invalid session secret: {0}")]
    InvalidSecret(String),

    /// Claims could not be encrypted.
    #[error("failed to seal session: {0}")]
    Seal(String),

    /// The token is not valid base64 or is too short.
    #[error("malformed session token")]
    Malformed,

    /// Authentication tag mismatch: wrong secret or tampered token.
    #[error("session token failed verification")]
    Verification,

    /// The decrypted payload is not a claims document.
    #[error("invalid session payload: {0}")]
    Payload(String),
}

/// Seals claims into an opaque token and opens them again.
pub trait SessionCodec: Send + Sync {
    /// Encrypts and authenticates `claims`.
    ///
    /// # Errors
    ///
    /// Returns an error if the claims cannot be serialized or encrypted.
    fn seal(&self, claims: &SessionClaims) -> Result<String, SessionCodecError>;

    /// Verifies and decrypts `token`.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed, tampered or foreign tokens.
    fn open(&self, token: &str) -> Result<SessionClaims, SessionCodecError>;
}

/// Errors raised by a session store.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Holds the sealed session token between runs.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Returns the stored token, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    async fn load(&self) -> Result<Option<String>, SessionStoreError>;

    /// Replaces the stored token.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    async fn save(&self, token: &str) -> Result<(), SessionStoreError>;

    /// Removes the stored token. Clearing an empty store is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    async fn clear(&self) -> Result<(), SessionStoreError>;
}
