//! Sealed session tokens.
//!
//! Claims are serialized to JSON and encrypted with ChaCha20-Poly1305
//! under a 32-byte key derived from the configured secret with
//! HKDF-SHA256. The token is `base64url(nonce || ciphertext || tag)`
//! without padding.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chacha20poly1305::aead::{Aead, KeyInit};
use chacha20poly1305::{ChaCha20Poly1305, Key, Nonce};
use hkdf::Hkdf;
use planeats_application::ports::{SessionCodec, SessionCodecError};
use planeats_domain::SessionClaims;
use rand::RngCore;
use sha2::Sha256;

/// Nonce size for ChaCha20-Poly1305 (96 bits).
const NONCE_SIZE: usize = 12;
/// Authentication tag size (128 bits).
const TAG_SIZE: usize = 16;
/// Key size (256 bits).
const KEY_SIZE: usize = 32;

const HKDF_SALT: &[u8] = b"planeats-session-v1";
const HKDF_INFO: &[u8] = b"session-token";

/// Secret used when none is configured. Development only.
pub const DEV_SESSION_SECRET: &str = "planeats-development-session-secret";

/// [`SessionCodec`] backed by ChaCha20-Poly1305.
pub struct SealedSessionCodec {
    cipher: ChaCha20Poly1305,
}

impl std::fmt::Debug for SealedSessionCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SealedSessionCodec").finish_non_exhaustive()
    }
}

impl SealedSessionCodec {
    /// Derives the sealing key from `secret`.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty secret.
    pub fn new(secret: &str) -> Result<Self, SessionCodecError> {
        if secret.is_empty() {
            return Err(SessionCodecError::InvalidSecret(
                "secret must not be empty".to_string(),
            ));
        }

        let mut key = [0u8; KEY_SIZE];
        Hkdf::<Sha256>::new(Some(HKDF_SALT), secret.as_bytes())
            .expand(HKDF_INFO, &mut key)
            .map_err(|e| SessionCodecError::InvalidSecret(e.to_string()))?;

        Ok(Self {
            cipher: ChaCha20Poly1305::new(Key::from_slice(&key)),
        })
    }

    fn seal_with_nonce(
        &self,
        claims: &SessionClaims,
        nonce: &[u8; NONCE_SIZE],
    ) -> Result<String, SessionCodecError> {
        let plaintext =
            serde_json::to_vec(claims).map_err(|e| SessionCodecError::Seal(e.to_string()))?;
        let ciphertext = self
            .cipher
            .encrypt(Nonce::from_slice(nonce), plaintext.as_ref())
            .map_err(|e| SessionCodecError::Seal(e.to_string()))?;

        let mut token = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        token.extend_from_slice(nonce);
        token.extend_from_slice(&ciphertext);
        Ok(URL_SAFE_NO_PAD.encode(token))
    }
}

impl SessionCodec for SealedSessionCodec {
    fn seal(&self, claims: &SessionClaims) -> Result<String, SessionCodecError> {
        let mut nonce = [0u8; NONCE_SIZE];
        rand::rng().fill_bytes(&mut nonce);
        self.seal_with_nonce(claims, &nonce)
    }

    fn open(&self, token: &str) -> Result<SessionClaims, SessionCodecError> {
        let bytes = URL_SAFE_NO_PAD
            .decode(token.trim())
            .map_err(|_| SessionCodecError::Malformed)?;
        if bytes.len() < NONCE_SIZE + TAG_SIZE {
            return Err(SessionCodecError::Malformed);
        }

        let (nonce, ciphertext) = bytes.split_at(NONCE_SIZE);
        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| SessionCodecError::Verification)?;

        serde_json::from_slice(&plaintext).map_err(|e| SessionCodecError::Payload(e.to_string()))
    }
}
