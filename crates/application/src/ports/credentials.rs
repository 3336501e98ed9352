//! Bearer credential port

/// Supplies the bearer token attached to authenticated requests.
///
/// Read synchronously on every request, so implementations must be cheap.
pub trait CredentialSource: Send + Sync {
    /// Returns the current bearer token, if a session is live.
    fn bearer_token(&self) -> Option<String>;
}

/// A source that never has a token. Used for public-only clients.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCredentials;

impl CredentialSource for NoCredentials {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}
