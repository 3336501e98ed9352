//! Credential login and reactive session state.

use std::sync::Arc;

use planeats_domain::{
    AUTHENTICATION_FAILED, ApiErrorKind, ApiResponse, AuthError, Session, SessionClaims,
};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::client::ApiClient;
use crate::ports::{Clock, CredentialSource, SessionCodec, SessionStore, SessionStoreError};

/// Owns the current session.
///
/// Reads are synchronous. Every change is published to the receivers
/// handed out by [`subscribe`](Self::subscribe).
pub struct SessionProvider {
    api: ApiClient,
    codec: Arc<dyn SessionCodec>,
    store: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
    ttl: chrono::Duration,
    state: watch::Sender<Session>,
}

impl std::fmt::Debug for SessionProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionProvider")
            .field("status", &self.state.borrow().status())
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl SessionProvider {
    /// Creates a provider in the [`Session::Loading`] state.
    ///
    /// `api` is only used for the login call, so a client without
    /// credentials is enough.
    pub fn new(
        api: ApiClient,
        codec: Arc<dyn SessionCodec>,
        store: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
        ttl: chrono::Duration,
    ) -> Self {
        Self {
            api,
            codec,
            store,
            clock,
            ttl,
            state: watch::Sender::new(Session::Loading),
        }
    }

    /// Logs in with email and password.
    ///
    /// On success the sealed session is persisted and published.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Rejected`] with the backend's `detail`, or
    ///   `"authentication failed"` when there is none or no token came back
    /// - [`AuthError::Network`] when the backend could not be reached
    /// - [`AuthError::Session`] when the token could not be sealed or stored
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let login = match self.api.login(email, password).await {
            ApiResponse::Data { data, .. } => data,
            ApiResponse::Error { error, .. } if error.kind == ApiErrorKind::Transport => {
                warn!(error = %error, "login request did not reach the backend");
                return Err(AuthError::Network(error.message));
            }
            ApiResponse::Error { error, status } => {
                info!(status, "login rejected");
                return Err(AuthError::Rejected(
                    error
                        .detail
                        .unwrap_or_else(|| AUTHENTICATION_FAILED.to_string()),
                ));
            }
        };

        let Some(claims) = SessionClaims::from_login(&login, self.clock.now(), self.ttl) else {
            warn!("login answer carried no access token");
            return Err(AuthError::Rejected(AUTHENTICATION_FAILED.to_string()));
        };

        let token = self
            .codec
            .seal(&claims)
            .map_err(|e| AuthError::Session(e.to_string()))?;
        self.store
            .save(&token)
            .await
            .map_err(|e| AuthError::Session(e.to_string()))?;

        let session = Session::from(claims);
        self.state.send_replace(session.clone());
        info!(user_id = login.id, "session established");
        Ok(session)
    }

    /// Returns the current session.
    ///
    /// An authenticated session whose expiry has passed is downgraded to
    /// [`Session::Unauthenticated`] on read.
    #[must_use]
    pub fn current_session(&self) -> Session {
        let session = self.state.borrow().clone();
        if let Session::Authenticated(live) = &session
            && self.clock.now() >= live.expires_at
        {
            self.state.send_if_modified(|current| {
                if current.authenticated() == Some(live) {
                    *current = Session::Unauthenticated;
                    true
                } else {
                    false
                }
            });
            info!(user_id = live.user_id, "session expired");
            return Session::Unauthenticated;
        }
        session
    }

    /// Resolves the stored token, leaving the [`Session::Loading`] state.
    ///
    /// Missing, unreadable and expired tokens all yield
    /// [`Session::Unauthenticated`].
    pub async fn hydrate(&self) -> Session {
        let session = match self.store.load().await {
            Ok(Some(token)) => match self.codec.open(&token) {
                Ok(claims) if claims.is_expired(self.clock.now()) => {
                    debug!("stored session has expired");
                    Session::Unauthenticated
                }
                Ok(claims) => {
                    info!(user_id = claims.user_id, "session restored");
                    Session::from(claims)
                }
                Err(e) => {
                    warn!(error = %e, "ignoring unreadable session token");
                    Session::Unauthenticated
                }
            },
            Ok(None) => Session::Unauthenticated,
            Err(e) => {
                warn!(error = %e, "session store could not be read");
                Session::Unauthenticated
            }
        };

        self.state.send_replace(session.clone());
        session
    }

    /// Logs out: publishes [`Session::Unauthenticated`] and clears the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored token could not be removed. The
    /// in-memory session is cleared regardless.
    pub async fn end_session(&self) -> Result<(), SessionStoreError> {
        self.state.send_replace(Session::Unauthenticated);
        info!("session ended");
        self.store.clear().await
    }

    /// Returns a receiver that observes every session change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }
}

impl CredentialSource for SessionProvider {
    fn bearer_token(&self) -> Option<String> {
        self.current_session().bearer_token().map(str::to_string)
    }
}
