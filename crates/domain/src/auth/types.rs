//! Session types

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::LoginResponse;

/// Message used when the backend rejects a login without saying why.
pub const AUTHENTICATION_FAILED: &str = "authentication failed";

/// Email and password submitted to the login endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account email.
    pub email: String,
    /// Plain-text password, only ever sent over the wire.
    pub password: String,
}

impl Credentials {
    /// Creates a new credential pair.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Payload sealed into the session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Backend bearer credential.
    pub access_token: String,
    /// Numeric backend user id.
    pub user_id: i64,
    /// Backend username, shown as the display name.
    pub username: String,
    /// Account email.
    pub email: String,
    /// When the session was minted.
    pub issued_at: DateTime<Utc>,
    /// When the session stops being valid.
    pub expires_at: DateTime<Utc>,
}

impl SessionClaims {
    /// Builds claims from a successful login answer.
    ///
    /// Returns `None` when the answer carries no access token.
    #[must_use]
    pub fn from_login(login: &LoginResponse, now: DateTime<Utc>, ttl: Duration) -> Option<Self> {
        let token = login.access_token.as_deref().filter(|t| !t.is_empty())?;
        Some(Self {
            access_token: token.to_string(),
            user_id: login.id,
            username: login.username.clone(),
            email: login.email.clone(),
            issued_at: now,
            expires_at: now + ttl,
        })
    }

    /// Returns true once `now` has reached the expiry instant.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Status of the current session, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// The stored token has not been resolved yet.
    Loading,
    /// No valid token.
    Unauthenticated,
    /// A valid token is present.
    Authenticated,
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Loading => "loading",
            Self::Unauthenticated => "unauthenticated",
            Self::Authenticated => "authenticated",
        };
        write!(f, "{s}")
    }
}

/// Identity carried by an authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedSession {
    /// Token attached as `Authorization: Bearer <token>`. Never serialized.
    #[serde(skip_serializing, default)]
    pub bearer_token: String,
    /// Numeric backend user id.
    pub user_id: i64,
    /// Backend username.
    pub display_name: String,
    /// Account email.
    pub email: String,
    /// When the session stops being valid.
    pub expires_at: DateTime<Utc>,
}

impl From<SessionClaims> for AuthenticatedSession {
    fn from(claims: SessionClaims) -> Self {
        Self {
            bearer_token: claims.access_token,
            user_id: claims.user_id,
            display_name: claims.username,
            email: claims.email,
            expires_at: claims.expires_at,
        }
    }
}

/// Who is calling the API.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Session {
    /// The stored token has not been resolved yet.
    #[default]
    Loading,
    /// No valid token.
    Unauthenticated,
    /// A valid token is present.
    Authenticated(AuthenticatedSession),
}

impl Session {
    /// Returns the session status.
    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        match self {
            Self::Loading => SessionStatus::Loading,
            Self::Unauthenticated => SessionStatus::Unauthenticated,
            Self::Authenticated(_) => SessionStatus::Authenticated,
        }
    }

    /// Returns the bearer token when authenticated.
    #[must_use]
    pub fn bearer_token(&self) -> Option<&str> {
        match self {
            Self::Authenticated(session) => Some(&session.bearer_token),
            _ => None,
        }
    }

    /// Returns the identity when authenticated.
    #[must_use]
    pub const fn authenticated(&self) -> Option<&AuthenticatedSession> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    /// Returns true while the stored token has not been resolved.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl From<SessionClaims> for Session {
    fn from(claims: SessionClaims) -> Self {
        Self::Authenticated(claims.into())
    }
}

/// Login failures, as shown on the login form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The backend answered with a failure.
    #[error("{0}")]
    Rejected(String),

    /// The request never completed.
    #[error("{0}")]
    Network(String),

    /// The session token could not be sealed or stored.
    #[error("session error: {0}")]
    Session(String),
}

impl AuthError {
    /// Returns the message shown to the user.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Rejected(m) | Self::Network(m) | Self::Session(m) => m,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn login(token: Option<&str>) -> LoginResponse {
        LoginResponse {
            id: 1,
            email: "a@b.com".to_string(),
            username: "a".to_string(),
            access_token: token.map(str::to_string),
            token_type: Some("bearer".to_string()),
        }
    }

    #[test]
    fn test_claims_from_login() {
        let now = Utc::now();
        let claims = SessionClaims::from_login(&login(Some("tok123")), now, Duration::days(30));
        let claims = claims.expect("token present");

        assert_eq!(claims.access_token, "tok123");
        assert_eq!(claims.user_id, 1);
        assert_eq!(claims.expires_at, now + Duration::days(30));
        assert!(!claims.is_expired(now));
        assert!(claims.is_expired(now + Duration::days(30)));
    }

    #[test]
    fn test_claims_require_token() {
        let now = Utc::now();
        assert!(SessionClaims::from_login(&login(None), now, Duration::days(1)).is_none());
        assert!(SessionClaims::from_login(&login(Some("")), now, Duration::days(1)).is_none());
    }

    #[test]
    fn test_session_accessors() {
        assert_eq!(Session::default().status(), SessionStatus::Loading);
        assert_eq!(Session::Unauthenticated.bearer_token(), None);

        let now = Utc::now();
        let claims = SessionClaims::from_login(&login(Some("tok")), now, Duration::hours(1));
        let session = Session::from(claims.expect("token present"));
        assert_eq!(session.status(), SessionStatus::Authenticated);
        assert_eq!(session.bearer_token(), Some("tok"));
        assert_eq!(
            session.authenticated().map(|s| s.display_name.as_str()),
            Some("a")
        );
    }

    #[test]
    fn test_serialized_session_omits_bearer_token() {
        let now = Utc::now();
        let claims =
            SessionClaims::from_login(&login(Some("tok-secret")), now, Duration::hours(1));
        let session = Session::from(claims.expect("token present"));

        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["status"], "authenticated");
        assert_eq!(json["email"], "a@b.com");
        assert!(json.get("bearer_token").is_none());
        assert!(!json.to_string().contains("tok-secret"));
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let debug = format!("{:?}", Credentials::new("a@b.com", "secret"));
        assert!(debug.contains("a@b.com"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_auth_error_display_is_bare_message() {
        assert_eq!(
            AuthError::Rejected("Invalid credentials".to_string()).to_string(),
            "Invalid credentials"
        );
        assert_eq!(AuthError::Network("refused".to_string()).message(), "refused");
    }
}
