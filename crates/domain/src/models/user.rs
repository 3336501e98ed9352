//! Account models

use serde::{Deserialize, Deserializer, Serialize};

/// Registration body for `POST /api/v1/auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Desired username.
    pub username: String,
    /// Account email.
    pub email: String,
    /// Password.
    pub password: String,
}

/// A backend user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRead {
    /// Numeric user id.
    #[serde(deserialize_with = "numeric_id")]
    pub id: i64,
    /// Account email.
    pub email: String,
    /// Username.
    pub username: String,
    /// Whether the account is active.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Creation timestamp as sent by the backend.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Answer of `POST /api/v1/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Numeric user id.
    #[serde(deserialize_with = "numeric_id")]
    pub id: i64,
    /// Account email.
    #[serde(default)]
    pub email: String,
    /// Username.
    #[serde(default)]
    pub username: String,
    /// Bearer credential; a login answer without one is a failure.
    #[serde(default)]
    pub access_token: Option<String>,
    /// Token type, normally `bearer`.
    #[serde(default)]
    pub token_type: Option<String>,
}

const fn default_true() -> bool {
    true
}

/// Accepts the id either as a JSON number or as a numeric string.
fn numeric_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(n) => Ok(n),
        RawId::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid numeric id: {s}"))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_login_response_accepts_string_id() {
        let login: LoginResponse = serde_json::from_str(
            r#"{"id":"42","email":"a@b.com","username":"a","access_token":"t","token_type":"bearer"}"#,
        )
        .unwrap();
        assert_eq!(login.id, 42);
        assert_eq!(login.access_token.as_deref(), Some("t"));
    }

    #[test]
    fn test_login_response_without_token() {
        let login: LoginResponse =
            serde_json::from_str(r#"{"id":1,"email":"a@b.com","username":"a"}"#).unwrap();
        assert!(login.access_token.is_none());
    }

    #[test]
    fn test_non_numeric_id_is_rejected() {
        let result = serde_json::from_str::<UserRead>(r#"{"id":"abc","email":"","username":""}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_user_read_ignores_unknown_fields() {
        let user: UserRead = serde_json::from_str(
            r#"{"id":3,"email":"c@d.com","username":"c","is_active":false,"role":"admin"}"#,
        )
        .unwrap();
        assert!(!user.is_active);
        assert_eq!(user.created_at, None);
    }
}
