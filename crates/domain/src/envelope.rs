//! Normalized result envelope
//!
//! Every call through the API client ends in an [`ApiResponse`]: either data
//! with its HTTP status or an error with its HTTP status. Status `0` means
//! the request never reached the server.

use serde::{Deserialize, Serialize};

use crate::response::{ResponseSpec, StatusCode};

/// Message used when a transport failure carries no message of its own.
pub const NETWORK_ERROR_FALLBACK: &str = "Network error";

/// Category of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    /// The request never reached the server (status 0).
    Transport,
    /// 401 or 403 from the backend.
    Unauthorized,
    /// Any other 4xx.
    Client,
    /// 5xx or any non-2xx status outside the client range.
    Server,
    /// 2xx whose body does not match the expected schema.
    Decode,
    /// The request body could not be serialized; nothing was sent.
    InvalidRequest,
}

impl ApiErrorKind {
    /// Derives the kind from a non-success HTTP status.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        let code = StatusCode::new(status);
        if code.is_network_failure() {
            Self::Transport
        } else if code.is_auth_failure() {
            Self::Unauthorized
        } else if code.is_client_error() {
            Self::Client
        } else {
            Self::Server
        }
    }
}

/// A failed call, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    /// Failure category.
    pub kind: ApiErrorKind,
    /// User-facing message.
    pub message: String,
    /// The backend's `detail` field, when the error body carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ApiError {
    /// Creates a new error.
    #[must_use]
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            detail: None,
        }
    }

    /// Creates a transport error, falling back to a generic message.
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Self::new(ApiErrorKind::Transport, NETWORK_ERROR_FALLBACK)
        } else {
            Self::new(ApiErrorKind::Transport, message)
        }
    }

    /// Builds the error for a non-success HTTP response.
    #[must_use]
    pub fn from_response(response: &ResponseSpec) -> Self {
        let detail = error_detail(response);
        let message = match &detail {
            Some(detail) => detail.clone(),
            None => fallback_message(response),
        };
        Self {
            kind: ApiErrorKind::from_status(response.status),
            message,
            detail,
        }
    }

    /// Message suitable for display, with a connectivity hint for transport failures.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self.kind {
            ApiErrorKind::Transport => {
                format!("{} (check your connection)", self.message)
            }
            _ => self.message.clone(),
        }
    }
}

/// Resolves the user-facing message of a non-success response.
///
/// A string `detail` wins and a structured `detail` is rendered as compact
/// JSON. Without a usable `detail` a JSON body is rendered as compact JSON
/// (a bare string unquoted) and a non-empty plain-text body is used as is.
/// Empty or unparseable bodies give `HTTP <status>`.
#[must_use]
pub fn error_message(response: &ResponseSpec) -> String {
    error_detail(response).unwrap_or_else(|| fallback_message(response))
}

fn json_body(response: &ResponseSpec) -> Option<serde_json::Value> {
    if !response.is_json() {
        return None;
    }
    serde_json::from_slice(&response.body).ok()
}

/// Renders a JSON value for display, `None` when it carries nothing.
fn render_json(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null | serde_json::Value::Bool(false) => None,
        serde_json::Value::String(text) if text.is_empty() => None,
        serde_json::Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

/// Extracts the `detail` field of a JSON error body.
fn error_detail(response: &ResponseSpec) -> Option<String> {
    render_json(json_body(response)?.get("detail")?)
}

fn fallback_message(response: &ResponseSpec) -> String {
    let rendered = if response.is_json() {
        json_body(response).as_ref().and_then(render_json)
    } else {
        let text = response.body_text();
        (!text.trim().is_empty()).then_some(text)
    };
    rendered.unwrap_or_else(|| format!("HTTP {}", response.status))
}

/// Outcome of one API call. Exactly one of data or error is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    /// Successful call.
    Data {
        /// Decoded payload.
        data: T,
        /// HTTP status (2xx).
        status: u16,
    },
    /// Failed call.
    Error {
        /// What went wrong.
        error: ApiError,
        /// HTTP status, or `0` if the server was never reached.
        status: u16,
    },
}

impl<T> ApiResponse<T> {
    /// Creates a data envelope.
    #[must_use]
    pub const fn data(data: T, status: u16) -> Self {
        Self::Data { data, status }
    }

    /// Creates an error envelope.
    #[must_use]
    pub const fn error(error: ApiError, status: u16) -> Self {
        Self::Error { error, status }
    }

    /// Creates a status-0 envelope for a transport failure.
    #[must_use]
    pub fn network_failure(message: impl Into<String>) -> Self {
        Self::Error {
            error: ApiError::transport(message),
            status: 0,
        }
    }

    /// Returns the HTTP status, `0` for transport failures.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Data { status, .. } | Self::Error { status, .. } => *status,
        }
    }

    /// Returns true if the request never reached the server.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::Error { status: 0, .. })
    }

    /// Returns true for the data variant.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(self, Self::Data { .. })
    }

    /// Borrows the payload, if any.
    #[must_use]
    pub const fn data_ref(&self) -> Option<&T> {
        match self {
            Self::Data { data, .. } => Some(data),
            Self::Error { .. } => None,
        }
    }

    /// Borrows the error, if any.
    #[must_use]
    pub const fn error_ref(&self) -> Option<&ApiError> {
        match self {
            Self::Data { .. } => None,
            Self::Error { error, .. } => Some(error),
        }
    }

    /// Converts into a standard `Result`.
    ///
    /// # Errors
    ///
    /// Returns the envelope's error for the error variant.
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            Self::Data { data, .. } => Ok(data),
            Self::Error { error, .. } => Err(error),
        }
    }

    /// Maps the payload, leaving errors untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        match self {
            Self::Data { data, status } => ApiResponse::Data {
                data: f(data),
                status,
            },
            Self::Error { error, status } => ApiResponse::Error { error, status },
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::request::Headers;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn response(status: u16, content_type: &str, body: &str) -> ResponseSpec {
        let headers: Headers = [("content-type", content_type)].into_iter().collect();
        ResponseSpec::new(status, headers, body.as_bytes().to_vec(), Duration::ZERO)
    }

    #[test]
    fn test_detail_string_is_threaded_through() {
        let r = response(401, "application/json", r#"{"detail":"Invalid credentials"}"#);
        let error = ApiError::from_response(&r);
        assert_eq!(error.message, "Invalid credentials");
        assert_eq!(error.detail.as_deref(), Some("Invalid credentials"));
        assert_eq!(error.kind, ApiErrorKind::Unauthorized);
    }

    #[test]
    fn test_structured_detail_is_compact_json() {
        let r = response(
            422,
            "application/json",
            r#"{"detail": [{"loc": ["body", "email"], "msg": "field required"}]}"#,
        );
        assert_eq!(
            error_message(&r),
            r#"[{"loc":["body","email"],"msg":"field required"}]"#
        );
        assert_eq!(ApiErrorKind::from_status(422), ApiErrorKind::Client);
    }

    #[test]
    fn test_json_without_detail_uses_compact_body() {
        let r = response(500, "application/json", r#"{ "error": "boom" }"#);
        assert_eq!(error_message(&r), r#"{"error":"boom"}"#);
        let error = ApiError::from_response(&r);
        assert_eq!(error.message, r#"{"error":"boom"}"#);
        assert_eq!(error.detail, None);
    }

    #[test]
    fn test_json_string_body_is_unquoted() {
        let r = response(400, "application/json", r#""quota exceeded""#);
        assert_eq!(error_message(&r), "quota exceeded");
    }

    #[test]
    fn test_empty_or_null_detail_uses_body() {
        let r = response(409, "application/json", r#"{"detail":""}"#);
        assert_eq!(error_message(&r), r#"{"detail":""}"#);
        assert_eq!(ApiError::from_response(&r).detail, None);

        let r = response(500, "application/json", "null");
        assert_eq!(error_message(&r), "HTTP 500");
    }

    #[test]
    fn test_unparseable_json_falls_back_to_status() {
        let r = response(502, "application/json", "<html>bad gateway</html>");
        assert_eq!(error_message(&r), "HTTP 502");
        assert_eq!(ApiErrorKind::from_status(502), ApiErrorKind::Server);
    }

    #[test]
    fn test_plain_text_body_is_used() {
        let r = response(503, "text/plain", "Service down for maintenance");
        assert_eq!(error_message(&r), "Service down for maintenance");
    }

    #[test]
    fn test_empty_body_falls_back_to_status() {
        let r = response(404, "text/plain", "  ");
        assert_eq!(error_message(&r), "HTTP 404");
    }

    #[test]
    fn test_transport_fallback_message() {
        let envelope = ApiResponse::<()>::network_failure("");
        assert!(envelope.is_network_error());
        assert_eq!(envelope.status(), 0);
        assert_eq!(
            envelope.error_ref().map(|e| e.message.as_str()),
            Some(NETWORK_ERROR_FALLBACK)
        );
    }

    #[test]
    fn test_envelope_serializes_untagged() {
        let ok = ApiResponse::data(serde_json::json!({"id": 1}), 201);
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            serde_json::json!({"data": {"id": 1}, "status": 201})
        );

        let err = ApiResponse::<()>::error(ApiError::new(ApiErrorKind::Client, "bad"), 400);
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            serde_json::json!({"error": {"kind": "client", "message": "bad"}, "status": 400})
        );
    }

    #[test]
    fn test_user_message_hint_only_for_transport() {
        assert_eq!(
            ApiError::transport("connection refused").user_message(),
            "connection refused (check your connection)"
        );
        assert_eq!(
            ApiError::new(ApiErrorKind::Server, "HTTP 500").user_message(),
            "HTTP 500"
        );
    }
}
