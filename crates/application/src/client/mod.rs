//! The API client
//!
//! [`ApiClient`] is the single gateway to the backend. It attaches the
//! bearer token, serializes bodies, and folds every outcome, including
//! transport failures, into an [`ApiResponse`].

mod ai;
mod auth;
mod mealdb;
mod pantry;
mod preferences;
mod recipes;
mod recommendations;

pub use mealdb::DEFAULT_PANTRY_SUGGESTIONS;

use std::sync::Arc;
use std::time::Instant;

use planeats_domain::{
    ApiError, ApiErrorKind, ApiRequest, ApiResponse, Headers, ResponseSpec,
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::ports::{CredentialSource, HttpClient, HttpRequest, NoCredentials};

/// Versioned prefix shared by every backend endpoint.
pub const API_PREFIX: &str = "/api/v1";

/// Typed, authenticated gateway to the backend REST API.
#[derive(Clone)]
pub struct ApiClient {
    http: Arc<dyn HttpClient>,
    credentials: Arc<dyn CredentialSource>,
    base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Creates a client without credentials.
    ///
    /// Requests flagged `require_auth` are sent without an
    /// `Authorization` header until [`with_credentials`](Self::with_credentials)
    /// is used.
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            credentials: Arc::new(NoCredentials),
            base_url,
        }
    }

    /// Returns a copy of this client that reads tokens from `credentials`.
    #[must_use]
    pub fn with_credentials(&self, credentials: Arc<dyn CredentialSource>) -> Self {
        Self {
            http: Arc::clone(&self.http),
            credentials,
            base_url: self.base_url.clone(),
        }
    }

    /// Returns the base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{endpoint}", self.base_url)
        } else {
            format!("{}/{endpoint}", self.base_url)
        }
    }

    fn headers_for(&self, request: &ApiRequest) -> Headers {
        let mut headers = Headers::new();
        headers.set("Content-Type", "application/json");
        if request.require_auth
            && let Some(token) = self.credentials.bearer_token()
        {
            headers.set("Authorization", format!("Bearer {token}"));
        }
        headers.merge(&request.headers);
        headers
    }

    /// Issues `request` and decodes a successful body into `T`.
    ///
    /// Never fails: transport errors, HTTP errors and undecodable bodies
    /// all come back as [`ApiResponse::Error`].
    pub async fn request<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResponse<T> {
        let body = match request.effective_body().map(|b| b.to_wire()).transpose() {
            Ok(body) => body,
            Err(message) => {
                warn!(endpoint = %request.endpoint, %message, "request body could not be serialized");
                return ApiResponse::error(
                    ApiError::new(
                        ApiErrorKind::InvalidRequest,
                        format!("invalid request body: {message}"),
                    ),
                    0,
                );
            }
        };

        let http_request = HttpRequest {
            method: request.method,
            url: self.url_for(&request.endpoint),
            headers: self.headers_for(&request),
            body,
        };

        debug!(method = %http_request.method, url = %http_request.url, "issuing request");
        let start = Instant::now();

        match self.http.execute(http_request).await {
            Ok(response) => {
                let envelope = normalize(&response);
                match &envelope {
                    ApiResponse::Data { status, .. } => {
                        debug!(
                            endpoint = %request.endpoint,
                            status,
                            elapsed_ms = start.elapsed().as_millis(),
                            "request succeeded"
                        );
                    }
                    ApiResponse::Error { error, status } => {
                        warn!(endpoint = %request.endpoint, status, error = %error, "request failed");
                    }
                }
                envelope
            }
            Err(e) => {
                warn!(endpoint = %request.endpoint, error = %e, "request never reached the server");
                ApiResponse::network_failure(e.to_string())
            }
        }
    }
}

/// Folds a raw response into an envelope.
fn normalize<T: DeserializeOwned>(response: &ResponseSpec) -> ApiResponse<T> {
    let status = response.status;
    if !response.is_success() {
        return ApiResponse::error(ApiError::from_response(response), status);
    }

    let decoded = if response.body.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_value(serde_json::Value::Null)
    } else if response.is_json() {
        serde_json::from_slice(&response.body)
    } else {
        serde_json::from_value(serde_json::Value::String(response.body_text()))
    };

    match decoded {
        Ok(data) => ApiResponse::data(data, status),
        Err(e) => ApiResponse::error(
            ApiError::new(ApiErrorKind::Decode, format!("unexpected response body: {e}")),
            status,
        ),
    }
}
