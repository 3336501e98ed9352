//! Request descriptor type

use serde::Serialize;

use super::{Headers, HttpMethod, RequestBody};

/// Describes one call against the backend.
///
/// Ephemeral: built by an endpoint wrapper (or a caller), consumed by a
/// single `ApiClient::request` call. Defaults match the client contract:
/// `GET`, no body, no extra headers, authentication required.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Path (and query) relative to the API base URL, e.g. `/api/v1/recipes`.
    pub endpoint: String,
    /// Optional body; ignored for `GET`.
    pub body: Option<RequestBody>,
    /// Extra headers merged over the computed defaults.
    pub headers: Headers,
    /// Whether to attach the session's bearer token.
    pub require_auth: bool,
}

impl ApiRequest {
    /// Creates a descriptor with the given method and endpoint.
    #[must_use]
    pub fn new(method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            body: None,
            headers: Headers::new(),
            require_auth: true,
        }
    }

    /// Creates a `GET` descriptor.
    #[must_use]
    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, endpoint)
    }

    /// Creates a `POST` descriptor.
    #[must_use]
    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, endpoint)
    }

    /// Creates a `PUT` descriptor.
    #[must_use]
    pub fn put(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, endpoint)
    }

    /// Creates a `DELETE` descriptor.
    #[must_use]
    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, endpoint)
    }

    /// Attaches a JSON body.
    #[must_use]
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Self {
        self.body = Some(RequestBody::json(body));
        self
    }

    /// Attaches a pre-serialized body.
    #[must_use]
    pub fn raw_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(RequestBody::raw(body));
        self
    }

    /// Adds a header that overrides the computed defaults.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, value);
        self
    }

    /// Marks the request as public (no bearer token attached).
    #[must_use]
    pub const fn public(mut self) -> Self {
        self.require_auth = false;
        self
    }

    /// Returns the body that will actually be sent, if any.
    #[must_use]
    pub fn effective_body(&self) -> Option<&RequestBody> {
        if self.method.sends_body() {
            self.body.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let request = ApiRequest::get("/api/v1/pantry/items");
        assert_eq!(request.method, HttpMethod::Get);
        assert!(request.require_auth);
        assert!(request.body.is_none());
        assert!(request.headers.is_empty());
    }

    #[test]
    fn test_get_ignores_body() {
        let request = ApiRequest::get("/api/v1/recipes").raw_body("{}");
        assert!(request.body.is_some());
        assert!(request.effective_body().is_none());
    }

    #[test]
    fn test_builder_chain() {
        let request = ApiRequest::post("/api/v1/auth/login")
            .json(&serde_json::json!({"email": "a@b.com"}))
            .header("X-Client", "cli")
            .public();

        assert!(!request.require_auth);
        assert_eq!(request.headers.get("x-client"), Some("cli"));
        assert_eq!(
            request.effective_body(),
            Some(&RequestBody::Json(serde_json::json!({"email": "a@b.com"})))
        );
    }
}
