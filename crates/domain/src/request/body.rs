//! HTTP Request body types

use serde::Serialize;

/// Body attached to an [`ApiRequest`](super::ApiRequest).
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// A JSON value, serialized when the request is sent.
    Json(serde_json::Value),
    /// A pre-serialized body sent verbatim.
    Raw(String),
    /// A value that failed to serialize when the descriptor was built.
    ///
    /// The client turns this into an error envelope instead of sending.
    Invalid(String),
}

impl RequestBody {
    /// Serializes `value` into a JSON body.
    ///
    /// Serialization failures are captured as [`RequestBody::Invalid`] so
    /// that building a descriptor never fails.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => Self::Json(value),
            Err(e) => Self::Invalid(e.to_string()),
        }
    }

    /// Creates a pre-serialized body.
    #[must_use]
    pub fn raw(content: impl Into<String>) -> Self {
        Self::Raw(content.into())
    }

    /// Returns the wire representation of the body.
    ///
    /// # Errors
    ///
    /// Returns the captured serialization message for invalid bodies.
    pub fn to_wire(&self) -> Result<String, String> {
        match self {
            Self::Json(value) => Ok(value.to_string()),
            Self::Raw(content) => Ok(content.clone()),
            Self::Invalid(message) => Err(message.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    #[test]
    fn test_json_body_serializes_on_wire() {
        let body = RequestBody::json(&serde_json::json!({"name": "Milk", "quantity": 1}));
        assert_eq!(
            body.to_wire(),
            Ok(r#"{"name":"Milk","quantity":1}"#.to_string())
        );
    }

    #[test]
    fn test_raw_body_is_sent_verbatim() {
        let body = RequestBody::raw("{ \"already\": \"encoded\" }");
        assert_eq!(body.to_wire(), Ok("{ \"already\": \"encoded\" }".to_string()));
    }

    #[test]
    fn test_unserializable_body_is_captured() {
        // JSON object keys must be strings.
        let mut map = HashMap::new();
        map.insert(vec![1u8], "value");

        let body = RequestBody::json(&map);
        assert!(matches!(body, RequestBody::Invalid(_)));
        assert!(body.to_wire().is_err());
    }
}
