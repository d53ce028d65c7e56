//! Client error types

use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Structured error body returned by the PMS on 4xx responses
///
/// Shape: `{ "message": "...", "errors": { "field": ["..."] } }`. Both
/// fields are optional; plain-text rejections decode to an empty body with
/// the raw text carried in `message`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

impl ErrorBody {
    /// Build a body from plain response text
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            message: if text.is_empty() { None } else { Some(text) },
            errors: None,
        }
    }
}

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend rejected the request
    #[error("API error ({status}): {}", .body.message.as_deref().unwrap_or("no message"))]
    Api { status: u16, body: ErrorBody },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_decode() {
        let json = r#"{"message":"Datos invalidos","errors":{"id_hab":["no disponible"]}}"#;
        let body: ErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.message.as_deref(), Some("Datos invalidos"));
        assert_eq!(
            body.errors.unwrap().get("id_hab").unwrap(),
            &vec!["no disponible".to_string()]
        );
    }

    #[test]
    fn test_error_body_from_text() {
        let body = ErrorBody::from_text("gateway timeout");
        assert_eq!(body.message.as_deref(), Some("gateway timeout"));
        assert!(body.errors.is_none());

        let empty = ErrorBody::from_text("");
        assert!(empty.message.is_none());
    }

    #[test]
    fn test_api_error_display() {
        let err = ClientError::Api {
            status: 422,
            body: ErrorBody::from_text("Datos invalidos"),
        };
        assert_eq!(format!("{}", err), "API error (422): Datos invalidos");
    }
}
