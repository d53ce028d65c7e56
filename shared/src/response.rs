//! Response envelope for PMS endpoints

use serde::{Deserialize, Serialize};

/// Success envelope returned by the PMS write endpoints
///
/// 2xx responses carry `success = true`, a human-readable `message`, and the
/// endpoint's `data` payload. Structured 4xx bodies use a different shape
/// (`message` plus per-field `errors`) and are decoded separately by the
/// client's transport layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the backend accepted the request
    #[serde(default)]
    pub success: bool,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a success response with data
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: "OK".to_string(),
            data: Some(data),
        }
    }

    /// Create a success response with custom message and data
    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success() {
        let response = ApiResponse::success(42);
        assert!(response.success);
        assert_eq!(response.message, "OK");
        assert_eq!(response.data, Some(42));
    }

    #[test]
    fn test_deserialize() {
        let json = r#"{"success":true,"message":"Check-in realizado","data":7}"#;
        let response: ApiResponse<i32> = serde_json::from_str(json).unwrap();
        assert!(response.success);
        assert_eq!(response.message, "Check-in realizado");
        assert_eq!(response.data, Some(7));
    }

    #[test]
    fn test_deserialize_missing_fields() {
        // Some endpoints omit `success` or `data`; defaults apply
        let json = r#"{"message":"ok"}"#;
        let response: ApiResponse<i32> = serde_json::from_str(json).unwrap();
        assert!(!response.success);
        assert!(response.data.is_none());
    }
}
