//! Response and error classification
//!
//! Normalizes heterogeneous failures into a single envelope with a closed
//! taxonomy, so the desk sees exactly one message per failed attempt. Raw
//! transport errors never reach the caller.

use crate::error::ClientError;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};
use std::collections::HashMap;
use thiserror::Error;

/// Field name the PMS uses for the room id in structured errors
const ROOM_FIELD: &str = "id_hab";

/// Closed error taxonomy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Server returned structured per-field errors
    FieldValidation,
    /// A field error on the room identifier specifically
    RoomConflict,
    /// Non-2xx response without structured field errors
    ServerError,
    /// Failure produced locally, before any network call
    LocalValidation,
    /// Anything else (network partition, malformed response, timeout)
    Unknown,
}

/// Classified failure of one submission attempt
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClassifiedError {
    pub kind: ErrorKind,
    pub message: String,
    /// Raw per-field error map, when the server supplied one
    pub field_errors: Option<HashMap<String, Vec<String>>>,
}

impl ClassifiedError {
    /// Create a classified error without field detail
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: None,
        }
    }

    /// Local validation failure (no network call was made)
    pub fn local_validation(errors: &[String]) -> Self {
        Self::new(ErrorKind::LocalValidation, errors.join("; "))
    }

    /// Shared error code for this failure, for cross-surface reporting
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ErrorKind::FieldValidation => ErrorCode::CheckInRejected,
            ErrorKind::RoomConflict => ErrorCode::RoomUnavailable,
            ErrorKind::ServerError => ErrorCode::InternalError,
            ErrorKind::LocalValidation => ErrorCode::ValidationFailed,
            ErrorKind::Unknown => ErrorCode::Unknown,
        }
    }
}

impl From<ClassifiedError> for AppError {
    fn from(err: ClassifiedError) -> Self {
        let code = err.code();
        let mut app = AppError::with_message(code, err.message);
        if let Some(fields) = err.field_errors {
            for (field, messages) in fields {
                app = app.with_detail(field, serde_json::json!(messages));
            }
        }
        app
    }
}

/// Classify a transport-level failure into the closed taxonomy
///
/// Room conflicts take precedence over generic field errors when both are
/// present in the same response: staff need "wrong room", not "generic 422".
pub fn classify_client_error(err: &ClientError) -> ClassifiedError {
    match err {
        ClientError::Api { status, body } => {
            if let Some(errors) = body.errors.as_ref().filter(|e| !e.is_empty()) {
                if let Some(room_errors) = errors.get(ROOM_FIELD).filter(|m| !m.is_empty()) {
                    return ClassifiedError {
                        kind: ErrorKind::RoomConflict,
                        message: format!("Room not available: {}", room_errors.join("; ")),
                        field_errors: Some(errors.clone()),
                    };
                }
                return ClassifiedError {
                    kind: ErrorKind::FieldValidation,
                    message: join_field_errors(errors),
                    field_errors: Some(errors.clone()),
                };
            }
            ClassifiedError::new(
                ErrorKind::ServerError,
                body.message
                    .clone()
                    .unwrap_or_else(|| format!("Server rejected the request ({})", status)),
            )
        }
        ClientError::Unauthorized => {
            ClassifiedError::new(ErrorKind::ServerError, "Authentication required")
        }
        other => ClassifiedError::new(ErrorKind::Unknown, other.to_string()),
    }
}

/// Join a field-error map into one deterministic human-readable message
fn join_field_errors(errors: &HashMap<String, Vec<String>>) -> String {
    let mut fields: Vec<&String> = errors.keys().collect();
    fields.sort();
    fields
        .iter()
        .map(|field| format!("{}: {}", field, errors[*field].join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}
