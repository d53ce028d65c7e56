//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Validation errors
/// - 3xxx: Reservation errors
/// - 4xxx: Room errors
/// - 5xxx: Check-in errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Validation errors (2xxx)
    Validation,
    /// Reservation errors (3xxx)
    Reservation,
    /// Room errors (4xxx)
    Room,
    /// Check-in errors (5xxx)
    CheckIn,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Validation,
            3000..4000 => Self::Reservation,
            4000..5000 => Self::Room,
            5000..6000 => Self::CheckIn,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Validation => "validation",
            Self::Reservation => "reservation",
            Self::Room => "room",
            Self::CheckIn => "check_in",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
