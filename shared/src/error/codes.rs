//! Unified error codes for the Mirador front-desk client
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Validation errors
//! - 3xxx: Reservation errors
//! - 4xxx: Room errors
//! - 5xxx: Check-in errors
//! - 9xxx: System errors

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// Caller is not authenticated
    NotAuthenticated = 1001,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Validation ====================
    /// Request validation failed
    ValidationFailed = 2001,
    /// Check-out date is not after check-in date
    DateOrderInvalid = 2002,
    /// Guest counts violate the minimum occupancy
    GuestCountInvalid = 2003,
    /// Walk-in is missing required contact data
    WalkInContactMissing = 2004,
    /// Assembled payload failed verification
    PayloadInvalid = 2005,

    // ==================== 3xxx: Reservation ====================
    /// Reservation not found
    ReservationNotFound = 3001,
    /// Reservation id required for non-walk-in check-ins
    ReservationRequired = 3002,
    /// Reservation already has an open check-in
    ReservationAlreadyCheckedIn = 3003,

    // ==================== 4xxx: Room ====================
    /// Room not found in the inventory
    RoomNotFound = 4001,
    /// Room rejected by the backend (occupied, blocked, out of service)
    RoomUnavailable = 4002,
    /// Room id was produced by a degraded resolution tier
    RoomResolutionDegraded = 4003,

    // ==================== 5xxx: Check-in ====================
    /// Backend rejected the check-in submission
    CheckInRejected = 5001,
    /// Backend accepted the check-in but failed to open a folio
    FolioOpenFailed = 5002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Network transport failure
    NetworkError = 9002,
    /// Backend response could not be decoded
    InvalidResponse = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::NotFound => "Resource not found",
            Self::InvalidRequest => "Invalid request",
            Self::RequiredField => "Required field missing",

            Self::NotAuthenticated => "Authentication required",
            Self::TokenExpired => "Token expired",
            Self::TokenInvalid => "Invalid token",

            Self::ValidationFailed => "Validation failed",
            Self::DateOrderInvalid => "Check-out date must be after check-in date",
            Self::GuestCountInvalid => "At least one guest is required",
            Self::WalkInContactMissing => "Walk-in contact data incomplete",
            Self::PayloadInvalid => "Assembled payload failed verification",

            Self::ReservationNotFound => "Reservation not found",
            Self::ReservationRequired => "Reservation id is required",
            Self::ReservationAlreadyCheckedIn => "Reservation already checked in",

            Self::RoomNotFound => "Room not found",
            Self::RoomUnavailable => "Room not available",
            Self::RoomResolutionDegraded => "Room resolved by degraded fallback",

            Self::CheckInRejected => "Check-in rejected",
            Self::FolioOpenFailed => "Folio could not be opened",

            Self::InternalError => "Internal error",
            Self::NetworkError => "Network error",
            Self::InvalidResponse => "Invalid backend response",
        }
    }

    /// Get the HTTP status this code maps to
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound | Self::ReservationNotFound | Self::RoomNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::InvalidRequest | Self::RequiredField => StatusCode::BAD_REQUEST,

            Self::NotAuthenticated | Self::TokenExpired | Self::TokenInvalid => {
                StatusCode::UNAUTHORIZED
            }

            Self::ValidationFailed
            | Self::DateOrderInvalid
            | Self::GuestCountInvalid
            | Self::WalkInContactMissing
            | Self::PayloadInvalid
            | Self::ReservationRequired
            | Self::ReservationAlreadyCheckedIn
            | Self::RoomUnavailable
            | Self::RoomResolutionDegraded
            | Self::CheckInRejected
            | Self::FolioOpenFailed => StatusCode::UNPROCESSABLE_ENTITY,

            Self::InternalError | Self::NetworkError | Self::InvalidResponse => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when a u16 value does not map to a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            1 => Ok(Self::Unknown),
            3 => Ok(Self::NotFound),
            5 => Ok(Self::InvalidRequest),
            7 => Ok(Self::RequiredField),

            1001 => Ok(Self::NotAuthenticated),
            1003 => Ok(Self::TokenExpired),
            1004 => Ok(Self::TokenInvalid),

            2001 => Ok(Self::ValidationFailed),
            2002 => Ok(Self::DateOrderInvalid),
            2003 => Ok(Self::GuestCountInvalid),
            2004 => Ok(Self::WalkInContactMissing),
            2005 => Ok(Self::PayloadInvalid),

            3001 => Ok(Self::ReservationNotFound),
            3002 => Ok(Self::ReservationRequired),
            3003 => Ok(Self::ReservationAlreadyCheckedIn),

            4001 => Ok(Self::RoomNotFound),
            4002 => Ok(Self::RoomUnavailable),
            4003 => Ok(Self::RoomResolutionDegraded),

            5001 => Ok(Self::CheckInRejected),
            5002 => Ok(Self::FolioOpenFailed),

            9001 => Ok(Self::InternalError),
            9002 => Ok(Self::NetworkError),
            9003 => Ok(Self::InvalidResponse),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}
