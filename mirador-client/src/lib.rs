//! Mirador Client - check-in submission pipeline for the PMS front desk
//!
//! The PMS exposes no endpoint to read a reservation's authoritative state
//! before submitting, so this client carries the validation, identifier
//! resolution, and fallback logic that would normally live server-side:
//!
//! - [`validate_check_in_data`]: local request validation, no I/O
//! - [`resolve_room`]: free-text room number -> canonical numeric id
//! - [`assemble`] / [`verify`]: payload construction plus an independent
//!   verification pass
//! - [`CheckInPipeline`]: orchestrates the stages and issues the single
//!   network write
//! - [`classify`]: normalizes heterogeneous failures into a closed taxonomy

pub mod classify;
pub mod config;
pub mod error;
pub mod http;
pub mod inventory;
pub mod payload;
pub mod resolve;
pub mod submit;
pub mod validate;

pub use classify::{ClassifiedError, ErrorKind};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, ErrorBody};
pub use http::HttpClient;
pub use inventory::{CheckInTransport, RoomInventory};
pub use payload::{ClientId, assemble, verify};
pub use resolve::{MatchTier, ResolvedRoom, resolve_room};
pub use submit::{CheckInPipeline, PipelineStage, SubmissionSource};
pub use validate::{ValidationOutcome, validate_check_in_data};

// Re-export shared types for convenience
pub use shared::ApiResponse;
pub use shared::models::{
    CheckInData, CheckInPayload, CheckInRequest, DataOrigin, PaymentMethod, Room,
    SubmissionResult,
};
