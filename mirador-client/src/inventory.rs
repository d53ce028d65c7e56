//! Network seams for the check-in pipeline
//!
//! The pipeline talks to the PMS through these traits so resolution and
//! submission stay testable without sockets. [`crate::HttpClient`]
//! implements both against the live backend.

use crate::error::ClientResult;
use async_trait::async_trait;
use shared::ApiResponse;
use shared::models::{CheckInData, CheckInPayload, Room};

/// Read access to the PMS room inventory
///
/// "List rooms" is the only read primitive the backend exposes for room
/// data; both methods map onto `GET /habitaciones`.
#[async_trait]
pub trait RoomInventory: Send + Sync {
    /// List rooms whose `numero` matches the given value exactly
    async fn find_by_number(&self, numero: &str) -> ClientResult<Vec<Room>>;

    /// List the full room inventory
    async fn list_all(&self) -> ClientResult<Vec<Room>>;
}

/// Write access to the PMS check-in endpoint
#[async_trait]
pub trait CheckInTransport: Send + Sync {
    /// Submit a verified payload for the given reservation reference
    ///
    /// Maps onto `POST /frontdesk/reserva/{reserva}/checkin`.
    async fn submit_check_in(
        &self,
        reservation_ref: &str,
        payload: &CheckInPayload,
    ) -> ClientResult<ApiResponse<CheckInData>>;
}
