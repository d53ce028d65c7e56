//! Shared types for the Mirador front-desk client
//!
//! Common types used across crates: wire DTOs for the PMS REST API,
//! the unified error system, and the response envelope.

pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
