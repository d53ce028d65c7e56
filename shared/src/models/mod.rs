//! Data models
//!
//! Wire DTOs shared between the front-desk client and the PMS REST API.
//! Field names on payload/inventory types are the PMS's own and must not
//! be renamed. All ids are `i64`.

pub mod check_in;
pub mod room;

// Re-exports
pub use check_in::*;
pub use room::*;
