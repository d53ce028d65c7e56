//! Room Inventory Model

use serde::{Deserialize, Serialize};

/// Room inventory entry as returned by `GET /habitaciones`
///
/// `numero` is the human-facing room label; `id` is the PMS's internal
/// numeric key. The two are not guaranteed to align: the same physical room
/// may carry a label that does not equal its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub numero: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
}

impl Room {
    /// Create an inventory entry without a type
    pub fn new(id: i64, numero: impl Into<String>) -> Self {
        Self {
            id,
            numero: numero.into(),
            tipo: None,
        }
    }
}
