//! Room record.

use super::company::CompanyId;
use serde::{Deserialize, Serialize};

/// Room identifier from the single global room counter.
pub type RoomId = u32;

/// Meeting room owned by `RoomRegistry`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    /// Owning company. Zero once the room is removed.
    pub company_id: CompanyId,
    pub exists: bool,
}

impl Room {
    pub fn new(id: RoomId, company_id: CompanyId) -> Self {
        Self {
            id,
            company_id,
            exists: true,
        }
    }

    pub fn retire(&mut self) {
        self.exists = false;
        self.company_id = 0;
    }
}
