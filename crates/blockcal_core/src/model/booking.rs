//! Booked slot record.

use super::address::Address;
use super::room::RoomId;
use serde::{Deserialize, Serialize};

/// One of the day's hourly intervals, numbered from 1.
pub type SlotId = u32;

/// Active booking of one room for one hourly slot.
///
/// At most one record exists per `(room_id, slot_id)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedSlot {
    pub room_id: RoomId,
    pub slot_id: SlotId,
    pub booked_by: Address,
}

impl BookedSlot {
    pub fn key(&self) -> (RoomId, SlotId) {
        (self.room_id, self.slot_id)
    }
}
