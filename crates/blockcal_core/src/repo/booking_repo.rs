//! Booking ledger.
//!
//! # Responsibility
//! - Store active bookings keyed by `(room_id, slot_id)`.
//! - Preserve insertion order for enumeration.
//!
//! # Invariants
//! - `holders` and `slots` always describe the same set of bookings.
//! - Removals never reorder surviving bookings.

use crate::error::{LedgerError, LedgerResult};
use crate::model::address::Address;
use crate::model::booking::{BookedSlot, SlotId};
use crate::model::room::RoomId;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct BookingLedger {
    slots: Vec<BookedSlot>,
    holders: HashMap<(RoomId, SlotId), Address>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current holder of one room slot, if booked.
    pub fn holder(&self, room_id: RoomId, slot_id: SlotId) -> Option<&Address> {
        self.holders.get(&(room_id, slot_id))
    }

    pub fn is_booked(&self, room_id: RoomId, slot_id: SlotId) -> bool {
        self.holders.contains_key(&(room_id, slot_id))
    }

    /// Appends one booking. Employee and room checks are done by the caller.
    pub fn insert(&mut self, slot: BookedSlot) -> LedgerResult<()> {
        if let Some(holder) = self.holder(slot.room_id, slot.slot_id) {
            return Err(LedgerError::SlotAlreadyBooked {
                room_id: slot.room_id,
                slot_id: slot.slot_id,
                booked_by: holder.clone(),
            });
        }

        self.holders.insert(slot.key(), slot.booked_by.clone());
        self.slots.push(slot);
        Ok(())
    }

    /// Removes the booking held by `caller`.
    ///
    /// Fails with `SlotNotBooked` when no booking exists and `Unauthorized`
    /// when somebody else holds it.
    pub fn remove(
        &mut self,
        caller: &Address,
        room_id: RoomId,
        slot_id: SlotId,
    ) -> LedgerResult<BookedSlot> {
        let holder = self
            .holder(room_id, slot_id)
            .ok_or(LedgerError::SlotNotBooked { room_id, slot_id })?;
        if holder != caller {
            return Err(LedgerError::Unauthorized {
                caller: caller.clone(),
            });
        }

        self.holders.remove(&(room_id, slot_id));
        let position = self
            .slots
            .iter()
            .position(|slot| slot.key() == (room_id, slot_id))
            .ok_or(LedgerError::SlotNotBooked { room_id, slot_id })?;
        Ok(self.slots.remove(position))
    }

    /// Removes every booking held by `addr`; returns how many were removed.
    pub fn release_all_for(&mut self, addr: &Address) -> usize {
        self.release_where(|slot| &slot.booked_by == addr)
    }

    /// Removes every booking of `room_id`; returns how many were removed.
    pub fn release_all_for_room(&mut self, room_id: RoomId) -> usize {
        self.release_where(|slot| slot.room_id == room_id)
    }

    /// Active bookings in insertion order.
    pub fn list(&self) -> &[BookedSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn release_where(&mut self, predicate: impl Fn(&BookedSlot) -> bool) -> usize {
        let before = self.slots.len();
        let holders = &mut self.holders;
        self.slots.retain(|slot| {
            if predicate(slot) {
                holders.remove(&slot.key());
                false
            } else {
                true
            }
        });
        before - self.slots.len()
    }
}

#[cfg(test)]
mod tests {
    use super::BookingLedger;
    use crate::error::LedgerError;
    use crate::model::address::Address;
    use crate::model::booking::BookedSlot;

    fn addr(n: u8) -> Address {
        Address::parse(&format!("0x{n:040x}")).unwrap()
    }

    fn slot(room_id: u32, slot_id: u32, by: u8) -> BookedSlot {
        BookedSlot {
            room_id,
            slot_id,
            booked_by: addr(by),
        }
    }

    #[test]
    fn insert_rejects_taken_slot() {
        let mut ledger = BookingLedger::new();
        ledger.insert(slot(1, 1, 1)).unwrap();

        let err = ledger.insert(slot(1, 1, 2)).unwrap_err();
        assert_eq!(
            err,
            LedgerError::SlotAlreadyBooked {
                room_id: 1,
                slot_id: 1,
                booked_by: addr(1),
            }
        );
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn remove_checks_holder_then_deletes() {
        let mut ledger = BookingLedger::new();
        ledger.insert(slot(1, 1, 1)).unwrap();

        let err = ledger.remove(&addr(2), 1, 1).unwrap_err();
        assert!(matches!(err, LedgerError::Unauthorized { .. }));
        assert!(ledger.is_booked(1, 1));

        let removed = ledger.remove(&addr(1), 1, 1).unwrap();
        assert_eq!(removed, slot(1, 1, 1));
        assert!(!ledger.is_booked(1, 1));

        let err = ledger.remove(&addr(1), 1, 1).unwrap_err();
        assert_eq!(
            err,
            LedgerError::SlotNotBooked {
                room_id: 1,
                slot_id: 1
            }
        );
    }

    #[test]
    fn releases_keep_survivor_order() {
        let mut ledger = BookingLedger::new();
        ledger.insert(slot(1, 1, 1)).unwrap();
        ledger.insert(slot(2, 1, 2)).unwrap();
        ledger.insert(slot(1, 2, 1)).unwrap();
        ledger.insert(slot(3, 4, 2)).unwrap();
        ledger.insert(slot(2, 5, 1)).unwrap();

        assert_eq!(ledger.release_all_for_room(2), 2);
        assert_eq!(ledger.list(), &[slot(1, 1, 1), slot(1, 2, 1), slot(3, 4, 2)]);

        assert_eq!(ledger.release_all_for(&addr(1)), 2);
        assert_eq!(ledger.list(), &[slot(3, 4, 2)]);
        assert!(!ledger.is_booked(1, 1));
        assert!(ledger.is_booked(3, 4));
    }
}
