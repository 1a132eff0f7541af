//! Room registry.
//!
//! # Invariants
//! - One global id counter serves every company; ids are never reused.
//! - A batch allocation either assigns all ids or none.

use crate::error::{CounterKind, EntityRef, LedgerError, LedgerResult};
use crate::model::company::CompanyId;
use crate::model::room::{Room, RoomId};
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: BTreeMap<RoomId, Room>,
    last_id: RoomId,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates `count` consecutive ids for `company_id`.
    ///
    /// Company existence and count bounds are checked by the caller.
    pub fn allocate(&mut self, company_id: CompanyId, count: u32) -> LedgerResult<Vec<RoomId>> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let last = self
            .last_id
            .checked_add(count)
            .ok_or(LedgerError::IdSpaceExhausted(CounterKind::Room))?;

        let ids: Vec<RoomId> = (self.last_id + 1..=last).collect();
        for id in &ids {
            self.rooms.insert(*id, Room::new(*id, company_id));
        }
        self.last_id = last;
        Ok(ids)
    }

    pub fn get(&self, id: RoomId, include_removed: bool) -> Option<&Room> {
        self.rooms
            .get(&id)
            .filter(|room| include_removed || room.exists)
    }

    pub fn contains(&self, id: RoomId) -> bool {
        self.get(id, false).is_some()
    }

    pub fn retire(&mut self, id: RoomId) -> LedgerResult<()> {
        let room = self
            .rooms
            .get_mut(&id)
            .filter(|room| room.exists)
            .ok_or(LedgerError::NotFound(EntityRef::Room(id)))?;
        room.retire();
        Ok(())
    }

    /// Retires every existing room of `company_id`; returns their ids.
    pub fn retire_company(&mut self, company_id: CompanyId) -> Vec<RoomId> {
        let mut retired = Vec::new();
        for room in self.rooms.values_mut() {
            if room.exists && room.company_id == company_id {
                room.retire();
                retired.push(room.id);
            }
        }
        retired
    }

    /// Existing rooms in ascending id order.
    pub fn list(&self) -> Vec<Room> {
        self.rooms
            .values()
            .filter(|room| room.exists)
            .cloned()
            .collect()
    }

    pub fn list_by_company(&self, company_id: CompanyId) -> Vec<Room> {
        self.rooms
            .values()
            .filter(|room| room.exists && room.company_id == company_id)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rooms.values().filter(|room| room.exists).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::RoomRegistry;
    use crate::error::{CounterKind, LedgerError};

    #[test]
    fn counter_is_shared_across_companies() {
        let mut registry = RoomRegistry::new();
        assert_eq!(registry.allocate(1, 3).unwrap(), vec![1, 2, 3]);
        assert_eq!(registry.allocate(2, 2).unwrap(), vec![4, 5]);

        registry.retire(5).unwrap();
        assert_eq!(registry.allocate(2, 1).unwrap(), vec![6]);
    }

    #[test]
    fn retire_clears_company_link() {
        let mut registry = RoomRegistry::new();
        registry.allocate(1, 1).unwrap();
        registry.retire(1).unwrap();

        assert!(!registry.contains(1));
        let tombstone = registry.get(1, true).unwrap();
        assert!(!tombstone.exists);
        assert_eq!(tombstone.company_id, 0);
    }

    #[test]
    fn exhausted_counter_allocates_nothing() {
        let mut registry = RoomRegistry::new();
        registry.last_id = u32::MAX - 1;

        let err = registry.allocate(1, 2).unwrap_err();
        assert_eq!(err, LedgerError::IdSpaceExhausted(CounterKind::Room));
        assert!(registry.is_empty());
        assert_eq!(registry.allocate(1, 1).unwrap(), vec![u32::MAX]);
    }
}
