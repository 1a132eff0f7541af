//! Read-side queries over the ledger.
//!
//! Reads never check ownership and never change state. Company-scoped and
//! calendar views are joins computed on demand, not stored state.

use crate::error::{EntityRef, LedgerError, LedgerResult};
use crate::model::address::Address;
use crate::model::booking::{BookedSlot, SlotId};
use crate::model::company::{Company, CompanyId};
use crate::model::employee::Employee;
use crate::model::room::{Room, RoomId};
use crate::service::ledger_service::Ledger;
use serde::{Deserialize, Serialize};

/// Booked and free rooms for one hourly slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarSlot {
    pub slot_id: SlotId,
    pub booked: Vec<RoomId>,
    pub free: Vec<RoomId>,
}

/// Counts of existing entities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStats {
    pub companies: usize,
    pub employees: usize,
    pub rooms: usize,
    pub bookings: usize,
}

impl Ledger {
    pub fn owner(&self) -> &Address {
        self.access.owner()
    }

    pub fn is_owner(&self, caller: &Address) -> bool {
        self.access.is_owner(caller)
    }

    /// Returns the company only while it exists.
    pub fn get_company(&self, company_id: CompanyId) -> Option<Company> {
        self.companies.get(company_id, false).cloned()
    }

    /// Existing companies in ascending id order.
    pub fn list_companies(&self) -> Vec<Company> {
        self.companies.list()
    }

    /// Loads one employee.
    ///
    /// # Errors
    /// - `NotFound` when no employee exists at `addr`.
    pub fn get_employee(&self, addr: &Address) -> LedgerResult<Employee> {
        self.employees
            .get(addr, false)
            .cloned()
            .ok_or_else(|| LedgerError::NotFound(EntityRef::Employee(addr.clone())))
    }

    /// Existing employees in registration order.
    pub fn list_employees(&self) -> Vec<Employee> {
        self.employees.list()
    }

    pub fn list_employees_by_company(
        &self,
        company_id: CompanyId,
    ) -> LedgerResult<Vec<Employee>> {
        self.ensure_company(company_id)?;
        Ok(self.employees.list_by_company(company_id))
    }

    pub fn get_room(&self, room_id: RoomId) -> Option<Room> {
        self.rooms.get(room_id, false).cloned()
    }

    /// Existing rooms in ascending id order.
    pub fn list_rooms(&self) -> Vec<Room> {
        self.rooms.list()
    }

    pub fn list_rooms_by_company(&self, company_id: CompanyId) -> LedgerResult<Vec<Room>> {
        self.ensure_company(company_id)?;
        Ok(self.rooms.list_by_company(company_id))
    }

    pub fn is_booked(&self, room_id: RoomId, slot_id: SlotId) -> bool {
        self.bookings.is_booked(room_id, slot_id)
    }

    /// All active bookings in the order they were made.
    pub fn get_booked_slots(&self) -> Vec<BookedSlot> {
        self.bookings.list().to_vec()
    }

    pub fn get_booked_slots_for_room(&self, room_id: RoomId) -> Vec<BookedSlot> {
        self.filter_bookings(|slot| slot.room_id == room_id)
    }

    pub fn get_booked_slots_for(&self, addr: &Address) -> Vec<BookedSlot> {
        self.filter_bookings(|slot| &slot.booked_by == addr)
    }

    /// Existing rooms without a booking at `slot_id`, ascending id.
    ///
    /// # Errors
    /// - `InvalidSlot` when `slot_id` is outside the configured day.
    pub fn available_rooms(&self, slot_id: SlotId) -> LedgerResult<Vec<RoomId>> {
        if !self.config.is_valid_slot(slot_id) {
            return Err(LedgerError::InvalidSlot {
                slot_id,
                slots_per_day: self.config.slots_per_day,
            });
        }
        Ok(self
            .rooms
            .list()
            .into_iter()
            .map(|room| room.id)
            .filter(|room_id| !self.bookings.is_booked(*room_id, slot_id))
            .collect())
    }

    /// Booked and free rooms for every slot of the day.
    pub fn calendar(&self) -> Vec<CalendarSlot> {
        let rooms = self.rooms.list();
        (1..=self.config.slots_per_day)
            .map(|slot_id| {
                let (booked, free): (Vec<RoomId>, Vec<RoomId>) = rooms
                    .iter()
                    .map(|room| room.id)
                    .partition(|room_id| self.bookings.is_booked(*room_id, slot_id));
                CalendarSlot {
                    slot_id,
                    booked,
                    free,
                }
            })
            .collect()
    }

    pub fn stats(&self) -> LedgerStats {
        LedgerStats {
            companies: self.companies.len(),
            employees: self.employees.len(),
            rooms: self.rooms.len(),
            bookings: self.bookings.len(),
        }
    }

    fn ensure_company(&self, company_id: CompanyId) -> LedgerResult<()> {
        if !self.companies.contains(company_id) {
            return Err(LedgerError::CompanyNotFound(company_id));
        }
        Ok(())
    }

    fn filter_bookings(&self, predicate: impl Fn(&BookedSlot) -> bool) -> Vec<BookedSlot> {
        self.bookings
            .list()
            .iter()
            .filter(|slot| predicate(slot))
            .cloned()
            .collect()
    }
}
