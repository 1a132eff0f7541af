//! Deletion fan-out across registries.
//!
//! # Responsibility
//! - Remove every entity that references a parent being deleted.
//!
//! # Invariants
//! - Cascade steps never fail; callers validate the parent first.
//! - After `cascade_company(id)` no employee, room or booking refers to `id`.

use crate::model::address::Address;
use crate::model::company::CompanyId;
use crate::model::room::RoomId;
use crate::repo::booking_repo::BookingLedger;
use crate::repo::employee_repo::EmployeeRegistry;
use crate::repo::room_repo::RoomRegistry;
use log::debug;

/// Summary of what one deletion removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CascadeReport {
    pub employees_removed: Vec<Address>,
    pub rooms_removed: Vec<RoomId>,
    pub bookings_released: usize,
}

/// Borrowed view over the child registries of a deletion.
pub struct CascadeCoordinator<'a> {
    employees: &'a mut EmployeeRegistry,
    rooms: &'a mut RoomRegistry,
    bookings: &'a mut BookingLedger,
}

impl<'a> CascadeCoordinator<'a> {
    pub fn new(
        employees: &'a mut EmployeeRegistry,
        rooms: &'a mut RoomRegistry,
        bookings: &'a mut BookingLedger,
    ) -> Self {
        Self {
            employees,
            rooms,
            bookings,
        }
    }

    /// Removes the company's employees and rooms with all their bookings.
    pub fn cascade_company(&mut self, company_id: CompanyId) -> CascadeReport {
        let mut report = CascadeReport::default();

        for addr in self.employees.retire_company(company_id) {
            report.bookings_released += self.bookings.release_all_for(&addr);
            report.employees_removed.push(addr);
        }
        for room_id in self.rooms.retire_company(company_id) {
            report.bookings_released += self.bookings.release_all_for_room(room_id);
            report.rooms_removed.push(room_id);
        }

        debug!(
            "event=cascade_company module=cascade status=ok company_id={} employees={} rooms={} bookings={}",
            company_id,
            report.employees_removed.len(),
            report.rooms_removed.len(),
            report.bookings_released
        );
        report
    }

    /// Releases every booking held by `addr`.
    pub fn cascade_employee(&mut self, addr: &Address) -> CascadeReport {
        let released = self.bookings.release_all_for(addr);
        debug!(
            "event=cascade_employee module=cascade status=ok employee={} bookings={}",
            addr.short(),
            released
        );
        CascadeReport {
            bookings_released: released,
            ..CascadeReport::default()
        }
    }

    /// Releases every booking of `room_id`.
    pub fn cascade_room(&mut self, room_id: RoomId) -> CascadeReport {
        let released = self.bookings.release_all_for_room(room_id);
        debug!(
            "event=cascade_room module=cascade status=ok room_id={} bookings={}",
            room_id, released
        );
        CascadeReport {
            bookings_released: released,
            ..CascadeReport::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CascadeCoordinator;
    use crate::model::address::Address;
    use crate::model::booking::BookedSlot;
    use crate::repo::booking_repo::BookingLedger;
    use crate::repo::employee_repo::EmployeeRegistry;
    use crate::repo::room_repo::RoomRegistry;

    fn addr(n: u8) -> Address {
        Address::parse(&format!("0x{n:040x}")).unwrap()
    }

    #[test]
    fn company_cascade_spares_other_companies() {
        let mut employees = EmployeeRegistry::new();
        let mut rooms = RoomRegistry::new();
        let mut bookings = BookingLedger::new();

        employees.insert(&addr(1), 1, "Max").unwrap();
        employees.insert(&addr(2), 2, "Tyler").unwrap();
        rooms.allocate(1, 2).unwrap();
        rooms.allocate(2, 1).unwrap();
        for (room_id, slot_id, by) in [(1, 1, 1), (3, 1, 1), (3, 2, 2), (2, 5, 2)] {
            bookings
                .insert(BookedSlot {
                    room_id,
                    slot_id,
                    booked_by: addr(by),
                })
                .unwrap();
        }

        let report =
            CascadeCoordinator::new(&mut employees, &mut rooms, &mut bookings).cascade_company(1);

        assert_eq!(report.employees_removed, vec![addr(1)]);
        assert_eq!(report.rooms_removed, vec![1, 2]);
        // (1,1) and (3,1) by addr(1), then (2,5) on room 2.
        assert_eq!(report.bookings_released, 3);
        assert_eq!(bookings.len(), 1);
        assert!(bookings.is_booked(3, 2));
        assert!(employees.get(&addr(2), false).is_some());
        assert!(rooms.contains(3));
    }
}
