//! Registry and booking use-case service.
//!
//! # Responsibility
//! - Gate structural mutations behind the owner identity.
//! - Check cross-entity references before any registry write.
//! - Run the deletion cascade inside the deleting call.
//!
//! # Invariants
//! - Every mutating call validates fully before its first write, so a failed
//!   call leaves no partial state.
//! - Employees and rooms only ever reference existing companies; bookings
//!   only ever reference existing rooms.

use crate::access::AccessControl;
use crate::config::{BookingScope, LedgerConfig};
use crate::error::{CounterKind, EntityRef, LedgerError, LedgerResult};
use crate::model::address::Address;
use crate::model::booking::{BookedSlot, SlotId};
use crate::model::company::CompanyId;
use crate::model::room::RoomId;
use crate::repo::booking_repo::BookingLedger;
use crate::repo::company_repo::CompanyRegistry;
use crate::repo::employee_repo::EmployeeRegistry;
use crate::repo::room_repo::RoomRegistry;
use crate::service::cascade::{CascadeCoordinator, CascadeReport};
use log::{info, warn};

/// Single-owner registry of companies, employees, rooms and bookings.
#[derive(Debug)]
pub struct Ledger {
    pub(crate) access: AccessControl,
    pub(crate) config: LedgerConfig,
    pub(crate) companies: CompanyRegistry,
    pub(crate) employees: EmployeeRegistry,
    pub(crate) rooms: RoomRegistry,
    pub(crate) bookings: BookingLedger,
}

impl Ledger {
    /// Creates an empty ledger owned by `owner` with default policy.
    pub fn new(owner: Address) -> Self {
        Self::build(owner, LedgerConfig::default())
    }

    /// Creates an empty ledger after validating `config`.
    pub fn with_config(owner: Address, config: LedgerConfig) -> LedgerResult<Self> {
        config
            .validate()
            .map_err(|err| logged_rejection("ledger_init", LedgerError::from(err)))?;
        Ok(Self::build(owner, config))
    }

    fn build(owner: Address, config: LedgerConfig) -> Self {
        info!(
            "event=ledger_init module=ledger status=ok owner={} slots_per_day={} max_rooms_per_batch={}",
            owner.short(),
            config.slots_per_day,
            config.max_rooms_per_batch
        );
        Self {
            access: AccessControl::new(owner),
            config,
            companies: CompanyRegistry::new(),
            employees: EmployeeRegistry::new(),
            rooms: RoomRegistry::new(),
            bookings: BookingLedger::new(),
        }
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Registers a company and returns its id.
    ///
    /// # Errors
    /// - `Unauthorized` when `caller` is not the owner.
    /// - `InvalidName` when `name` is blank.
    /// - `DuplicateName` when an existing company already uses `name`.
    pub fn add_company(&mut self, caller: &Address, name: &str) -> LedgerResult<CompanyId> {
        logged("company_add", self.apply_add_company(caller, name))
    }

    fn apply_add_company(&mut self, caller: &Address, name: &str) -> LedgerResult<CompanyId> {
        self.access.require_owner(caller)?;
        let name = normalize_name(name)?;
        let id = self.companies.insert(&name)?;
        info!("event=company_add module=ledger status=ok company_id={id}");
        Ok(id)
    }

    /// Removes a company together with its employees, rooms and bookings.
    ///
    /// # Errors
    /// - `Unauthorized` when `caller` is not the owner.
    /// - `NotFound` when the company does not exist.
    pub fn remove_company(
        &mut self,
        caller: &Address,
        company_id: CompanyId,
    ) -> LedgerResult<CascadeReport> {
        logged("company_remove", self.apply_remove_company(caller, company_id))
    }

    fn apply_remove_company(
        &mut self,
        caller: &Address,
        company_id: CompanyId,
    ) -> LedgerResult<CascadeReport> {
        self.access.require_owner(caller)?;
        if !self.companies.contains(company_id) {
            return Err(LedgerError::NotFound(EntityRef::Company(company_id)));
        }

        let report = self.cascade().cascade_company(company_id);
        // Existence was checked above, so retiring cannot fail here.
        self.companies.retire(company_id)?;
        info!(
            "event=company_remove module=ledger status=ok company_id={} employees={} rooms={} bookings={}",
            company_id,
            report.employees_removed.len(),
            report.rooms_removed.len(),
            report.bookings_released
        );
        Ok(report)
    }

    /// Registers `addr` as an employee of `company_id`.
    ///
    /// # Errors
    /// - `Unauthorized` when `caller` is not the owner.
    /// - `InvalidName` when `name` is blank.
    /// - `CompanyNotFound` when the company does not exist.
    /// - `DuplicateEmployee` when `addr` is already registered anywhere.
    pub fn add_employee(
        &mut self,
        caller: &Address,
        addr: &Address,
        company_id: CompanyId,
        name: &str,
    ) -> LedgerResult<()> {
        logged(
            "employee_add",
            self.apply_add_employee(caller, addr, company_id, name),
        )
    }

    fn apply_add_employee(
        &mut self,
        caller: &Address,
        addr: &Address,
        company_id: CompanyId,
        name: &str,
    ) -> LedgerResult<()> {
        self.access.require_owner(caller)?;
        let name = normalize_name(name)?;
        if !self.companies.contains(company_id) {
            return Err(LedgerError::CompanyNotFound(company_id));
        }
        self.employees.insert(addr, company_id, &name)?;
        info!(
            "event=employee_add module=ledger status=ok employee={} company_id={}",
            addr.short(),
            company_id
        );
        Ok(())
    }

    /// Removes an employee and releases every booking it holds.
    ///
    /// # Errors
    /// - `Unauthorized` when `caller` is not the owner.
    /// - `NotFound` when no employee exists at `addr`.
    pub fn remove_employee(
        &mut self,
        caller: &Address,
        addr: &Address,
    ) -> LedgerResult<CascadeReport> {
        logged("employee_remove", self.apply_remove_employee(caller, addr))
    }

    fn apply_remove_employee(
        &mut self,
        caller: &Address,
        addr: &Address,
    ) -> LedgerResult<CascadeReport> {
        self.access.require_owner(caller)?;
        if self.employees.get(addr, false).is_none() {
            return Err(LedgerError::NotFound(EntityRef::Employee(addr.clone())));
        }

        let mut report = self.cascade().cascade_employee(addr);
        self.employees.retire(addr)?;
        report.employees_removed.push(addr.clone());
        info!(
            "event=employee_remove module=ledger status=ok employee={} bookings={}",
            addr.short(),
            report.bookings_released
        );
        Ok(report)
    }

    /// Adds one room to `company_id` and returns its id.
    pub fn add_room(&mut self, caller: &Address, company_id: CompanyId) -> LedgerResult<RoomId> {
        let ids = logged("room_add", self.apply_add_rooms(caller, company_id, 1))?;
        ids.into_iter()
            .next()
            .ok_or(LedgerError::IdSpaceExhausted(CounterKind::Room))
    }

    /// Adds `count` rooms to `company_id` from the global room counter.
    ///
    /// # Errors
    /// - `Unauthorized` when `caller` is not the owner.
    /// - `InvalidRoomCount` when `count` is outside `1..=max_rooms_per_batch`.
    /// - `CompanyNotFound` when the company does not exist.
    pub fn add_rooms(
        &mut self,
        caller: &Address,
        company_id: CompanyId,
        count: u32,
    ) -> LedgerResult<Vec<RoomId>> {
        logged("room_add", self.apply_add_rooms(caller, company_id, count))
    }

    fn apply_add_rooms(
        &mut self,
        caller: &Address,
        company_id: CompanyId,
        count: u32,
    ) -> LedgerResult<Vec<RoomId>> {
        self.access.require_owner(caller)?;
        let max = self.config.max_rooms_per_batch;
        if count == 0 || count > max {
            return Err(LedgerError::InvalidRoomCount { count, max });
        }
        if !self.companies.contains(company_id) {
            return Err(LedgerError::CompanyNotFound(company_id));
        }

        let ids = self.rooms.allocate(company_id, count)?;
        info!(
            "event=room_add module=ledger status=ok company_id={} count={} first_room_id={}",
            company_id,
            ids.len(),
            ids.first().copied().unwrap_or_default()
        );
        Ok(ids)
    }

    /// Removes a room and releases every booking of it.
    ///
    /// # Errors
    /// - `Unauthorized` when `caller` is not the owner.
    /// - `NotFound` when the room does not exist.
    pub fn remove_room(
        &mut self,
        caller: &Address,
        room_id: RoomId,
    ) -> LedgerResult<CascadeReport> {
        logged("room_remove", self.apply_remove_room(caller, room_id))
    }

    fn apply_remove_room(
        &mut self,
        caller: &Address,
        room_id: RoomId,
    ) -> LedgerResult<CascadeReport> {
        self.access.require_owner(caller)?;
        if !self.rooms.contains(room_id) {
            return Err(LedgerError::NotFound(EntityRef::Room(room_id)));
        }

        let mut report = self.cascade().cascade_room(room_id);
        self.rooms.retire(room_id)?;
        report.rooms_removed.push(room_id);
        info!(
            "event=room_remove module=ledger status=ok room_id={} bookings={}",
            room_id, report.bookings_released
        );
        Ok(report)
    }

    /// Books `slot_id` of `room_id` for the calling employee.
    ///
    /// Checks run in order: caller is an employee, slot is in range, room
    /// exists, booking scope allows the room, slot is free.
    ///
    /// # Errors
    /// - `EmployeeNotFound`, `InvalidSlot`, `RoomNotFound`,
    ///   `RoomNotInCompany`, `SlotAlreadyBooked`.
    pub fn book_slot(
        &mut self,
        caller: &Address,
        room_id: RoomId,
        slot_id: SlotId,
    ) -> LedgerResult<()> {
        logged("slot_book", self.apply_book_slot(caller, room_id, slot_id))
    }

    fn apply_book_slot(
        &mut self,
        caller: &Address,
        room_id: RoomId,
        slot_id: SlotId,
    ) -> LedgerResult<()> {
        let employee = self
            .employees
            .get(caller, false)
            .ok_or_else(|| LedgerError::EmployeeNotFound(caller.clone()))?;
        if !self.config.is_valid_slot(slot_id) {
            return Err(LedgerError::InvalidSlot {
                slot_id,
                slots_per_day: self.config.slots_per_day,
            });
        }
        let room = self
            .rooms
            .get(room_id, false)
            .ok_or(LedgerError::RoomNotFound(room_id))?;
        if self.config.booking_scope == BookingScope::OwnCompany
            && room.company_id != employee.company_id
        {
            return Err(LedgerError::RoomNotInCompany {
                room_id,
                company_id: employee.company_id,
            });
        }
        if self.config.allow_rebooking_own_slot
            && self.bookings.holder(room_id, slot_id) == Some(caller)
        {
            return Ok(());
        }

        self.bookings.insert(BookedSlot {
            room_id,
            slot_id,
            booked_by: caller.clone(),
        })?;
        info!(
            "event=slot_book module=ledger status=ok room_id={} slot_id={} employee={}",
            room_id,
            slot_id,
            caller.short()
        );
        Ok(())
    }

    /// Releases a booking held by the caller.
    ///
    /// # Errors
    /// - `SlotNotBooked` when the slot has no booking.
    /// - `Unauthorized` when another address holds the booking.
    pub fn unbook_slot(
        &mut self,
        caller: &Address,
        room_id: RoomId,
        slot_id: SlotId,
    ) -> LedgerResult<()> {
        logged("slot_unbook", self.apply_unbook_slot(caller, room_id, slot_id))
    }

    fn apply_unbook_slot(
        &mut self,
        caller: &Address,
        room_id: RoomId,
        slot_id: SlotId,
    ) -> LedgerResult<()> {
        self.bookings.remove(caller, room_id, slot_id)?;
        info!(
            "event=slot_unbook module=ledger status=ok room_id={} slot_id={} employee={}",
            room_id,
            slot_id,
            caller.short()
        );
        Ok(())
    }

    fn cascade(&mut self) -> CascadeCoordinator<'_> {
        CascadeCoordinator::new(&mut self.employees, &mut self.rooms, &mut self.bookings)
    }
}

fn normalize_name(value: &str) -> LedgerResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::InvalidName);
    }
    Ok(trimmed.to_string())
}

fn logged<T>(event: &str, result: LedgerResult<T>) -> LedgerResult<T> {
    result.map_err(|err| logged_rejection(event, err))
}

fn logged_rejection(event: &str, err: LedgerError) -> LedgerError {
    warn!(
        "event={} module=ledger status=rejected error_code={}",
        event,
        err.code()
    );
    err
}
