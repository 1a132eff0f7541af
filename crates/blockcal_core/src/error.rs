//! Ledger error taxonomy.
//!
//! # Responsibility
//! - Give every rejected call one typed failure kind plus a readable reason.
//! - Provide stable machine codes for log events and callers.
//!
//! # Invariants
//! - A call that returns an error has not changed any state.

use crate::config::ConfigError;
use crate::model::address::Address;
use crate::model::booking::SlotId;
use crate::model::company::CompanyId;
use crate::model::room::RoomId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type LedgerResult<T> = Result<T, LedgerError>;

/// Target of a `NotFound` failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityRef {
    Company(CompanyId),
    Employee(Address),
    Room(RoomId),
}

impl Display for EntityRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Company(id) => write!(f, "company {id}"),
            Self::Employee(addr) => write!(f, "employee {addr}"),
            Self::Room(id) => write!(f, "room {id}"),
        }
    }
}

/// Kind of entity whose id counter ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterKind {
    Company,
    Room,
}

/// Errors from registry and ledger operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Caller is not the owner, or not the holder of the booking.
    Unauthorized { caller: Address },
    /// Another existing company already uses this name.
    DuplicateName(String),
    /// Address is already registered to an existing employee.
    DuplicateEmployee(Address),
    /// Referenced company does not exist.
    CompanyNotFound(CompanyId),
    /// Referenced room does not exist.
    RoomNotFound(RoomId),
    /// Caller is not an existing employee.
    EmployeeNotFound(Address),
    /// Target of a delete or lookup does not exist.
    NotFound(EntityRef),
    /// No active booking for this room and slot.
    SlotNotBooked { room_id: RoomId, slot_id: SlotId },
    /// Room and slot are already held by a booking.
    SlotAlreadyBooked {
        room_id: RoomId,
        slot_id: SlotId,
        booked_by: Address,
    },
    /// Slot id is outside `1..=slots_per_day`.
    InvalidSlot { slot_id: SlotId, slots_per_day: u32 },
    /// Room batch size is outside `1..=max`.
    InvalidRoomCount { count: u32, max: u32 },
    /// Name is blank after trimming.
    InvalidName,
    /// Booking scope forbids booking rooms of another company.
    RoomNotInCompany {
        room_id: RoomId,
        company_id: CompanyId,
    },
    /// Monotonic id counter cannot allocate more ids.
    IdSpaceExhausted(CounterKind),
    /// Ledger configuration is invalid.
    Config(ConfigError),
}

impl LedgerError {
    /// Stable snake_case code for logs and callers.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized { .. } => "unauthorized",
            Self::DuplicateName(_) => "duplicate_name",
            Self::DuplicateEmployee(_) => "duplicate_employee",
            Self::CompanyNotFound(_) => "company_not_found",
            Self::RoomNotFound(_) => "room_not_found",
            Self::EmployeeNotFound(_) => "employee_not_found",
            Self::NotFound(_) => "not_found",
            Self::SlotNotBooked { .. } => "slot_not_booked",
            Self::SlotAlreadyBooked { .. } => "slot_already_booked",
            Self::InvalidSlot { .. } => "invalid_slot",
            Self::InvalidRoomCount { .. } => "invalid_room_count",
            Self::InvalidName => "invalid_name",
            Self::RoomNotInCompany { .. } => "room_not_in_company",
            Self::IdSpaceExhausted(_) => "id_space_exhausted",
            Self::Config(_) => "invalid_config",
        }
    }
}

impl Display for LedgerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized { caller } => write!(f, "caller {caller} is not authorized"),
            Self::DuplicateName(name) => write!(f, "company with name `{name}` already exists"),
            Self::DuplicateEmployee(addr) => write!(f, "employee {addr} already exists"),
            Self::CompanyNotFound(id) => write!(f, "company does not exist: {id}"),
            Self::RoomNotFound(id) => write!(f, "room does not exist: {id}"),
            Self::EmployeeNotFound(addr) => write!(f, "employee does not exist: {addr}"),
            Self::NotFound(target) => write!(f, "{target} does not exist"),
            Self::SlotNotBooked { room_id, slot_id } => {
                write!(f, "slot {slot_id} of room {room_id} is not booked")
            }
            Self::SlotAlreadyBooked {
                room_id,
                slot_id,
                booked_by,
            } => write!(
                f,
                "slot {slot_id} of room {room_id} is already booked by {booked_by}"
            ),
            Self::InvalidSlot {
                slot_id,
                slots_per_day,
            } => write!(f, "slot {slot_id} is outside 1..={slots_per_day}"),
            Self::InvalidRoomCount { count, max } => {
                write!(f, "room count {count} is outside 1..={max}")
            }
            Self::InvalidName => write!(f, "name must not be blank"),
            Self::RoomNotInCompany {
                room_id,
                company_id,
            } => write!(f, "room {room_id} does not belong to company {company_id}"),
            Self::IdSpaceExhausted(kind) => match kind {
                CounterKind::Company => write!(f, "company id space exhausted"),
                CounterKind::Room => write!(f, "room id space exhausted"),
            },
            Self::Config(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LedgerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for LedgerError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{EntityRef, LedgerError};

    #[test]
    fn codes_are_stable_snake_case() {
        assert_eq!(LedgerError::InvalidName.code(), "invalid_name");
        assert_eq!(
            LedgerError::NotFound(EntityRef::Room(3)).code(),
            "not_found"
        );
        assert_eq!(
            LedgerError::SlotNotBooked {
                room_id: 1,
                slot_id: 2
            }
            .code(),
            "slot_not_booked"
        );
    }

    #[test]
    fn display_names_the_missing_entity() {
        let err = LedgerError::NotFound(EntityRef::Company(7));
        assert_eq!(err.to_string(), "company 7 does not exist");
    }
}
