//! Core domain logic for BlockCal.
//! This crate is the single source of truth for registry and booking
//! invariants.

pub mod access;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use access::AccessControl;
pub use config::{BookingScope, ConfigError, LedgerConfig};
pub use error::{CounterKind, EntityRef, LedgerError, LedgerResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::address::{Address, AddressError};
pub use model::booking::{BookedSlot, SlotId};
pub use model::company::{Company, CompanyId};
pub use model::employee::Employee;
pub use model::room::{Room, RoomId};
pub use service::cascade::CascadeReport;
pub use service::ledger_service::Ledger;
pub use service::query::{CalendarSlot, LedgerStats};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
