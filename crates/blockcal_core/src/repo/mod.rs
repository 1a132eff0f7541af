//! In-memory registries and booking ledger.
//!
//! # Responsibility
//! - Own entity records, id counters and uniqueness indexes.
//! - Return semantic errors (`NotFound`, duplicates) for single-entity writes.
//!
//! # Invariants
//! - Removed records stay as tombstones with `exists=false`.
//! - Registries never reach into each other; cross-entity rules live in
//!   `service`.

pub mod booking_repo;
pub mod company_repo;
pub mod employee_repo;
pub mod room_repo;
