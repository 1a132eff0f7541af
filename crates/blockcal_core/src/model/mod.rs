//! Registry and ledger domain model.
//!
//! # Responsibility
//! - Define the records owned by the company, employee and room registries
//!   and by the booking ledger.
//!
//! # Invariants
//! - Existence is an explicit `exists` flag, never inferred from field values.
//! - Company and room ids are allocated once and never reused.

pub mod address;
pub mod booking;
pub mod company;
pub mod employee;
pub mod room;
