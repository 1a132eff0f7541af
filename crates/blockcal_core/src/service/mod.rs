//! Core use-case services.
//!
//! # Responsibility
//! - Expose the owner-gated mutations and read queries of the ledger.
//! - Coordinate cross-registry checks and deletion cascades.

pub mod cascade;
pub mod ledger_service;
pub mod query;
