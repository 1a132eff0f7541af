//! Ledger configuration.
//!
//! # Responsibility
//! - Hold the booking and room policy knobs for one ledger instance.
//! - Validate them before a ledger is constructed.
//!
//! # Invariants
//! - `slots_per_day` is in `1..=24`.
//! - `max_rooms_per_batch` is at least 1.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Hourly slots in one day.
pub const MAX_SLOTS_PER_DAY: u32 = 24;
/// Default upper bound for one `add_rooms` call.
pub const DEFAULT_MAX_ROOMS_PER_BATCH: u32 = 10;

/// Which rooms an employee may book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingScope {
    /// Any existing room, regardless of its company.
    #[default]
    AnyCompany,
    /// Only rooms of the employee's own company.
    OwnCompany,
}

/// Policy configuration for one ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    pub slots_per_day: u32,
    pub max_rooms_per_batch: u32,
    pub booking_scope: BookingScope,
    /// Re-booking a slot the caller already holds succeeds without change.
    pub allow_rebooking_own_slot: bool,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            slots_per_day: MAX_SLOTS_PER_DAY,
            max_rooms_per_batch: DEFAULT_MAX_ROOMS_PER_BATCH,
            booking_scope: BookingScope::AnyCompany,
            allow_rebooking_own_slot: false,
        }
    }
}

impl LedgerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slots_per_day == 0 || self.slots_per_day > MAX_SLOTS_PER_DAY {
            return Err(ConfigError::SlotsPerDayOutOfRange(self.slots_per_day));
        }
        if self.max_rooms_per_batch == 0 {
            return Err(ConfigError::ZeroRoomBatch);
        }
        Ok(())
    }

    /// Returns whether `slot_id` names one of the day's slots.
    pub fn is_valid_slot(&self, slot_id: u32) -> bool {
        (1..=self.slots_per_day).contains(&slot_id)
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    SlotsPerDayOutOfRange(u32),
    ZeroRoomBatch,
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SlotsPerDayOutOfRange(value) => write!(
                f,
                "slots_per_day must be in 1..={MAX_SLOTS_PER_DAY}, got {value}"
            ),
            Self::ZeroRoomBatch => write!(f, "max_rooms_per_batch must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
