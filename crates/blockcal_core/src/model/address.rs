//! Caller identity value.
//!
//! # Responsibility
//! - Parse and normalize the external identity used for the owner, employees
//!   and booking holders.
//!
//! # Invariants
//! - A parsed `Address` is always `0x` followed by 40 lowercase hex digits.
//! - Two addresses that differ only in hex digit case are the same identity.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0[xX][0-9a-fA-F]{40}$").expect("valid address regex"));

/// Authenticated caller identity (20-byte hex account address).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Parses one address from its textual form.
    ///
    /// Surrounding whitespace is ignored and hex digits are lowercased.
    pub fn parse(value: &str) -> Result<Self, AddressError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AddressError::Empty);
        }
        if !ADDRESS_RE.is_match(trimmed) {
            return Err(AddressError::Malformed(trimmed.to_string()));
        }
        Ok(Self(format!("0x{}", trimmed[2..].to_ascii_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Shortened form for log lines, e.g. `0x1234..abcd`.
    pub fn short(&self) -> String {
        format!("{}..{}", &self.0[..6], &self.0[self.0.len() - 4..])
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Address> for String {
    fn from(value: Address) -> Self {
        value.0
    }
}

/// Address parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    Empty,
    Malformed(String),
}

impl Display for AddressError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "address must not be empty"),
            Self::Malformed(value) => {
                write!(f, "address must be 0x followed by 40 hex digits, got `{value}`")
            }
        }
    }
}

impl Error for AddressError {}
