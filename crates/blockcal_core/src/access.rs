//! Single-owner access control.
//!
//! # Invariants
//! - The owner is fixed at construction and never changes.

use crate::error::{LedgerError, LedgerResult};
use crate::model::address::Address;

/// Holds the administrative owner identity.
#[derive(Debug, Clone)]
pub struct AccessControl {
    owner: Address,
}

impl AccessControl {
    pub fn new(owner: Address) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> &Address {
        &self.owner
    }

    pub fn is_owner(&self, caller: &Address) -> bool {
        &self.owner == caller
    }

    /// Fails with `Unauthorized` unless `caller` is the owner.
    pub fn require_owner(&self, caller: &Address) -> LedgerResult<()> {
        if !self.is_owner(caller) {
            return Err(LedgerError::Unauthorized {
                caller: caller.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::AccessControl;
    use crate::error::LedgerError;
    use crate::model::address::Address;

    #[test]
    fn only_the_owner_passes() {
        let owner = Address::parse("0x00000000000000000000000000000000000000aa").unwrap();
        let other = Address::parse("0x00000000000000000000000000000000000000bb").unwrap();
        let access = AccessControl::new(owner.clone());

        assert!(access.is_owner(&owner));
        assert!(!access.is_owner(&other));
        access.require_owner(&owner).expect("owner should pass");
        let err = access.require_owner(&other).unwrap_err();
        assert!(matches!(err, LedgerError::Unauthorized { caller } if caller == other));
    }
}
