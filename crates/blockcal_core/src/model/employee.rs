//! Employee record.

use super::address::Address;
use super::company::CompanyId;
use serde::{Deserialize, Serialize};

/// Employee owned by `EmployeeRegistry`, keyed by its address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub addr: Address,
    pub name: String,
    pub company_id: CompanyId,
    pub exists: bool,
}

impl Employee {
    pub fn new(addr: Address, company_id: CompanyId, name: impl Into<String>) -> Self {
        Self {
            addr,
            name: name.into(),
            company_id,
            exists: true,
        }
    }

    pub fn retire(&mut self) {
        self.exists = false;
    }
}
