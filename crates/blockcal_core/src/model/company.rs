//! Company record.

use serde::{Deserialize, Serialize};

/// Company identifier, allocated from a counter starting at 1.
pub type CompanyId = u32;

/// Company owned by `CompanyRegistry`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    /// Unique among existing companies. Cleared on removal.
    pub name: String,
    pub exists: bool,
}

impl Company {
    pub fn new(id: CompanyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            exists: true,
        }
    }

    /// Moves the record into its removed state and frees the name.
    pub fn retire(&mut self) {
        self.exists = false;
        self.name.clear();
    }
}
