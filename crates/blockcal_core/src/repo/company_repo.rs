//! Company registry.
//!
//! # Invariants
//! - Ids start at 1 and increase by one per successful insert.
//! - `active_names` holds exactly the names of existing companies.

use crate::error::{CounterKind, EntityRef, LedgerError, LedgerResult};
use crate::model::company::{Company, CompanyId};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Default)]
pub struct CompanyRegistry {
    companies: BTreeMap<CompanyId, Company>,
    active_names: HashMap<String, CompanyId>,
    last_id: CompanyId,
}

impl CompanyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails with `DuplicateName` when an existing company uses `name`.
    pub fn ensure_name_available(&self, name: &str) -> LedgerResult<()> {
        if self.active_names.contains_key(name) {
            return Err(LedgerError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    /// Stores a new company and returns its id.
    pub fn insert(&mut self, name: &str) -> LedgerResult<CompanyId> {
        self.ensure_name_available(name)?;
        let id = self
            .last_id
            .checked_add(1)
            .ok_or(LedgerError::IdSpaceExhausted(CounterKind::Company))?;

        self.last_id = id;
        self.companies.insert(id, Company::new(id, name));
        self.active_names.insert(name.to_string(), id);
        Ok(id)
    }

    /// Loads one company; removed records only when `include_removed`.
    pub fn get(&self, id: CompanyId, include_removed: bool) -> Option<&Company> {
        self.companies
            .get(&id)
            .filter(|company| include_removed || company.exists)
    }

    pub fn contains(&self, id: CompanyId) -> bool {
        self.get(id, false).is_some()
    }

    /// Marks one existing company removed and frees its name.
    pub fn retire(&mut self, id: CompanyId) -> LedgerResult<()> {
        let company = self
            .companies
            .get_mut(&id)
            .filter(|company| company.exists)
            .ok_or(LedgerError::NotFound(EntityRef::Company(id)))?;

        self.active_names.remove(company.name.as_str());
        company.retire();
        Ok(())
    }

    /// Existing companies in ascending id order.
    pub fn list(&self) -> Vec<Company> {
        self.companies
            .values()
            .filter(|company| company.exists)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.active_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active_names.is_empty()
    }
}
