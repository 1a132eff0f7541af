//! Employee registry.
//!
//! # Invariants
//! - At most one existing employee per address.
//! - `order` lists existing employees in registration order.

use crate::error::{EntityRef, LedgerError, LedgerResult};
use crate::model::address::Address;
use crate::model::company::CompanyId;
use crate::model::employee::Employee;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct EmployeeRegistry {
    employees: BTreeMap<Address, Employee>,
    order: Vec<Address>,
}

impl EmployeeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `addr`. Company existence is checked by the caller.
    pub fn insert(
        &mut self,
        addr: &Address,
        company_id: CompanyId,
        name: &str,
    ) -> LedgerResult<()> {
        if self.get(addr, false).is_some() {
            return Err(LedgerError::DuplicateEmployee(addr.clone()));
        }

        // A tombstone for the same address is replaced by the new record.
        self.employees
            .insert(addr.clone(), Employee::new(addr.clone(), company_id, name));
        self.order.push(addr.clone());
        Ok(())
    }

    pub fn get(&self, addr: &Address, include_removed: bool) -> Option<&Employee> {
        self.employees
            .get(addr)
            .filter(|employee| include_removed || employee.exists)
    }

    pub fn retire(&mut self, addr: &Address) -> LedgerResult<()> {
        let employee = self
            .employees
            .get_mut(addr)
            .filter(|employee| employee.exists)
            .ok_or_else(|| LedgerError::NotFound(EntityRef::Employee(addr.clone())))?;

        employee.retire();
        self.order.retain(|candidate| candidate != addr);
        Ok(())
    }

    /// Retires every existing employee of `company_id`; returns their addresses.
    pub fn retire_company(&mut self, company_id: CompanyId) -> Vec<Address> {
        let mut retired = Vec::new();
        for employee in self.employees.values_mut() {
            if employee.exists && employee.company_id == company_id {
                employee.retire();
                retired.push(employee.addr.clone());
            }
        }
        self.order.retain(|addr| !retired.contains(addr));
        retired
    }

    /// Existing employees in registration order.
    pub fn list(&self) -> Vec<Employee> {
        self.order
            .iter()
            .filter_map(|addr| self.employees.get(addr))
            .cloned()
            .collect()
    }

    pub fn list_by_company(&self, company_id: CompanyId) -> Vec<Employee> {
        self.list()
            .into_iter()
            .filter(|employee| employee.company_id == company_id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
