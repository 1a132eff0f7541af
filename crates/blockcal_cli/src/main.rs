//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `blockcal_core` linkage with a deterministic scripted scenario.
//! - Optionally write core logs when given an absolute log directory.

use blockcal_core::{Address, Ledger, LedgerResult};
use std::process::ExitCode;

const OWNER: &str = "0x00000000000000000000000000000000000000a0";
const EMPLOYEE: &str = "0x0000000000000000000000000000000000000001";

fn main() -> ExitCode {
    if let Some(log_dir) = std::env::args().nth(1) {
        let level = blockcal_core::default_log_level();
        if let Err(err) = blockcal_core::init_logging(level, &log_dir) {
            eprintln!("blockcal_core logging disabled: {err}");
        }
    }

    println!("blockcal_core version={}", blockcal_core::core_version());
    match run_scenario() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("scenario failed: code={} reason={err}", err.code());
            ExitCode::FAILURE
        }
    }
}

fn run_scenario() -> LedgerResult<()> {
    let owner = parse(OWNER);
    let employee = parse(EMPLOYEE);
    let mut ledger = Ledger::new(owner.clone());

    let company_id = ledger.add_company(&owner, "Coke")?;
    ledger.add_employee(&owner, &employee, company_id, "Max")?;
    let room_id = ledger.add_room(&owner, company_id)?;
    ledger.book_slot(&employee, room_id, 1)?;

    for slot in ledger.get_booked_slots() {
        println!(
            "booked room={} slot={} by={}",
            slot.room_id, slot.slot_id, slot.booked_by
        );
    }

    let report = ledger.remove_company(&owner, company_id)?;
    log::info!(
        "event=cli_scenario module=cli status=ok bookings_released={}",
        report.bookings_released
    );
    println!(
        "removed company={} employees={} rooms={} bookings={}",
        company_id,
        report.employees_removed.len(),
        report.rooms_removed.len(),
        report.bookings_released
    );
    println!("remaining bookings={}", ledger.get_booked_slots().len());
    Ok(())
}

fn parse(value: &str) -> Address {
    Address::parse(value).expect("built-in address should be valid")
}
