use blockcal_core::{
    Address, BookedSlot, BookingScope, Company, Employee, Ledger, LedgerConfig, Room,
};

fn addr(n: u8) -> Address {
    Address::parse(&format!("0x{n:040x}")).unwrap()
}

#[test]
fn records_serialize_with_expected_field_names() {
    let owner = addr(0xa0);
    let mut ledger = Ledger::new(owner.clone());
    ledger.add_company(&owner, "Coke").unwrap();
    ledger.add_employee(&owner, &addr(1), 1, "Max").unwrap();
    ledger.add_room(&owner, 1).unwrap();
    ledger.book_slot(&addr(1), 1, 5).unwrap();

    let company = serde_json::to_value(ledger.get_company(1).unwrap()).unwrap();
    assert_eq!(company["id"], 1);
    assert_eq!(company["name"], "Coke");
    assert_eq!(company["exists"], true);

    let employee = serde_json::to_value(ledger.get_employee(&addr(1)).unwrap()).unwrap();
    assert_eq!(employee["addr"], addr(1).as_str());
    assert_eq!(employee["companyId"], 1);

    let room = serde_json::to_value(ledger.get_room(1).unwrap()).unwrap();
    assert_eq!(room["companyId"], 1);

    let slots = serde_json::to_value(ledger.get_booked_slots()).unwrap();
    assert_eq!(slots[0]["roomId"], 1);
    assert_eq!(slots[0]["slotId"], 5);
    assert_eq!(slots[0]["bookedBy"], addr(1).as_str());
}

#[test]
fn records_deserialize_back() {
    let company: Company =
        serde_json::from_value(serde_json::json!({"id": 2, "name": "Pepsi", "exists": true}))
            .unwrap();
    assert_eq!(company, Company::new(2, "Pepsi"));

    let room: Room =
        serde_json::from_value(serde_json::json!({"id": 4, "companyId": 2, "exists": true}))
            .unwrap();
    assert_eq!(room, Room::new(4, 2));

    let employee: Employee = serde_json::from_value(serde_json::json!({
        "addr": "0x00000000000000000000000000000000000000AB",
        "name": "Max",
        "companyId": 2,
        "exists": true
    }))
    .unwrap();
    assert_eq!(employee.addr, addr(0xab));
}

#[test]
fn malformed_address_fails_deserialization() {
    let err = serde_json::from_value::<BookedSlot>(serde_json::json!({
        "roomId": 1,
        "slotId": 1,
        "bookedBy": "0x1234"
    }))
    .unwrap_err();
    assert!(
        err.to_string().contains("40 hex digits"),
        "unexpected error: {err}"
    );
}

#[test]
fn config_deserializes_with_defaults() {
    let config: LedgerConfig =
        serde_json::from_value(serde_json::json!({"booking_scope": "own_company"})).unwrap();
    assert_eq!(config.booking_scope, BookingScope::OwnCompany);
    assert_eq!(config.slots_per_day, 24);
    assert_eq!(config.max_rooms_per_batch, 10);
    assert!(!config.allow_rebooking_own_slot);
}
