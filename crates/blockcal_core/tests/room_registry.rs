use blockcal_core::{Address, EntityRef, Ledger, LedgerError};

fn addr(n: u8) -> Address {
    Address::parse(&format!("0x{n:040x}")).unwrap()
}

fn setup() -> (Ledger, Address) {
    let owner = addr(0xa0);
    let mut ledger = Ledger::new(owner.clone());
    ledger.add_company(&owner, "Coke").unwrap();
    (ledger, owner)
}

#[test]
fn add_room_by_owner() {
    let (mut ledger, owner) = setup();
    let id = ledger.add_room(&owner, 1).unwrap();
    assert_eq!(id, 1);

    let room = ledger.get_room(1).unwrap();
    assert_eq!(room.id, 1);
    assert_eq!(room.company_id, 1);
}

#[test]
fn add_rooms_allocates_consecutive_ids() {
    let (mut ledger, owner) = setup();
    let ids = ledger.add_rooms(&owner, 1, 10).unwrap();
    assert_eq!(ids, (1..=10).collect::<Vec<u32>>());

    for id in 1..=10 {
        let room = ledger.get_room(id).unwrap();
        assert_eq!(room.id, id);
        assert_eq!(room.company_id, 1);
    }
}

#[test]
fn add_room_rejects_non_owner() {
    let (mut ledger, _) = setup();
    let err = ledger.add_room(&addr(1), 1).unwrap_err();
    assert!(matches!(err, LedgerError::Unauthorized { .. }));
    assert!(ledger.list_rooms().is_empty());
}

#[test]
fn add_room_rejects_unknown_company() {
    let (mut ledger, owner) = setup();
    assert_eq!(
        ledger.add_room(&owner, 2).unwrap_err(),
        LedgerError::CompanyNotFound(2)
    );
    assert_eq!(
        ledger.add_rooms(&owner, 2, 3).unwrap_err(),
        LedgerError::CompanyNotFound(2)
    );
}

#[test]
fn add_rooms_enforces_batch_bounds() {
    let (mut ledger, owner) = setup();
    assert_eq!(
        ledger.add_rooms(&owner, 1, 0).unwrap_err(),
        LedgerError::InvalidRoomCount { count: 0, max: 10 }
    );
    assert_eq!(
        ledger.add_rooms(&owner, 1, 11).unwrap_err(),
        LedgerError::InvalidRoomCount { count: 11, max: 10 }
    );
    assert!(ledger.list_rooms().is_empty());

    // Rejected batches do not consume ids.
    assert_eq!(ledger.add_room(&owner, 1).unwrap(), 1);
}

#[test]
fn remove_room_by_owner() {
    let (mut ledger, owner) = setup();
    ledger.add_room(&owner, 1).unwrap();
    ledger.remove_room(&owner, 1).unwrap();

    assert!(ledger.get_room(1).is_none());
    assert!(ledger.list_rooms().is_empty());
}

#[test]
fn remove_room_rejects_non_owner_and_missing() {
    let (mut ledger, owner) = setup();
    let err = ledger.remove_room(&owner, 1).unwrap_err();
    assert_eq!(err, LedgerError::NotFound(EntityRef::Room(1)));

    ledger.add_room(&owner, 1).unwrap();
    let err = ledger.remove_room(&addr(1), 1).unwrap_err();
    assert!(matches!(err, LedgerError::Unauthorized { .. }));
    assert!(ledger.get_room(1).is_some());
}

#[test]
fn room_counter_is_global_across_companies() {
    let (mut ledger, owner) = setup();
    ledger.add_company(&owner, "Pepsi").unwrap();

    let coke = ledger.add_rooms(&owner, 1, 10).unwrap();
    let pepsi = ledger.add_rooms(&owner, 2, 10).unwrap();
    assert_eq!(coke, (1..=10).collect::<Vec<u32>>());
    assert_eq!(pepsi, (11..=20).collect::<Vec<u32>>());

    let rooms: Vec<_> = ledger
        .list_rooms()
        .into_iter()
        .map(|room| (room.id, room.company_id))
        .collect();
    let expected: Vec<(u32, u32)> = (1..=20)
        .map(|id| (id, if id <= 10 { 1 } else { 2 }))
        .collect();
    assert_eq!(rooms, expected);
}

#[test]
fn room_ids_are_not_reused_after_removal() {
    let (mut ledger, owner) = setup();
    ledger.add_rooms(&owner, 1, 3).unwrap();
    ledger.remove_room(&owner, 3).unwrap();

    assert_eq!(ledger.add_room(&owner, 1).unwrap(), 4);
}
