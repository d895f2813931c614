use chrono::{Duration, NaiveDate, NaiveDateTime};
use contactbook_core::{
    Contact, ContactField, ContactFields, ContactStore, FixedClock, StoreError,
};

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 2, 13)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn alice() -> ContactFields {
    ContactFields::new("Alice", "111", "a@x.com", "Addr1")
}

fn bob() -> ContactFields {
    ContactFields::new("Bob", "222", "b@x.com", "Addr2")
}

#[test]
fn add_assigns_increasing_unique_ids() {
    let mut store = ContactStore::new();
    assert_eq!(store.next_id(), Some(1));

    let ids: Vec<u32> = (0..5)
        .map(|_| store.add(ContactFields::default()).unwrap())
        .collect();

    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(store.len(), 5);
}

#[test]
fn next_id_follows_max_existing_id_after_load() {
    let mut store = ContactStore::new();
    store.replace_contacts(vec![
        Contact::new(9, alice()),
        Contact::new(4, bob()),
    ]);

    assert_eq!(store.add(ContactFields::default()).unwrap(), 10);
}

#[test]
fn update_unknown_id_reports_not_found_and_leaves_store_unchanged() {
    let mut store = ContactStore::new();
    store.add(alice()).unwrap();
    let before: Vec<Contact> = store.contacts().to_vec();

    let err = store.update(42, bob()).unwrap_err();

    assert!(matches!(err, StoreError::NotFound(42)));
    assert_eq!(store.contacts(), before.as_slice());
}

#[test]
fn update_appends_four_records_in_field_order() {
    let clock = FixedClock::new(at(10, 0));
    let mut store = ContactStore::with_clock(&clock);
    let id = store.add(alice()).unwrap();

    store
        .update(id, ContactFields::new("Alicia", "999", "a@x.com", "Addr9"))
        .unwrap();

    let contact = store.get(id).unwrap();
    assert_eq!(contact.name(), "Alicia");
    let changes = contact.changes();
    assert_eq!(changes.len(), 4);
    let fields: Vec<ContactField> = changes.iter().map(|c| c.field()).collect();
    assert_eq!(fields, ContactField::ALL.to_vec());

    let pairs: Vec<(&str, &str)> = changes
        .iter()
        .map(|c| (c.old_value(), c.new_value()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("Alice", "Alicia"),
            ("111", "999"),
            ("a@x.com", "a@x.com"),
            ("Addr1", "Addr9"),
        ]
    );
    assert!(changes.iter().all(|c| c.timestamp() == at(10, 0)));
}

#[test]
fn repeated_updates_keep_chronological_order() {
    let clock = FixedClock::new(at(8, 0));
    let mut store = ContactStore::with_clock(&clock);
    let id = store.add(alice()).unwrap();

    store.update(id, bob()).unwrap();
    clock.advance(Duration::minutes(5));
    store.update(id, alice()).unwrap();

    let changes = store.get(id).unwrap().changes();
    assert_eq!(changes.len(), 8);
    assert_eq!(changes[0].timestamp(), at(8, 0));
    assert_eq!(changes[4].timestamp(), at(8, 5));
    assert_eq!(changes[4].old_value(), "Bob");
    assert_eq!(changes[4].new_value(), "Alice");
}

#[test]
fn list_renders_contacts_in_insertion_order() {
    let mut store = ContactStore::new();
    assert!(store.list().is_empty());
    assert_eq!(store.list().to_string(), "No contacts.");

    store.add(alice()).unwrap();
    store.add(bob()).unwrap();

    let lines: Vec<String> = store.list().lines().collect();
    assert_eq!(
        lines,
        vec![
            "1: Alice, 111, a@x.com, Addr1".to_string(),
            "2: Bob, 222, b@x.com, Addr2".to_string(),
        ]
    );
    assert_eq!(store.list().to_string(), lines.join("\n"));
}

#[test]
fn history_scenario_records_rename_and_unchanged_fields() {
    let clock = FixedClock::new(at(9, 30));
    let mut store = ContactStore::with_clock(&clock);
    assert_eq!(store.add(alice()).unwrap(), 1);
    assert_eq!(store.add(bob()).unwrap(), 2);

    store
        .update(1, ContactFields::new("Alicia", "111", "a@x.com", "Addr1"))
        .unwrap();

    let history = store.history(1).unwrap();
    let records = history.records();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0].field(), ContactField::Name);
    assert_eq!(records[0].old_value(), "Alice");
    assert_eq!(records[0].new_value(), "Alicia");
    assert!(records[1..].iter().all(|r| r.is_noop()));

    assert_eq!(
        history.to_string(),
        "Change history for contact Alicia:\n\
         2026-02-13 09:30:00: Name - Alice -> Alicia\n\
         2026-02-13 09:30:00: PhoneNumber - 111 -> 111\n\
         2026-02-13 09:30:00: Email - a@x.com -> a@x.com\n\
         2026-02-13 09:30:00: Address - Addr1 -> Addr1"
    );
    assert_eq!(store.list().lines().count(), 2);
}

#[test]
fn history_of_unknown_contact_is_not_found() {
    let store = ContactStore::new();
    assert!(matches!(store.history(3), Err(StoreError::NotFound(3))));
}

#[test]
fn history_of_unedited_contact_has_only_header() {
    let mut store = ContactStore::new();
    let id = store.add(bob()).unwrap();

    let history = store.history(id).unwrap();
    assert!(history.records().is_empty());
    assert_eq!(history.to_string(), "Change history for contact Bob:");
}
