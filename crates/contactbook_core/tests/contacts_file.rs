use chrono::NaiveDate;
use contactbook_core::{ContactFields, ContactStore, FixedClock, StoreError};
use std::fs;

fn clock() -> FixedClock {
    FixedClock::new(
        NaiveDate::from_ymd_opt(2026, 4, 1)
            .unwrap()
            .and_hms_opt(18, 45, 12)
            .unwrap(),
    )
}

#[test]
fn save_writes_contact_and_change_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.txt");
    let clock = clock();
    let mut store = ContactStore::with_clock(&clock);
    store.add(ContactFields::new("Alice", "111", "a@x.com", "Addr1")).unwrap();
    store
        .update(1, ContactFields::new("Alicia", "111", "a@x.com", "Addr1"))
        .unwrap();
    store.add(ContactFields::new("Bob", "222", "b@x.com", "Addr2")).unwrap();

    store.save(&path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(
        written,
        "1,Alicia,111,a@x.com,Addr1\n\
         CHANGE,1,Name,Alice,Alicia,2026-04-01 18:45:12\n\
         CHANGE,1,PhoneNumber,111,111,2026-04-01 18:45:12\n\
         CHANGE,1,Email,a@x.com,a@x.com,2026-04-01 18:45:12\n\
         CHANGE,1,Address,Addr1,Addr1,2026-04-01 18:45:12\n\
         2,Bob,222,b@x.com,Addr2\n"
    );
}

#[test]
fn save_then_load_restores_contacts_without_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.txt");
    let clock = clock();
    let mut store = ContactStore::with_clock(&clock);
    store.add(ContactFields::new("Alice", "111", "a@x.com", "Addr1")).unwrap();
    store.add(ContactFields::new("Bob", "222", "b@x.com", "Addr2")).unwrap();
    store
        .update(2, ContactFields::new("Robert", "", "", "Addr3"))
        .unwrap();
    store.save(&path).unwrap();

    let mut reloaded = ContactStore::new();
    reloaded.add(ContactFields::new("Stale", "0", "s@x", "Gone")).unwrap();
    let count = reloaded.load(&path).unwrap();

    assert_eq!(count, 2);
    let original: Vec<(u32, &ContactFields)> =
        store.contacts().iter().map(|c| (c.id(), c.fields())).collect();
    let restored: Vec<(u32, &ContactFields)> = reloaded
        .contacts()
        .iter()
        .map(|c| (c.id(), c.fields()))
        .collect();
    assert_eq!(restored, original);
    assert!(reloaded.contacts().iter().all(|c| c.changes().is_empty()));
    assert_eq!(reloaded.next_id(), Some(3));
}

#[test]
fn save_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.txt");
    fs::write(&path, "old content that is much longer than the new file\n".repeat(10)).unwrap();

    let mut store = ContactStore::new();
    store.add(ContactFields::new("Ann", "1", "a@x", "Here")).unwrap();
    store.save(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "1,Ann,1,a@x,Here\n");
}

#[test]
fn save_to_unwritable_path_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("contacts.txt");
    let store = ContactStore::new();

    let err = store.save(&path).unwrap_err();
    assert!(matches!(err, StoreError::Io { path: ref p, .. } if p == &path));
}

#[test]
fn load_missing_file_reports_not_found_and_keeps_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.txt");
    let mut store = ContactStore::new();
    store.add(ContactFields::new("Keep", "1", "k@x", "Home")).unwrap();

    let err = store.load(&path).unwrap_err();

    assert!(matches!(err, StoreError::FileNotFound(ref p) if p == &path));
    assert_eq!(store.len(), 1);
    assert_eq!(store.contacts()[0].name(), "Keep");
}

#[test]
fn load_skips_lines_that_are_not_contacts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mixed.txt");
    fs::write(
        &path,
        "3,Carol,333,c@x.com,Addr3\n\
         CHANGE,3,Name,Caro,Carol,2026-01-01 00:00:00\n\
         4,Dan,444,d@x.com,Street, 5\n\
         abc,Eve,555,e@x.com,Addr5\n\
         7,Fay,777,f@x.com,Addr7\n",
    )
    .unwrap();

    let mut store = ContactStore::new();
    assert_eq!(store.load(&path).unwrap(), 2);

    let ids: Vec<u32> = store.contacts().iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec![3, 7]);
}

#[test]
fn load_empty_file_clears_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "").unwrap();
    let mut store = ContactStore::new();
    store.add(ContactFields::default()).unwrap();

    assert_eq!(store.load(&path).unwrap(), 0);
    assert!(store.is_empty());
    assert_eq!(store.next_id(), Some(1));
}

#[test]
fn add_after_loading_max_id_reports_exhausted_ids() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("max.txt");
    fs::write(&path, "4294967295,A,1,a,b\n").unwrap();
    let mut store = ContactStore::new();
    store.load(&path).unwrap();

    assert_eq!(store.next_id(), None);
    let err = store.add(ContactFields::default()).unwrap_err();

    assert!(matches!(err, StoreError::IdsExhausted));
    assert_eq!(store.len(), 1);
    assert_eq!(store.contacts()[0].id(), u32::MAX);
}
