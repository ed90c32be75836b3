use super::*;
use crate::model::CollectionStatus;

fn owner() -> OwnerId {
    OwnerId::new("tester")
}

fn draft(name: &str) -> CollectionDraft {
    CollectionDraft::new(name)
}

#[test]
fn create_and_list_in_creation_order() {
    let store = MemoryStore::new();
    let owner = owner();
    store.create_collection(&owner, draft("navidad")).unwrap();
    store.create_collection(&owner, draft("verano")).unwrap();

    let collections = store.list_collections(&owner).unwrap();
    assert_eq!(collections.len(), 2);
    assert_eq!(collections[0].name, "navidad");
    assert_eq!(collections[1].name, "verano");
    assert_eq!(collections[0].status, CollectionStatus::Active);
    assert_eq!(collections[0].number_count, 0);
}

#[test]
fn create_rejects_empty_name() {
    let store = MemoryStore::new();
    assert!(matches!(
        store.create_collection(&owner(), draft("   ")),
        Err(StoreError::EmptyName)
    ));
}

#[test]
fn owners_are_isolated() {
    let store = MemoryStore::new();
    let alice = OwnerId::new("alice");
    let bruno = OwnerId::new("bruno");
    let created = store.create_collection(&alice, draft("navidad")).unwrap();

    assert!(store.list_collections(&bruno).unwrap().is_empty());
    assert!(matches!(
        store.get_collection(&bruno, created.id),
        Err(StoreError::CollectionNotFound(_))
    ));
}

#[test]
fn add_entry_maintains_cached_count() {
    let store = MemoryStore::new();
    let owner = owner();
    let collection = store.create_collection(&owner, draft("navidad")).unwrap();

    store
        .add_entry(&owner, collection.id, EntryDraft::new("105"))
        .unwrap();
    store
        .add_entry(&owner, collection.id, EntryDraft::new("205"))
        .unwrap();

    let collection = store.get_collection(&owner, collection.id).unwrap();
    assert_eq!(collection.number_count, 2);
    let entries = store.list_entries(&owner, collection.id).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].value, "105");
}

#[test]
fn duplicate_values_are_legal() {
    let store = MemoryStore::new();
    let owner = owner();
    let collection = store.create_collection(&owner, draft("navidad")).unwrap();

    let a = store
        .add_entry(&owner, collection.id, EntryDraft::new("7"))
        .unwrap();
    let b = store
        .add_entry(&owner, collection.id, EntryDraft::new("7"))
        .unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(store.list_entries(&owner, collection.id).unwrap().len(), 2);
}

#[test]
fn delete_entry_recomputes_count() {
    let store = MemoryStore::new();
    let owner = owner();
    let collection = store.create_collection(&owner, draft("navidad")).unwrap();
    let entry = store
        .add_entry(&owner, collection.id, EntryDraft::new("105"))
        .unwrap();

    store.delete_entry(&owner, collection.id, entry.id).unwrap();
    assert_eq!(
        store.get_collection(&owner, collection.id).unwrap().number_count,
        0
    );
    assert!(matches!(
        store.delete_entry(&owner, collection.id, entry.id),
        Err(StoreError::EntryNotFound(_))
    ));
}

#[test]
fn update_entry_sets_winner_flag() {
    let store = MemoryStore::new();
    let owner = owner();
    let collection = store.create_collection(&owner, draft("navidad")).unwrap();
    let entry = store
        .add_entry(&owner, collection.id, EntryDraft::new("105"))
        .unwrap();

    let drawn = EntryDraft {
        is_winner: true,
        drawn_at: Some(1_754_000_000),
        ..EntryDraft::new("105")
    };
    let updated = store
        .update_entry(&owner, collection.id, entry.id, drawn)
        .unwrap();
    assert!(updated.is_winner);
    assert_eq!(updated.drawn_at, Some(1_754_000_000));
    assert_eq!(updated.id, entry.id);

    let entries = store.list_entries(&owner, collection.id).unwrap();
    assert!(entries[0].is_winner);
}

#[test]
fn update_collection_keeps_count() {
    let store = MemoryStore::new();
    let owner = owner();
    let collection = store.create_collection(&owner, draft("navidad")).unwrap();
    store
        .add_entry(&owner, collection.id, EntryDraft::new("1"))
        .unwrap();

    let mut draft = draft("navidad 2026");
    draft.status = CollectionStatus::Completed;
    let updated = store
        .update_collection(&owner, collection.id, draft)
        .unwrap();
    assert_eq!(updated.name, "navidad 2026");
    assert_eq!(updated.status, CollectionStatus::Completed);
    assert_eq!(updated.number_count, 1);
}

#[test]
fn delete_collection_cascades_to_entries() {
    let store = MemoryStore::new();
    let owner = owner();
    let collection = store.create_collection(&owner, draft("navidad")).unwrap();
    store
        .add_entry(&owner, collection.id, EntryDraft::new("105"))
        .unwrap();

    store.delete_collection(&owner, collection.id).unwrap();
    assert!(store.list_collections(&owner).unwrap().is_empty());
    assert!(matches!(
        store.list_entries(&owner, collection.id),
        Err(StoreError::CollectionNotFound(_))
    ));
}

#[test]
fn ids_are_not_reused_after_delete() {
    let store = MemoryStore::new();
    let owner = owner();
    let first = store.create_collection(&owner, draft("a")).unwrap();
    store.delete_collection(&owner, first.id).unwrap();
    let second = store.create_collection(&owner, draft("b")).unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn bytes_round_trip() {
    let store = MemoryStore::new();
    let owner = owner();
    let collection = store.create_collection(&owner, draft("navidad")).unwrap();
    store
        .add_entry(&owner, collection.id, EntryDraft::new("105"))
        .unwrap();

    let bytes = store.to_bytes().unwrap();
    let loaded = MemoryStore::from_bytes(&bytes).unwrap();
    let collections = loaded.list_collections(&owner).unwrap();
    assert_eq!(collections.len(), 1);
    assert_eq!(collections[0].name, "navidad");
    assert_eq!(
        loaded.list_entries(&owner, collection.id).unwrap()[0].value,
        "105"
    );
}

#[test]
fn id_counters_survive_round_trip() {
    let store = MemoryStore::new();
    let owner = owner();
    let first = store.create_collection(&owner, draft("a")).unwrap();

    let loaded = MemoryStore::from_bytes(&store.to_bytes().unwrap()).unwrap();
    let second = loaded.create_collection(&owner, draft("b")).unwrap();
    assert_ne!(first.id, second.id);
}

#[test]
fn file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.rifa");

    let store = MemoryStore::new();
    let owner = owner();
    let collection = store.create_collection(&owner, draft("navidad")).unwrap();
    store
        .add_entry(&owner, collection.id, EntryDraft::new("105"))
        .unwrap();
    store.save(&path).unwrap();

    let loaded = MemoryStore::open(&path).unwrap();
    assert_eq!(loaded.list_collections(&owner).unwrap().len(), 1);
}

#[test]
fn open_nonexistent_returns_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does_not_exist.rifa");
    let store = MemoryStore::open(&path).unwrap();
    assert!(store.list_collections(&owner()).unwrap().is_empty());
}

#[test]
fn from_bytes_bad_magic() {
    let bytes = b"BADXsome data here";
    assert!(matches!(
        MemoryStore::from_bytes(bytes),
        Err(StoreError::InvalidMagic)
    ));
}

#[test]
fn from_bytes_too_short() {
    assert!(matches!(
        MemoryStore::from_bytes(b"RI"),
        Err(StoreError::InvalidHeader)
    ));
}

#[test]
fn from_bytes_unsupported_version() {
    let mut bytes = MemoryStore::new().to_bytes().unwrap();
    bytes[4] = 99;
    assert!(matches!(
        MemoryStore::from_bytes(&bytes),
        Err(StoreError::UnsupportedVersion(99))
    ));
}

#[test]
fn from_bytes_detects_corruption() {
    let store = MemoryStore::new();
    let owner = owner();
    store.create_collection(&owner, draft("navidad")).unwrap();

    let mut bytes = store.to_bytes().unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0xFF;
    assert!(matches!(
        MemoryStore::from_bytes(&bytes),
        Err(StoreError::ChecksumMismatch)
    ));
}
