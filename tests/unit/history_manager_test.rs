//! Unit tests for the HistoryManager public API.
//!
//! These tests exercise visit recording, dedup, capacity eviction, load
//! semantics, clearing, and failure absorption through the
//! `HistoryManagerTrait` interface, using an in-memory SQLite database.

use std::sync::Arc;

use recents::database::Database;
use recents::managers::history_manager::{
    HistoryManager, HistoryManagerTrait, MAX_RECENT, STORAGE_KEY,
};
use recents::storage::{LocalStorage, LocalStorageTrait};
use recents::types::errors::StorageError;

/// Helper: a HistoryManager backed by a fresh in-memory database.
fn setup() -> (Arc<Database>, HistoryManager<LocalStorage>) {
    let db = Arc::new(Database::open_in_memory().expect("Failed to open in-memory database"));
    let mgr = HistoryManager::new(LocalStorage::new(db.clone()));
    (db, mgr)
}

/// Storage double whose writes always fail, for the absorption tests.
struct BrokenStorage;

impl LocalStorageTrait for BrokenStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("backend offline".to_string()))
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("backend offline".to_string()))
    }

    fn remove_item(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("backend offline".to_string()))
    }
}

#[test]
fn test_first_visit_is_recorded() {
    let (_db, mut mgr) = setup();

    let list = mgr
        .record_visit("Spotify Clone", "Project", "img/spotify.png", Some("#projects"))
        .unwrap();

    assert_eq!(list.len(), 1);
    assert_eq!(list[0].title, "Spotify Clone");
    assert_eq!(list[0].category, "Project");
    assert_eq!(list[0].image_url, "img/spotify.png");
    assert_eq!(list[0].target_url.as_deref(), Some("#projects"));
}

/// Re-visiting the same (title, url) key must not grow the list and must
/// move the record to the front with the new timestamp.
#[test]
fn test_repeat_visit_dedups_and_moves_to_front() {
    let (_db, mut mgr) = setup();

    mgr.record_visit_at("A", "Project", "", Some("#a"), 1_000).unwrap();
    mgr.record_visit_at("B", "Project", "", Some("#b"), 2_000).unwrap();
    let list = mgr.record_visit_at("A", "Project", "", Some("#a"), 3_000).unwrap();

    assert_eq!(list.len(), 2, "Dedup upsert must not grow the list");
    assert_eq!(list[0].title, "A");
    assert_eq!(list[0].visited_at, 3_000);
    assert_eq!(list[1].title, "B");
}

/// Same title under a different url is a different key.
#[test]
fn test_same_title_different_url_is_distinct() {
    let (_db, mut mgr) = setup();

    mgr.record_visit("Docs", "Project", "", Some("#v1")).unwrap();
    let list = mgr.record_visit("Docs", "Project", "", Some("#v2")).unwrap();

    assert_eq!(list.len(), 2);
}

/// A `None` url matches only `None`.
#[test]
fn test_null_url_matches_null() {
    let (_db, mut mgr) = setup();

    mgr.record_visit("Certificates", "Achievement", "", None).unwrap();
    mgr.record_visit("Certificates", "Achievement", "", Some("#certs")).unwrap();
    let list = mgr.record_visit("Certificates", "Achievement", "", None).unwrap();

    // The two keyed entries remain; the None-url record was upserted in place.
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].target_url, None);
    assert_eq!(list[1].target_url.as_deref(), Some("#certs"));
}

/// Order is by recency of upsert, not by the timestamp value carried.
#[test]
fn test_order_follows_upsert_recency_not_timestamp() {
    let (_db, mut mgr) = setup();

    mgr.record_visit_at("A", "Project", "", None, 5_000).unwrap();
    let list = mgr.record_visit_at("B", "Project", "", None, 1_000).unwrap();

    assert_eq!(list[0].title, "B", "Latest upsert leads even with an older timestamp");
    assert_eq!(list[1].title, "A");
}

/// Inserting 11 distinct records evicts the oldest: R1..R11 -> [R11..R2].
#[test]
fn test_capacity_eviction_drops_oldest() {
    let (_db, mut mgr) = setup();

    for i in 1..=11 {
        mgr.record_visit(&format!("R{}", i), "Project", "", None).unwrap();
    }

    let list = mgr.load();
    assert_eq!(list.len(), MAX_RECENT);
    assert_eq!(list[0].title, "R11");
    assert_eq!(list[9].title, "R2");
    assert!(
        !list.iter().any(|r| r.title == "R1"),
        "R1 should have been evicted"
    );
}

#[test]
fn test_length_never_exceeds_capacity() {
    let (_db, mut mgr) = setup();

    for i in 0..25 {
        let list = mgr.record_visit(&format!("Item {}", i), "Project", "", None).unwrap();
        assert_eq!(list.len(), usize::min(i + 1, MAX_RECENT));
    }
}

#[test]
fn test_load_is_idempotent() {
    let (_db, mut mgr) = setup();

    mgr.record_visit("A", "Project", "", None).unwrap();
    mgr.record_visit("B", "Experience", "", Some("#b")).unwrap();

    assert_eq!(mgr.load(), mgr.load());
}

#[test]
fn test_empty_title_is_rejected_without_mutation() {
    let (_db, mut mgr) = setup();

    mgr.record_visit("Kept", "Project", "", None).unwrap();
    let result = mgr.record_visit("", "Project", "", None);

    assert!(result.is_err(), "Empty title must be rejected");
    assert_eq!(mgr.len(), 1, "Rejected input must leave the list unchanged");
    assert_eq!(mgr.load()[0].title, "Kept");
}

/// A manager built over storage already holding a list sees that list.
#[test]
fn test_list_round_trips_across_manager_instances() {
    let (db, mut mgr) = setup();

    mgr.record_visit_at("A", "Project", "img/a.png", Some("#a"), 1_000).unwrap();
    mgr.record_visit_at("B", "Experience", "", None, 2_000).unwrap();
    let before = mgr.load();

    let rebuilt = HistoryManager::new(LocalStorage::new(db));
    assert_eq!(rebuilt.load(), before);
}

/// Pre-seeding the storage key with garbage must degrade to the empty list.
#[test]
fn test_malformed_stored_payload_loads_as_empty() {
    let db = Arc::new(Database::open_in_memory().unwrap());
    let mut storage = LocalStorage::new(db.clone());
    storage.set_item(STORAGE_KEY, "not json").unwrap();

    let mgr = HistoryManager::new(LocalStorage::new(db));
    assert!(mgr.is_empty(), "Malformed payload must load as empty, not raise");
}

/// A stored payload whose elements fail the record schema also degrades to empty.
#[test]
fn test_wrong_shape_payload_loads_as_empty() {
    let db = Arc::new(Database::open_in_memory().unwrap());
    let mut storage = LocalStorage::new(db.clone());
    storage
        .set_item(STORAGE_KEY, r#"[{"title": "x", "timestamp": "not a number"}]"#)
        .unwrap();

    let mgr = HistoryManager::new(LocalStorage::new(db));
    assert!(mgr.is_empty());
}

/// Stored records missing optional fields get schema defaults on load.
#[test]
fn test_stored_record_defaults_applied_on_load() {
    let db = Arc::new(Database::open_in_memory().unwrap());
    let mut storage = LocalStorage::new(db.clone());
    storage
        .set_item(STORAGE_KEY, r#"[{"title": "Bare", "timestamp": 1700000000000}]"#)
        .unwrap();

    let mgr = HistoryManager::new(LocalStorage::new(db));
    let list = mgr.load();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].category, "");
    assert_eq!(list[0].image_url, "");
    assert_eq!(list[0].target_url, None);
}

/// An unavailable backend must never surface from record_visit; the
/// in-memory list still updates and later calls keep working.
#[test]
fn test_storage_failure_is_absorbed() {
    let mut mgr = HistoryManager::new(BrokenStorage);

    let list = mgr.record_visit("A", "Project", "", None).unwrap();
    assert_eq!(list.len(), 1);

    let list = mgr.record_visit("B", "Experience", "", Some("#b")).unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].title, "B");

    mgr.clear_all();
    assert!(mgr.is_empty());
}

#[test]
fn test_clear_all_empties_memory_and_storage() {
    let (db, mut mgr) = setup();

    mgr.record_visit("A", "Project", "", None).unwrap();
    mgr.record_visit("B", "Project", "", None).unwrap();
    mgr.clear_all();

    assert!(mgr.is_empty());

    let storage = LocalStorage::new(db);
    assert_eq!(
        storage.get_item(STORAGE_KEY).unwrap(),
        None,
        "clear_all should remove the stored key"
    );
}

/// The persisted payload uses the wire field names, with the numeric
/// timestamp stored as a number.
#[test]
fn test_persisted_payload_wire_format() {
    let (db, mut mgr) = setup();

    mgr.record_visit_at("Spotify Clone", "Project", "img/s.png", Some("#p"), 1_700_000_000_000)
        .unwrap();

    let storage = LocalStorage::new(db);
    let raw = storage.get_item(STORAGE_KEY).unwrap().expect("payload should be stored");
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();

    let entry = &parsed[0];
    assert_eq!(entry["title"], "Spotify Clone");
    assert_eq!(entry["type"], "Project");
    assert_eq!(entry["image"], "img/s.png");
    assert_eq!(entry["timestamp"], 1_700_000_000_000_i64);
    assert_eq!(entry["url"], "#p");
}
