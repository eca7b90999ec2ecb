use tipwell_storage::KeyValueStore;
use tipwell_storage::error::StorageError;
use tipwell_storage::memory::MemoryStore;
use tipwell_storage::state::{load_json, save_json, save_json_best_effort};

#[test]
fn get_set_remove_clear() {
    let store = MemoryStore::new();
    assert_eq!(store.get("a").unwrap(), None);

    store.set("a", "1").unwrap();
    store.set("b", "2").unwrap();
    assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));

    store.remove("a").unwrap();
    assert_eq!(store.get("a").unwrap(), None);
    assert_eq!(store.len(), 1);

    store.clear().unwrap();
    assert!(store.is_empty());
}

#[test]
fn quota_rejects_oversized_write_and_keeps_old_value() {
    let store = MemoryStore::with_quota(10);
    store.set("k", "small").unwrap();

    let err = store.set("k", "this value is far too large").unwrap_err();
    assert!(matches!(err, StorageError::QuotaExceeded { ref key } if key == "k"));
    assert_eq!(store.get("k").unwrap().as_deref(), Some("small"));
}

#[test]
fn quota_counts_replacement_not_addition() {
    let store = MemoryStore::with_quota(6);
    store.set("k", "12345").unwrap();
    store.set("k", "54321").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("54321"));
}

#[test]
fn load_json_treats_corrupt_value_as_absent() {
    let store = MemoryStore::new();
    store.set("list", "[not json").unwrap();
    assert_eq!(load_json::<Vec<u32>, _>(&store, "list"), None);
    assert_eq!(load_json::<Vec<u32>, _>(&store, "missing"), None);
}

#[test]
fn json_values_round_trip() {
    let store = MemoryStore::new();
    save_json(&store, "nums", &vec![1u32, 2, 3]).unwrap();
    assert_eq!(load_json::<Vec<u32>, _>(&store, "nums"), Some(vec![1, 2, 3]));
}

#[test]
fn best_effort_save_swallows_quota_failure() {
    let store = MemoryStore::with_quota(4);
    assert!(!save_json_best_effort(&store, "nums", &vec![1u32, 2, 3]));
    assert_eq!(store.get("nums").unwrap(), None);
}
