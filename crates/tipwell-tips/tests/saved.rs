use std::sync::Arc;

use tipwell_core::models::saved::SavedTip;
use tipwell_core::store_keys;
use tipwell_storage::KeyValueStore;
use tipwell_storage::memory::MemoryStore;
use tipwell_storage::state::load_json;
use tipwell_tips::saved::SavedTipRegistry;

fn stored(store: &MemoryStore) -> Vec<SavedTip> {
    load_json(store, store_keys::SAVED_TIPS).unwrap_or_default()
}

#[test]
fn saving_twice_is_idempotent() {
    let store = Arc::new(MemoryStore::new());
    let mut registry = SavedTipRegistry::init(store.clone());

    assert!(registry.save("wind-down-routine", "better sleep", 25));
    assert!(!registry.save("wind-down-routine", "better sleep", 25));

    assert_eq!(registry.len(), 1);
    assert_eq!(stored(&store).len(), 1);
}

#[test]
fn save_then_remove_restores_previous_set() {
    let store = Arc::new(MemoryStore::new());
    let mut registry = SavedTipRegistry::init(store.clone());
    registry.save("cool-bedroom", "better sleep", 25);
    let before = registry.tips().to_vec();

    registry.save("wind-down-routine", "better sleep", 25);
    assert!(registry.is_saved("wind-down-routine"));
    assert!(registry.remove("wind-down-routine"));

    assert_eq!(registry.tips(), before.as_slice());
    assert_eq!(stored(&store), before);
    assert!(!registry.is_saved("wind-down-routine"));
}

#[test]
fn removing_unknown_tip_is_a_no_op() {
    let store = Arc::new(MemoryStore::new());
    let mut registry = SavedTipRegistry::init(store.clone());
    assert!(!registry.remove("never-saved"));
    assert_eq!(store.get(store_keys::SAVED_TIPS).unwrap(), None);
}

#[test]
fn init_reads_persisted_set_once() {
    let store = Arc::new(MemoryStore::new());
    {
        let mut registry = SavedTipRegistry::init(store.clone());
        let at: jiff::Timestamp = "2024-05-01T12:00:00Z".parse().unwrap();
        registry.save_at("wind-down-routine", "better sleep", 25, at);
    }

    let registry = SavedTipRegistry::init(store.clone());
    assert_eq!(registry.len(), 1);
    let saved = &registry.tips()[0];
    assert_eq!(saved.tip_id, "wind-down-routine");
    assert_eq!(saved.goal_label, "better sleep");
    assert_eq!(saved.age, 25);
    assert_eq!(saved.saved_at.to_string(), "2024-05-01T12:00:00Z");

    // Later store edits are not picked up by an initialised registry.
    store.remove(store_keys::SAVED_TIPS).unwrap();
    assert!(registry.is_saved("wind-down-routine"));
}

#[test]
fn persisted_duplicates_collapse_on_init() {
    let store = Arc::new(MemoryStore::new());
    store
        .set(
            store_keys::SAVED_TIPS,
            r#"[
                {"tipId": "a", "goalLabel": "better sleep", "age": 25, "savedAt": "2024-05-01T12:00:00Z"},
                {"tipId": "a", "goalLabel": "better sleep", "age": 25, "savedAt": "2024-05-02T12:00:00Z"}
            ]"#,
        )
        .unwrap();

    let registry = SavedTipRegistry::init(store);
    assert_eq!(registry.len(), 1);
}

#[test]
fn corrupt_saved_entry_starts_empty() {
    let store = Arc::new(MemoryStore::new());
    store.set(store_keys::SAVED_TIPS, "oops").unwrap();
    let registry = SavedTipRegistry::init(store);
    assert!(registry.is_empty());
}

#[test]
fn persistence_failure_keeps_in_memory_state() {
    let store = Arc::new(MemoryStore::with_quota(8));
    let mut registry = SavedTipRegistry::init(store.clone());

    assert!(registry.save("wind-down-routine", "better sleep", 25));
    assert!(registry.is_saved("wind-down-routine"));
    assert!(store.is_empty());
}
