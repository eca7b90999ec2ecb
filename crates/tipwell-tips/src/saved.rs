//! The saved-tip set.
//!
//! Read from the store once at construction. After that the in-memory list
//! is authoritative for the session; every mutation is written back
//! best-effort.

use tipwell_core::models::saved::SavedTip;
use tipwell_core::store_keys;
use tipwell_storage::KeyValueStore;
use tipwell_storage::state::{load_json, save_json_best_effort};
use tracing::{debug, info};

pub struct SavedTipRegistry<S> {
    store: S,
    saved: Vec<SavedTip>,
}

impl<S: KeyValueStore> SavedTipRegistry<S> {
    /// Load the saved set. A missing or unreadable entry starts empty.
    pub fn init(store: S) -> Self {
        let mut saved: Vec<SavedTip> =
            load_json(&store, store_keys::SAVED_TIPS).unwrap_or_default();

        // Set semantics on tip_id: keep the first of any duplicates.
        let mut seen = std::collections::HashSet::new();
        saved.retain(|s| seen.insert(s.tip_id.clone()));

        debug!(count = saved.len(), "saved tips loaded");
        Self { store, saved }
    }

    /// Save a tip. Returns `false` if it was already saved.
    pub fn save(&mut self, tip_id: &str, goal_label: &str, age: u8) -> bool {
        self.save_at(tip_id, goal_label, age, jiff::Timestamp::now())
    }

    /// [`save`](Self::save) with an explicit timestamp.
    pub fn save_at(
        &mut self,
        tip_id: &str,
        goal_label: &str,
        age: u8,
        saved_at: jiff::Timestamp,
    ) -> bool {
        if self.is_saved(tip_id) {
            return false;
        }

        self.saved.push(SavedTip {
            tip_id: tip_id.to_string(),
            goal_label: goal_label.to_string(),
            age,
            saved_at,
        });
        self.persist();
        info!(tip_id, goal_label, age, "tip saved");
        true
    }

    /// Unsave a tip. Returns `false` if it was not saved.
    pub fn remove(&mut self, tip_id: &str) -> bool {
        let before = self.saved.len();
        self.saved.retain(|s| s.tip_id != tip_id);
        if self.saved.len() == before {
            return false;
        }

        self.persist();
        info!(tip_id, "tip unsaved");
        true
    }

    pub fn is_saved(&self, tip_id: &str) -> bool {
        self.saved.iter().any(|s| s.tip_id == tip_id)
    }

    /// Saved tips in the order they were saved.
    pub fn tips(&self) -> &[SavedTip] {
        &self.saved
    }

    pub fn len(&self) -> usize {
        self.saved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }

    /// Forget the in-memory set without touching the store. Used after the
    /// store has been wiped by a logout.
    pub fn reset(&mut self) {
        self.saved.clear();
    }

    fn persist(&self) {
        save_json_best_effort(&self.store, store_keys::SAVED_TIPS, &self.saved);
    }
}
