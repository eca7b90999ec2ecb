use serde::{Deserialize, Serialize};

/// A tip the user bookmarked. The saved set is keyed on `tip_id`.
///
/// `goal_label` and `age` record the cache partition the tip came from so the
/// saved board can re-resolve it later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedTip {
    pub tip_id: String,
    pub goal_label: String,
    pub age: u8,
    pub saved_at: jiff::Timestamp,
}
