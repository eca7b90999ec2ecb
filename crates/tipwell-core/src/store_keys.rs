//! Key-value store key conventions.
//!
//! Pure string functions. These define the canonical layout of persisted
//! state; cache partitions are addressed by goal label and age.

pub const PROFILE: &str = "wellnessProfile";

pub const SAVED_TIPS: &str = "wellnessSavedTips";

pub fn tip_list(goal_label: &str, age: u8) -> String {
    format!("tips:{goal_label}:{age}")
}

pub fn tip_detail(goal_label: &str, tip_id: &str, age: u8) -> String {
    format!("tipDetail:{goal_label}:{tip_id}:{age}")
}
