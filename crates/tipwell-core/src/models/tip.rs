use serde::{Deserialize, Serialize};

/// One generated wellness tip. A list request yields at most five.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    /// Stable kebab-case identifier, unique within its list.
    pub id: String,
    pub icon: String,
    pub title: String,
    pub category: String,
    pub duration: String,
}

/// The expanded view of a tip, generated lazily on first view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipDetail {
    pub description: String,
    pub steps: Vec<String>,
}
