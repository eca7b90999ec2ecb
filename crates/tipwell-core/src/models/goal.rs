use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A wellness goal a profile can select.
///
/// The kebab-case id is what gets persisted; the label is the human-readable
/// phrase embedded in prompts and cache keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    BetterSleep,
    ReduceStress,
    MoreEnergy,
    StayActive,
    EatHealthier,
    MentalClarity,
}

impl Goal {
    pub const ALL: [Goal; 6] = [
        Goal::BetterSleep,
        Goal::ReduceStress,
        Goal::MoreEnergy,
        Goal::StayActive,
        Goal::EatHealthier,
        Goal::MentalClarity,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Goal::BetterSleep => "better-sleep",
            Goal::ReduceStress => "reduce-stress",
            Goal::MoreEnergy => "more-energy",
            Goal::StayActive => "stay-active",
            Goal::EatHealthier => "eat-healthier",
            Goal::MentalClarity => "mental-clarity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Goal::BetterSleep => "better sleep",
            Goal::ReduceStress => "reduce stress",
            Goal::MoreEnergy => "more energy",
            Goal::StayActive => "stay active",
            Goal::EatHealthier => "eat healthier",
            Goal::MentalClarity => "mental clarity",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Goal {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Goal::ALL
            .into_iter()
            .find(|g| g.id() == s)
            .ok_or_else(|| CoreError::UnknownGoal(s.to_string()))
    }
}
