use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::goal::Goal;
use crate::error::CoreError;

pub const MIN_AGE: u8 = 10;
pub const MAX_AGE: u8 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
            Gender::PreferNotToSay => "prefer-not-to-say",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            "prefer-not-to-say" => Ok(Gender::PreferNotToSay),
            other => Err(CoreError::UnknownGender(other.to_string())),
        }
    }
}

/// The user profile captured on the entry form.
///
/// Immutable once stored; a new submission overwrites it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub age: u8,
    pub gender: Gender,
    pub goals: Vec<Goal>,
}

impl Profile {
    pub fn new(age: u8, gender: Gender, goals: Vec<Goal>) -> Result<Self, CoreError> {
        let profile = Self { age, gender, goals };
        profile.validate()?;
        Ok(profile)
    }

    /// Check the invariants that deserialization alone cannot enforce.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !(MIN_AGE..=MAX_AGE).contains(&self.age) {
            return Err(CoreError::AgeOutOfRange(self.age));
        }
        if self.goals.is_empty() {
            return Err(CoreError::NoGoals);
        }
        Ok(())
    }

    /// The goal tips are generated for. The entry form only offers one.
    pub fn primary_goal(&self) -> Option<Goal> {
        self.goals.first().copied()
    }
}
