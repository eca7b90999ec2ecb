use thiserror::Error;

use crate::models::profile::{MAX_AGE, MIN_AGE};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("age {0} is out of range ({MIN_AGE}-{MAX_AGE})")]
    AgeOutOfRange(u8),

    #[error("at least one goal is required")]
    NoGoals,

    #[error("unknown goal: {0}")]
    UnknownGoal(String),

    #[error("unknown gender: {0}")]
    UnknownGender(String),
}
