//! tipwell-tips
//!
//! Everything between the generative client and the front end: the
//! read-through tip cache, the saved-tip registry, profile persistence and
//! the saved board.

pub mod board;
pub mod cache;
pub mod generator;
pub mod profile;
pub mod saved;
