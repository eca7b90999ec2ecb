//! tipwell-core
//!
//! Profiles, goals, tips and saved tips, plus the key names they are stored
//! under. Other tipwell crates build on these types; nothing here does I/O.

pub mod error;
pub mod models;
pub mod store_keys;
