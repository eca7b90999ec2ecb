//! tipwell-cli library root.
//!
//! Exposes the config, argument and command modules so integration tests
//! can drive them without spawning the binary.

pub mod commands;
pub mod config;
pub mod router;
pub mod state;
