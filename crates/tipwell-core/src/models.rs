pub mod goal;
pub mod profile;
pub mod saved;
pub mod tip;
