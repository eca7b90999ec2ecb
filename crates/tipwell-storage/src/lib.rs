//! tipwell-storage
//!
//! The string-keyed store all persisted state lives in, plus JSON helpers
//! layered on top of it.

pub mod error;
pub mod file;
pub mod memory;
pub mod state;

use crate::error::StorageError;

/// A synchronous string-keyed store with browser local-storage semantics.
///
/// Always available, but any write may fail (e.g. quota exhausted). There is
/// no transactional isolation: concurrent writers to a key simply overwrite.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;

    fn clear(&self) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }

    fn clear(&self) -> Result<(), StorageError> {
        (**self).clear()
    }
}
