use serde::{Serialize, de::DeserializeOwned};

use crate::KeyValueStore;
use crate::error::StorageError;

/// Load a JSON value from the store.
///
/// Absent keys, read failures and unparseable values all come back as `None`;
/// callers treat every one of them as a miss.
pub fn load_json<T: DeserializeOwned, S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::debug!(key, error = %e, "store read failed, treating as absent");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(key, error = %e, "stored value is not valid JSON for this type");
            None
        }
    }
}

/// Save a JSON value to the store.
pub fn save_json<T: Serialize + ?Sized, S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let body = serde_json::to_string(value)?;
    store.set(key, &body)
}

/// Save a JSON value, logging and swallowing any failure.
///
/// Returns whether the write landed.
pub fn save_json_best_effort<T: Serialize + ?Sized, S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
    value: &T,
) -> bool {
    match save_json(store, key, value) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(key, error = %e, "store write failed, continuing without it");
            false
        }
    }
}

/// Remove a key, logging and swallowing any failure.
pub fn remove_best_effort<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> bool {
    match store.remove(key) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(key, error = %e, "store remove failed");
            false
        }
    }
}
