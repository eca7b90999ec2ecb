use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::KeyValueStore;
use crate::error::StorageError;

/// A store persisted as a single JSON object on disk.
///
/// The file is read once on [`FileStore::open`]; the in-memory map is
/// authoritative afterwards and every mutation rewrites the whole file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        let entries = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            if contents.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&contents).map_err(|e| StorageError::Corrupt {
                    path: path.clone(),
                    reason: e.to_string(),
                })?
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!(path = %path.display(), keys = entries.len(), "store opened");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn mutate<F>(&self, f: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut BTreeMap<String, String>),
    {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        let mut next = entries.clone();
        f(&mut next);
        flush(&self.path, &next)?;
        *entries = next;
        Ok(())
    }
}

/// Write to a temp file then rename so a crash never leaves a torn store.
fn flush(path: &Path, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_vec_pretty(entries)?;
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, &json)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::trace!(path = %path.display(), keys = entries.len(), "store flushed");
    Ok(())
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.mutate(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.mutate(|entries| {
            entries.remove(key);
        })
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.mutate(BTreeMap::clear)
    }
}
