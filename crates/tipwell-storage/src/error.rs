use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage quota exceeded writing key: {key}")]
    QuotaExceeded { key: String },

    #[error("store file {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("store lock poisoned")]
    Poisoned,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
