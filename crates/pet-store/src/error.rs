//! Storage error types for pet-store.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from reading or writing the storage file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file is missing, unreadable, or does not hold a JSON array of pets.
    #[error("Storage read failed for {}: {source}", path.display())]
    StorageRead {
        path: PathBuf,
        #[source]
        source: StorageFailure,
    },

    /// The file could not be written.
    #[error("Storage write failed for {}: {source}", path.display())]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: StorageFailure,
    },
}

/// Underlying cause of a [`StoreError`].
#[derive(Debug, Error)]
pub enum StorageFailure {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored id does not fit in an `i64`.
    #[error("id {0} is outside the 64-bit integer range")]
    IdOutOfRange(String),

    /// A stored id is neither a number, a string nor null.
    #[error("id {0} is not a number or string")]
    InvalidId(String),

    /// A stored id leaves no room for the next one.
    #[error("no id follows {0}")]
    IdsExhausted(i64),
}

impl StoreError {
    /// Path of the storage file involved.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::StorageRead { path, .. } | Self::StorageWrite { path, .. } => path,
        }
    }
}
