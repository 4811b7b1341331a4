//! # pet-store
//!
//! JSON file persistence for pet records.
//!
//! The storage file is the only source of truth: every operation reloads
//! the full collection, works on that snapshot and, for mutations, rewrites
//! the whole file. Nothing is cached between calls except the next id to
//! hand out, which each load recomputes from the trailing record.

pub mod error;
pub mod mutations;
pub mod queries;
mod record;

#[cfg(test)]
mod test_support;

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use pet_config::StorageConfig;
use pet_core::entities::Pet;

use error::{StorageFailure, StoreError};

/// Mutable state guarded by the store's lock.
#[derive(Debug)]
struct StoreState {
    current_id: i64,
}

/// Handle on a pet storage file.
///
/// Every public operation holds an internal mutex for its whole
/// load-mutate-save sequence, so threads sharing one `PetStore` cannot lose
/// each other's writes. Other processes writing the same file are not
/// coordinated with.
#[derive(Debug)]
pub struct PetStore {
    path: PathBuf,
    state: Mutex<StoreState>,
}

impl PetStore {
    /// Bind a store to `path`. No I/O happens until the first operation.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            state: Mutex::new(StoreState { current_id: 1 }),
        }
    }

    /// Bind a store to the configured storage file.
    #[must_use]
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::open(config.path_buf())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The id the next `add_new` will assign, as of the last load.
    #[must_use]
    pub fn current_id(&self) -> i64 {
        self.lock().current_id
    }

    /// Create the storage file holding an empty array.
    ///
    /// Missing parent directories are created. An existing file is left
    /// untouched. Returns whether a file was created.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StorageWrite` if the directory or file cannot be
    /// created.
    pub fn init(&self) -> Result<bool, StoreError> {
        let _guard = self.lock();
        if self.path.exists() {
            tracing::debug!(path = %self.path.display(), "storage file already present");
            return Ok(false);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.write_error(e.into()))?;
        }
        self.save(&[])?;
        tracing::debug!(path = %self.path.display(), "created empty storage file");
        Ok(true)
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        // State is rebuilt by every load; poisoning is harmless.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read and decode the whole file, then reset `current_id` to one past
    /// the trailing record's id (or 1 for an empty collection).
    fn load(&self, state: &mut StoreState) -> Result<Vec<Pet>, StoreError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|e| self.read_error(e.into()))?;
        let pets = record::decode(&raw).map_err(|e| self.read_error(e))?;

        let last_id = pets.last().map_or(0, Pet::id);
        let Some(next_id) = last_id.checked_add(1) else {
            return Err(self.read_error(StorageFailure::IdsExhausted(last_id)));
        };
        state.current_id = next_id;
        tracing::trace!(
            path = %self.path.display(),
            records = pets.len(),
            current_id = state.current_id,
            "loaded pets"
        );
        Ok(pets)
    }

    /// Overwrite the whole file with the pretty-printed collection.
    fn save(&self, pets: &[Pet]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(pets).map_err(|e| self.write_error(e.into()))?;
        std::fs::write(&self.path, json).map_err(|e| self.write_error(e.into()))?;
        tracing::trace!(path = %self.path.display(), records = pets.len(), "saved pets");
        Ok(())
    }

    fn read_error(&self, source: StorageFailure) -> StoreError {
        tracing::error!(
            path = %self.path.display(),
            error = %source,
            "failed to read pet storage"
        );
        StoreError::StorageRead {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, source: StorageFailure) -> StoreError {
        tracing::error!(
            path = %self.path.display(),
            error = %source,
            "failed to write pet storage"
        );
        StoreError::StorageWrite {
            path: self.path.clone(),
            source,
        }
    }
}
