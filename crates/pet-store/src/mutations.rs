//! Load-mutate-save operations.

use pet_core::entities::Pet;

use crate::PetStore;
use crate::error::{StorageFailure, StoreError};

impl PetStore {
    /// Append a new pet with the next id and rewrite the file.
    ///
    /// The id is `current_id` as recomputed by this call's load. The counter
    /// only advances once the save has succeeded.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StorageRead` or `StoreError::StorageWrite`; on
    /// either, `current_id` is not advanced past the loaded value. A pet
    /// that would take `i64::MAX` is refused before anything is written.
    pub fn add_new(
        &self,
        name: impl Into<String>,
        description: Option<String>,
        status: Option<String>,
        tags: Option<Vec<String>>,
    ) -> Result<(), StoreError> {
        let mut state = self.lock();
        let mut pets = self.load(&mut state)?;
        let id = state.current_id;
        let Some(next_id) = id.checked_add(1) else {
            return Err(self.read_error(StorageFailure::IdsExhausted(id)));
        };
        pets.push(Pet::new(id, name, description, status, tags));

        self.save(&pets)?;
        state.current_id = next_id;
        tracing::debug!(id, records = pets.len(), "added pet");
        Ok(())
    }

    /// Remove every pet with `id` and report how many records disappeared.
    ///
    /// The count is the size before the write minus the size of a fresh
    /// reload after it, so it reflects what the file holds afterwards.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StorageRead` or `StoreError::StorageWrite`.
    pub fn delete_pet(&self, id: i64) -> Result<i64, StoreError> {
        let mut state = self.lock();
        let before = self.load(&mut state)?.len();

        let remaining: Vec<Pet> = self
            .load(&mut state)?
            .into_iter()
            .filter(|pet| pet.id() != id)
            .collect();
        self.save(&remaining)?;

        let after = self.load(&mut state)?.len();
        let deleted = count(before) - count(after);
        tracing::debug!(id, deleted, "deleted pet");
        Ok(deleted)
    }
}

fn count(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}
