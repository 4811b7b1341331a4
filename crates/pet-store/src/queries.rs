//! Read-only lookups over a freshly loaded collection.
//!
//! Results keep storage order. Loading still refreshes `current_id`.

use pet_core::entities::Pet;

use crate::PetStore;
use crate::error::StoreError;

impl PetStore {
    /// Every stored pet, in storage order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StorageRead` if the file cannot be loaded.
    pub fn list_all(&self) -> Result<Vec<Pet>, StoreError> {
        let mut state = self.lock();
        self.load(&mut state)
    }

    /// All pets carrying `id`. Ids are not checked for uniqueness, so this
    /// can hold more than one record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StorageRead` if the file cannot be loaded.
    pub fn find_by_id(&self, id: i64) -> Result<Vec<Pet>, StoreError> {
        let mut state = self.lock();
        let pets: Vec<Pet> = self
            .load(&mut state)?
            .into_iter()
            .filter(|pet| pet.id() == id)
            .collect();
        tracing::debug!(id, matches = pets.len(), "find_by_id");
        Ok(pets)
    }

    /// Pets whose status is one of `statuses`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StorageRead` if the file cannot be loaded.
    pub fn find_by_status<S: AsRef<str>>(&self, statuses: &[S]) -> Result<Vec<Pet>, StoreError> {
        let mut state = self.lock();
        let pets: Vec<Pet> = self
            .load(&mut state)?
            .into_iter()
            .filter(|pet| statuses.iter().any(|s| s.as_ref() == pet.status()))
            .collect();
        tracing::debug!(
            statuses = statuses.len(),
            matches = pets.len(),
            "find_by_status"
        );
        Ok(pets)
    }

    /// Pets carrying every tag in `tags`. No tags matches everything.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StorageRead` if the file cannot be loaded.
    pub fn find_by_tags<S: AsRef<str>>(&self, tags: &[S]) -> Result<Vec<Pet>, StoreError> {
        let mut state = self.lock();
        let pets: Vec<Pet> = self
            .load(&mut state)?
            .into_iter()
            .filter(|pet| tags.iter().all(|tag| pet.tagged_with(tag.as_ref())))
            .collect();
        tracing::debug!(tags = tags.len(), matches = pets.len(), "find_by_tags");
        Ok(pets)
    }

    /// Pets whose tag list contains `tag`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StorageRead` if the file cannot be loaded.
    pub fn find_by_tag(&self, tag: &str) -> Result<Vec<Pet>, StoreError> {
        let mut state = self.lock();
        let pets: Vec<Pet> = self
            .load(&mut state)?
            .into_iter()
            .filter(|pet| pet.tags().iter().any(|t| t == tag))
            .collect();
        tracing::debug!(tag, matches = pets.len(), "find_by_tag");
        Ok(pets)
    }
}
