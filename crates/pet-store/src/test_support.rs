//! Shared helpers for pet-store unit tests.

use pet_core::entities::Pet;
use tempfile::TempDir;

use crate::PetStore;

pub const STORAGE_FILE: &str = "pets.json";

/// A temp dir holding `pets.json` with `pets`, and a store bound to it.
pub fn store_with(pets: &[Pet]) -> (TempDir, PetStore) {
    let dir = tempfile::tempdir().unwrap();
    let json = serde_json::to_string_pretty(pets).unwrap();
    std::fs::write(dir.path().join(STORAGE_FILE), json).unwrap();
    let store = PetStore::open(dir.path().join(STORAGE_FILE));
    (dir, store)
}

/// Replace the storage file body verbatim.
pub fn write_raw(dir: &TempDir, body: &str) {
    std::fs::write(dir.path().join(STORAGE_FILE), body).unwrap();
}

pub fn rex() -> Pet {
    Pet::new(
        1,
        "Rex",
        None,
        Some("available".into()),
        Some(vec!["dog".into(), "friendly".into()]),
    )
}

pub fn pet(id: i64, name: &str, status: &str, tags: &[&str]) -> Pet {
    Pet::new(
        id,
        name,
        None,
        Some(status.to_string()),
        Some(tags.iter().map(ToString::to_string).collect()),
    )
}
