//! Entity structs for pet store domain objects.
//!
//! Entities implement `Serialize`, `Deserialize` and `JsonSchema` so the
//! persisted shape can be checked against a generated schema.

mod pet;

pub use pet::{DEFAULT_STATUS, Pet};
