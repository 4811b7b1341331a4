//! Response envelopes printed by the `petstore` binary.
//!
//! Every command answers with a single-key object, `{"message": ...}`, where
//! the value is either a fixed text or the list of matching pets.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Pet;

/// Reply to a successful `add`.
pub const PET_ADDED: &str = "New pet, yay!";

/// Reply for operations that exist in the API contract but do nothing.
pub const NOT_IMPLEMENTED: &str = "NotImplementedYet";

/// The `{"message": ...}` wrapper around every response body.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MessageResponse<T> {
    pub message: T,
}

impl<T> MessageResponse<T> {
    pub const fn new(message: T) -> Self {
        Self { message }
    }
}

/// Response for commands that return a fixed text.
pub type TextResponse = MessageResponse<String>;

/// Response for the find commands.
pub type PetListResponse = MessageResponse<Vec<Pet>>;

impl TextResponse {
    #[must_use]
    pub fn pet_added() -> Self {
        Self::new(PET_ADDED.to_string())
    }

    #[must_use]
    pub fn not_implemented() -> Self {
        Self::new(NOT_IMPLEMENTED.to_string())
    }

    /// Reply to `delete`, carrying the number of removed records.
    #[must_use]
    pub fn deleted(count: i64) -> Self {
        Self::new(format!("Yes, it worked. {count} records deleted."))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fixed_messages() {
        assert_eq!(TextResponse::pet_added().message, "New pet, yay!");
        assert_eq!(TextResponse::not_implemented().message, "NotImplementedYet");
        assert_eq!(
            TextResponse::deleted(2).message,
            "Yes, it worked. 2 records deleted."
        );
    }

    #[test]
    fn envelope_wraps_pet_list() {
        let response = PetListResponse::new(vec![Pet::new(1, "Rex", None, None, None)]);
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"message":[{"id":1,"name":"Rex","description":null,"status":"unknown","tags":[]}]}"#
        );
    }

    #[test]
    fn empty_list_is_still_an_array() {
        let json = serde_json::to_string(&PetListResponse::new(Vec::new())).unwrap();
        assert_eq!(json, r#"{"message":[]}"#);
    }
}
