use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Status assigned when a pet is constructed without one.
pub const DEFAULT_STATUS: &str = "unknown";

/// A single pet record.
///
/// The `id` is fixed at construction; the store is the only place that picks
/// it. Field order here is the key order of the JSON form. Deserializing
/// goes through [`Pet::new`], so decoded pets get the same defaults.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq, Eq)]
pub struct Pet {
    id: i64,
    name: String,
    description: Option<String>,
    status: String,
    tags: Vec<String>,
}

impl Pet {
    /// Build a pet, applying the construction defaults.
    ///
    /// A missing or empty `status` becomes [`DEFAULT_STATUS`] and missing
    /// `tags` become an empty list. `description` is kept as given.
    #[must_use]
    pub fn new(
        id: i64,
        name: impl Into<String>,
        description: Option<String>,
        status: Option<String>,
        tags: Option<Vec<String>>,
    ) -> Self {
        let status = status
            .filter(|status| !status.is_empty())
            .unwrap_or_else(|| DEFAULT_STATUS.to_string());

        Self {
            id,
            name: name.into(),
            description,
            status,
            tags: tags.unwrap_or_default(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> i64 {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    /// Replace the status. No defaulting happens after construction.
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    /// Whether `tag` is one of this pet's tags.
    #[must_use]
    pub fn tagged_with(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Append a tag. Duplicates are kept.
    pub fn tag_with(&mut self, tag: impl Into<String>) {
        self.tags.push(tag.into());
    }

    /// Remove the first occurrence of `tag`, if any.
    pub fn untag(&mut self, tag: &str) {
        if let Some(pos) = self.tags.iter().position(|t| t == tag) {
            self.tags.remove(pos);
        }
    }

    /// JSON object form: `{id, name, description, status, tags}`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "name": self.name,
            "description": self.description,
            "status": self.status,
            "tags": self.tags,
        })
    }
}

#[derive(Deserialize)]
struct PetFields {
    id: i64,
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
}

impl<'de> Deserialize<'de> for Pet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = PetFields::deserialize(deserializer)?;
        Ok(Self::new(
            fields.id,
            fields.name,
            fields.description,
            fields.status,
            fields.tags,
        ))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn rex() -> Pet {
        Pet::new(
            1,
            "Rex",
            Some("good boy".into()),
            Some("available".into()),
            Some(vec!["dog".into(), "friendly".into()]),
        )
    }

    #[rstest]
    #[case(None)]
    #[case(Some(String::new()))]
    fn missing_status_defaults_to_unknown(#[case] status: Option<String>) {
        let pet = Pet::new(7, "Tom", None, status, None);
        assert_eq!(pet.status(), "unknown");
    }

    #[test]
    fn explicit_status_is_kept() {
        assert_eq!(rex().status(), "available");
    }

    #[test]
    fn missing_tags_default_to_empty() {
        let pet = Pet::new(7, "Tom", None, None, None);
        assert!(pet.tags().is_empty());
        assert_eq!(pet.description(), None);
    }

    #[test]
    fn tagged_with_checks_membership() {
        let pet = rex();
        assert!(pet.tagged_with("dog"));
        assert!(pet.tagged_with("friendly"));
        assert!(!pet.tagged_with("cat"));
    }

    #[test]
    fn tag_with_appends_duplicates() {
        let mut pet = rex();
        pet.tag_with("dog");
        assert_eq!(pet.tags(), ["dog", "friendly", "dog"]);
    }

    #[test]
    fn untag_removes_first_occurrence_only() {
        let mut pet = rex();
        pet.tag_with("dog");
        pet.untag("dog");
        assert_eq!(pet.tags(), ["friendly", "dog"]);
    }

    #[test]
    fn untag_missing_tag_is_noop() {
        let mut pet = rex();
        pet.untag("cat");
        assert_eq!(pet, rex());
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(rex(), rex());

        let mut renamed = rex();
        renamed.set_name("Max");
        assert_ne!(renamed, rex());

        let other_id = Pet::new(
            2,
            "Rex",
            Some("good boy".into()),
            Some("available".into()),
            Some(vec!["dog".into(), "friendly".into()]),
        );
        assert_ne!(other_id, rex());
    }

    #[test]
    fn tag_order_matters_for_equality() {
        let reordered = Pet::new(
            1,
            "Rex",
            Some("good boy".into()),
            Some("available".into()),
            Some(vec!["friendly".into(), "dog".into()]),
        );
        assert_ne!(reordered, rex());
    }

    #[test]
    fn set_status_skips_defaulting() {
        let mut pet = rex();
        pet.set_status("");
        assert_eq!(pet.status(), "");
    }

    #[test]
    fn to_json_keeps_key_order() {
        let json = serde_json::to_string(&rex().to_json()).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"name":"Rex","description":"good boy","status":"available","tags":["dog","friendly"]}"#
        );
    }

    #[test]
    fn deserialize_applies_construction_defaults() {
        let pet: Pet = serde_json::from_str(r#"{"id": 4, "name": "Tom", "status": ""}"#).unwrap();
        assert_eq!(pet, Pet::new(4, "Tom", None, None, None));
        assert_eq!(pet.status(), "unknown");
        assert!(pet.tags().is_empty());
    }

    #[test]
    fn deserialize_keeps_explicit_fields() {
        let raw = serde_json::to_string(&rex()).unwrap();
        assert_eq!(serde_json::from_str::<Pet>(&raw).unwrap(), rex());
    }

    #[test]
    fn deserialize_requires_id_and_name() {
        assert!(serde_json::from_str::<Pet>(r#"{"name": "Tom"}"#).is_err());
        assert!(serde_json::from_str::<Pet>(r#"{"id": 1}"#).is_err());
    }

    #[test]
    fn serialize_matches_to_json() {
        let pet = Pet::new(3, "Fido", None, None, None);
        assert_eq!(serde_json::to_value(&pet).unwrap(), pet.to_json());
        assert_eq!(
            serde_json::to_string(&pet).unwrap(),
            r#"{"id":3,"name":"Fido","description":null,"status":"unknown","tags":[]}"#
        );
    }
}
