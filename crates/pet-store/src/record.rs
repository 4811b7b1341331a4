//! Lenient decoding of stored records into `Pet`s.
//!
//! Records go through `Pet::new`, so a missing `status` or `tags` picks up
//! the construction defaults. The `id` is coerced the way an integer
//! conversion would treat it; ids that cannot be converted are errors.

use pet_core::entities::Pet;
use serde::Deserialize;
use serde_json::Value;

use crate::error::StorageFailure;

/// 2^63, the first float past `i64::MAX`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

#[derive(Debug, Deserialize)]
pub(crate) struct StoredPet {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
}

impl StoredPet {
    pub(crate) fn into_pet(self) -> Result<Pet, StorageFailure> {
        Ok(Pet::new(
            coerce_id(&self.id)?,
            self.name.unwrap_or_default(),
            self.description,
            self.status,
            self.tags,
        ))
    }
}

/// Parse the whole file body. A `null` document counts as an empty collection.
pub(crate) fn decode(raw: &str) -> Result<Vec<Pet>, StorageFailure> {
    let records: Option<Vec<StoredPet>> = serde_json::from_str(raw)?;
    records
        .unwrap_or_default()
        .into_iter()
        .map(StoredPet::into_pet)
        .collect()
}

/// Integer value of a stored id.
///
/// Floats truncate toward zero, strings use their leading decimal digits
/// (optional sign) and `null` is `0`. Values that do not fit in an `i64`
/// and ids of any other JSON type are errors.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn coerce_id(value: &Value) -> Result<i64, StorageFailure> {
    match value {
        Value::Null => Ok(0),
        Value::Number(n) => match (n.as_i64(), n.as_f64()) {
            (Some(id), _) => Ok(id),
            (None, Some(f)) if (-I64_LIMIT..I64_LIMIT).contains(&f) => Ok(f.trunc() as i64),
            _ => Err(StorageFailure::IdOutOfRange(n.to_string())),
        },
        Value::String(s) => leading_integer(s),
        other => Err(StorageFailure::InvalidId(other.to_string())),
    }
}

fn leading_integer(s: &str) -> Result<i64, StorageFailure> {
    let s = s.trim_start();
    let sign = usize::from(s.starts_with(['-', '+']));
    let end = s[sign..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s.len(), |i| sign + i);
    if end == sign {
        return Ok(0);
    }
    let digits = &s[..end];
    digits
        .parse()
        .map_err(|_| StorageFailure::IdOutOfRange(digits.to_string()))
}
