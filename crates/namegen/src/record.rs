//! Name record types.
//!
//! A record is one entry of a name dataset: the name itself plus optional
//! gender and popularity metadata. Records are deserialized straight from the
//! dataset JSON and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Gender tag carried by first-name records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Names tagged as male.
    Male,
    /// Names tagged as female.
    Female,
}

/// A single entry in a name dataset.
///
/// An absent `weight` deserializes to `0`, which keeps the record out of
/// weighted draws unless every record in the pool weighs zero.
///
/// # Example
///
/// ```
/// use namegen::{Gender, NameRecord};
///
/// let record: NameRecord =
///     serde_json::from_str(r#"{"name": "Ann", "gender": "female"}"#).expect("valid record");
///
/// assert_eq!(record.name(), "Ann");
/// assert_eq!(record.gender(), Some(Gender::Female));
/// assert_eq!(record.weight(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NameRecord {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gender: Option<Gender>,
    #[serde(default)]
    weight: u32,
}

impl NameRecord {
    /// Creates a record from its parts.
    #[must_use]
    pub fn new(name: impl Into<String>, gender: Option<Gender>, weight: u32) -> Self {
        Self {
            name: name.into(),
            gender,
            weight,
        }
    }

    /// Returns the name text.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the gender tag, if the record has one.
    #[must_use]
    pub const fn gender(&self) -> Option<Gender> {
        self.gender
    }

    /// Returns the popularity weight (`0` when the dataset omitted it).
    #[must_use]
    pub const fn weight(&self) -> u32 {
        self.weight
    }
}
