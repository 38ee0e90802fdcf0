use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a pet record.
///
/// Ids are assigned once, when the record is first built, and never change.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetId(String);

impl PetId {
    pub fn new(id: impl Into<String>) -> Self {
        PetId(id.into())
    }

    /// Time-ordered UUIDv7, so ids sort in creation order.
    pub fn generate() -> Self {
        PetId(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PetId {
    fn from(id: &str) -> Self {
        PetId(id.to_string())
    }
}

impl From<String> for PetId {
    fn from(id: String) -> Self {
        PetId(id)
    }
}

impl AsRef<str> for PetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A single pet as held by the registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetRecord {
    pub id: PetId,
    pub name: String,
    /// Whole years, digits only.
    pub age: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl PetRecord {
    pub fn new(
        id: impl Into<PetId>,
        name: impl Into<String>,
        age: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        PetRecord {
            id: id.into(),
            name: name.into(),
            age: age.into(),
            description: description.into(),
            category: None,
            breed: None,
            image: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_breed(mut self, breed: impl Into<String>) -> Self {
        self.breed = Some(breed.into());
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Case-insensitive name comparison used for the uniqueness rule.
    pub fn same_name_as(&self, name: &str) -> bool {
        fold_case(&self.name) == fold_case(name)
    }

    /// True when `query` occurs anywhere in the name, ignoring case.
    pub fn name_contains(&self, query: &str) -> bool {
        fold_case(&self.name).contains(&fold_case(query))
    }
}

pub(crate) fn fold_case(value: &str) -> String {
    value.to_uppercase()
}
