//! Species → breed reference table.
//!
//! The catalog is consulted by the form layer when it builds candidate
//! records. The registry itself never validates against it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// One species and the breeds that may be chosen for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetCategory {
    pub category: String,
    #[serde(default)]
    pub breeds: Vec<String>,
}

impl PetCategory {
    pub fn new(category: impl Into<String>, breeds: &[&str]) -> Self {
        PetCategory {
            category: category.into(),
            breeds: breeds.iter().map(|breed| breed.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<PetCategory>,
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog {
            categories: vec![
                PetCategory::new(
                    "Dog",
                    &["Golden Retriever", "German Shepherd", "Pug", "Other"],
                ),
                PetCategory::new("Cat", &["Calico", "Persian", "Siamese", "Other"]),
            ],
        }
    }
}

impl Catalog {
    pub fn new(categories: Vec<PetCategory>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for category in &categories {
            if category.category.trim().is_empty() {
                return Err(CatalogError::EmptySpecies);
            }
            if !seen.insert(category.category.as_str()) {
                return Err(CatalogError::DuplicateSpecies(category.category.clone()));
            }
        }
        Ok(Catalog { categories })
    }

    /// Parse a JSON array of `{ "category": ..., "breeds": [...] }`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let categories: Vec<PetCategory> = serde_json::from_str(json)?;
        Catalog::new(categories)
    }

    pub fn categories(&self) -> &[PetCategory] {
        &self.categories
    }

    /// Species names in table order.
    pub fn species(&self) -> Vec<&str> {
        self.categories
            .iter()
            .map(|category| category.category.as_str())
            .collect()
    }

    pub fn contains_species(&self, species: &str) -> bool {
        self.find(species).is_some()
    }

    /// Breeds for `species`, empty when the species is unknown.
    pub fn breeds_for(&self, species: &str) -> &[String] {
        self.find(species)
            .map(|category| category.breeds.as_slice())
            .unwrap_or(&[])
    }

    pub fn allows(&self, species: &str, breed: &str) -> bool {
        self.breeds_for(species).iter().any(|known| known == breed)
    }

    fn find(&self, species: &str) -> Option<&PetCategory> {
        self.categories
            .iter()
            .find(|category| category.category == species)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn default_table() {
        let catalog = Catalog::default();
        assert_eq!(catalog.species(), vec!["Dog", "Cat"]);
        assert_eq!(
            catalog.breeds_for("Dog"),
            ["Golden Retriever", "German Shepherd", "Pug", "Other"]
        );
        assert_eq!(
            catalog.breeds_for("Cat"),
            ["Calico", "Persian", "Siamese", "Other"]
        );
    }

    #[test]
    fn breeds_are_scoped_to_species() {
        let catalog = Catalog::default();
        assert!(catalog.allows("Dog", "Pug"));
        assert!(!catalog.allows("Cat", "Pug"));
        assert!(catalog.allows("Cat", "Other"));
        assert!(!catalog.allows("Hamster", "Other"));
        assert!(catalog.breeds_for("Hamster").is_empty());
    }

    #[test]
    fn from_json_with_optional_breeds() {
        let catalog = Catalog::from_json(
            r#"[{"category":"Bird","breeds":["Parrot"]},{"category":"Fish"}]"#,
        )
        .unwrap();
        assert_eq!(catalog.species(), vec!["Bird", "Fish"]);
        assert!(catalog.contains_species("Fish"));
        assert!(catalog.breeds_for("Fish").is_empty());
        assert!(catalog.allows("Bird", "Parrot"));
    }

    #[test]
    fn duplicate_species_rejected() {
        let result = Catalog::from_json(r#"[{"category":"Dog"},{"category":"Dog"}]"#);
        assert_matches!(result, Err(CatalogError::DuplicateSpecies(name)) if name == "Dog");
    }

    #[test]
    fn empty_species_rejected() {
        let result = Catalog::new(vec![PetCategory::new(" ", &[])]);
        assert_matches!(result, Err(CatalogError::EmptySpecies));
    }

    #[test]
    fn malformed_json_rejected() {
        assert_matches!(Catalog::from_json("{"), Err(CatalogError::Json(_)));
    }
}
