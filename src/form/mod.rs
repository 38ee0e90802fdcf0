//! Headless form controller.
//!
//! [`PetForm`] holds the transient field values a screen edits, switches
//! between adding a new pet and editing an existing one, and submits
//! candidate records to a [`PetRepository`]. Rendering is left to the host.

mod validation;

pub use validation::{
    sanitize_age, validate_required, FieldErrors, AGE_REQUIRED, DESCRIPTION_REQUIRED,
    NAME_REQUIRED,
};

use crate::catalog::Catalog;
use crate::pet::{PetId, PetRecord};
use crate::registry::PetRepository;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Add,
    Edit(PetId),
}

impl FormMode {
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Add => "Create a New Pet",
            FormMode::Edit(_) => "Updating a Pet",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Add => "Add Pet",
            FormMode::Edit(_) => "Update Pet",
        }
    }
}

/// What happened on [`PetForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Required fields were missing; nothing was sent to the repository.
    Invalid(FieldErrors),
    Added(PetId),
    Updated(PetId),
    /// The repository refused the candidate; fields are left as entered.
    Rejected(String),
}

#[derive(Debug, Clone, Default)]
pub struct PetForm {
    catalog: Catalog,
    mode: FormMode,
    name: String,
    age: String,
    description: String,
    species: Option<String>,
    breed: Option<String>,
    image: Option<String>,
    field_errors: FieldErrors,
    form_message: Option<String>,
}

impl PetForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        PetForm {
            catalog,
            ..Self::default()
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn title(&self) -> &'static str {
        self.mode.title()
    }

    pub fn submit_label(&self) -> &'static str {
        self.mode.submit_label()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> &str {
        &self.age
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn species(&self) -> Option<&str> {
        self.species.as_deref()
    }

    pub fn breed(&self) -> Option<&str> {
        self.breed.as_deref()
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    /// Message from the last submit, if the repository sent one.
    pub fn form_message(&self) -> Option<&str> {
        self.form_message.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_age(&mut self, age: &str) {
        self.age = sanitize_age(age);
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Breed choices for the selected species.
    pub fn breed_options(&self) -> &[String] {
        match &self.species {
            Some(species) => self.catalog.breeds_for(species),
            None => &[],
        }
    }

    /// Returns false, leaving the selection alone, for unknown species.
    pub fn select_species(&mut self, species: &str) -> bool {
        if !self.catalog.contains_species(species) {
            return false;
        }
        if self.species.as_deref() != Some(species) {
            self.species = Some(species.to_string());
            self.breed = None;
        }
        true
    }

    /// Returns false unless the breed belongs to the selected species.
    pub fn select_breed(&mut self, breed: &str) -> bool {
        let allowed = self
            .species
            .as_deref()
            .is_some_and(|species| self.catalog.allows(species, breed));
        if allowed {
            self.breed = Some(breed.to_string());
        }
        allowed
    }

    pub fn clear_species(&mut self) {
        self.species = None;
        self.breed = None;
    }

    pub fn validate(&self) -> FieldErrors {
        validate_required(&self.name, &self.age, &self.description)
    }

    /// Load `pet` into the fields and switch to edit mode.
    pub fn begin_edit(&mut self, pet: &PetRecord) {
        self.mode = FormMode::Edit(pet.id.clone());
        self.name = pet.name.clone();
        self.age = pet.age.clone();
        self.description = pet.description.clone();
        self.species = pet.category.clone();
        self.breed = pet.breed.clone();
        self.image = pet.image.clone();
        self.field_errors = FieldErrors::default();
        self.form_message = None;
    }

    pub fn cancel_edit(&mut self) {
        self.mode = FormMode::Add;
        self.clear_fields();
    }

    pub fn submit<R>(&mut self, repo: &mut R) -> SubmitOutcome
    where
        R: PetRepository + ?Sized,
    {
        let errors = self.validate();
        self.field_errors = errors.clone();
        if !errors.is_empty() {
            return SubmitOutcome::Invalid(errors);
        }

        let candidate = self.candidate();
        let id = candidate.id.clone();
        let editing = self.is_editing();
        let result = if editing {
            repo.update(candidate)
        } else {
            repo.add(candidate)
        };
        self.form_message = result.message.clone();

        if !result.success {
            tracing::debug!(pet_id = %id, "form submit rejected");
            return SubmitOutcome::Rejected(result.message.unwrap_or_default());
        }

        self.mode = FormMode::Add;
        self.clear_fields();
        if editing {
            SubmitOutcome::Updated(id)
        } else {
            SubmitOutcome::Added(id)
        }
    }

    /// Pets to show under the search box: everything for an empty query.
    pub fn visible_pets<R>(repo: &R, query: &str) -> Vec<PetRecord>
    where
        R: PetRepository + ?Sized,
    {
        if query.is_empty() {
            repo.list()
        } else {
            repo.search(query)
        }
    }

    fn candidate(&self) -> PetRecord {
        let id = match &self.mode {
            FormMode::Edit(id) => id.clone(),
            FormMode::Add => PetId::generate(),
        };
        PetRecord {
            id,
            name: self.name.clone(),
            age: self.age.clone(),
            description: self.description.clone(),
            category: self.species.clone(),
            breed: self.breed.clone(),
            image: self.image.clone(),
        }
    }

    fn clear_fields(&mut self) {
        self.name.clear();
        self.age.clear();
        self.description.clear();
        self.species = None;
        self.breed = None;
        self.image = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::PetRegistry;
    use assert_matches::assert_matches;

    fn filled(name: &str) -> PetForm {
        let mut form = PetForm::new();
        form.set_name(name);
        form.set_age("3");
        form.set_description("friendly");
        form
    }

    #[test]
    fn starts_in_add_mode() {
        let form = PetForm::new();
        assert_eq!(form.mode(), &FormMode::Add);
        assert_eq!(form.title(), "Create a New Pet");
        assert_eq!(form.submit_label(), "Add Pet");
    }

    #[test]
    fn invalid_submit_does_not_touch_repository() {
        let mut registry = PetRegistry::new();
        let mut form = PetForm::new();
        form.set_name("Rex");

        let outcome = form.submit(&mut registry);
        assert_matches!(outcome, SubmitOutcome::Invalid(errors) if errors.name.is_none()
            && errors.age == Some(AGE_REQUIRED)
            && errors.description == Some(DESCRIPTION_REQUIRED));
        assert!(registry.is_empty());
        assert_eq!(form.field_errors().age, Some(AGE_REQUIRED));
    }

    #[test]
    fn add_clears_fields() {
        let mut registry = PetRegistry::new();
        let mut form = filled("Rex");
        assert!(form.select_species("Dog"));
        assert!(form.select_breed("Pug"));

        let outcome = form.submit(&mut registry);
        assert_matches!(outcome, SubmitOutcome::Added(_));
        assert_eq!(form.name(), "");
        assert_eq!(form.age(), "");
        assert_eq!(form.species(), None);
        assert_eq!(form.form_message(), None);

        let saved = &registry.pets()[0];
        assert_eq!(saved.name, "Rex");
        assert_eq!(saved.category.as_deref(), Some("Dog"));
        assert_eq!(saved.breed.as_deref(), Some("Pug"));
    }

    #[test]
    fn rejected_add_keeps_fields() {
        let mut registry = PetRegistry::new();
        assert_matches!(filled("Rex").submit(&mut registry), SubmitOutcome::Added(_));

        let mut form = filled("rex");
        let outcome = form.submit(&mut registry);
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected("Pet names must be unique".to_string())
        );
        assert_eq!(form.name(), "rex");
        assert_eq!(form.age(), "3");
        assert_eq!(form.form_message(), Some("Pet names must be unique"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn edit_round_trip_returns_to_add_mode() {
        let mut registry = PetRegistry::new();
        let pet = PetRecord::new("1", "Rex", "3", "friendly").with_image("rex.png");
        registry.try_add(pet.clone()).unwrap();

        let mut form = PetForm::new();
        form.begin_edit(&pet);
        assert!(form.is_editing());
        assert_eq!(form.title(), "Updating a Pet");
        assert_eq!(form.submit_label(), "Update Pet");
        assert_eq!(form.name(), "Rex");

        form.set_age("4");
        form.set_description("older now");
        let outcome = form.submit(&mut registry);
        assert_eq!(outcome, SubmitOutcome::Updated(PetId::from("1")));
        assert_eq!(form.mode(), &FormMode::Add);
        assert_eq!(form.name(), "");

        let updated = registry.get("1").unwrap();
        assert_eq!(updated.age, "4");
        assert_eq!(updated.description, "older now");
        assert_eq!(updated.image.as_deref(), Some("rex.png"));
    }

    #[test]
    fn cancel_edit_clears_fields() {
        let mut form = PetForm::new();
        form.begin_edit(&PetRecord::new("1", "Rex", "3", "friendly"));
        form.cancel_edit();
        assert_eq!(form.mode(), &FormMode::Add);
        assert_eq!(form.name(), "");
        assert_eq!(form.description(), "");
    }

    #[test]
    fn species_change_resets_breed() {
        let mut form = PetForm::new();
        assert!(form.breed_options().is_empty());
        assert!(!form.select_breed("Pug"));

        assert!(form.select_species("Dog"));
        assert!(form.select_breed("Pug"));
        assert!(!form.select_breed("Persian"));
        assert_eq!(form.breed(), Some("Pug"));

        assert!(form.select_species("Cat"));
        assert_eq!(form.breed(), None);
        assert_eq!(form.breed_options(), ["Calico", "Persian", "Siamese", "Other"]);

        assert!(!form.select_species("Hamster"));
        assert_eq!(form.species(), Some("Cat"));
    }

    #[test]
    fn age_input_is_sanitized() {
        let mut form = PetForm::new();
        form.set_age("12 years");
        assert_eq!(form.age(), "12");
    }

    #[test]
    fn visible_pets_uses_search_only_for_non_empty_query() {
        let mut registry = PetRegistry::new();
        registry.try_add(PetRecord::new("1", "Rex", "3", "a")).unwrap();
        registry.try_add(PetRecord::new("2", "Milo", "2", "b")).unwrap();

        assert_eq!(PetForm::visible_pets(&registry, "").len(), 2);
        let found = PetForm::visible_pets(&registry, "mi");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Milo");
    }
}
