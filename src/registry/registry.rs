use std::fmt;

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::pet::PetRecord;

#[cfg(feature = "emitter")]
use super::events::RegistryEmitter;
use super::events::RegistryEvent;
use super::result::OperationResult;

/// The authoritative in-memory collection of pet records.
///
/// Records are kept in insertion order. Names are unique ignoring case,
/// ids are unique, and every lookup is a linear scan.
pub struct PetRegistry {
    pets: Vec<PetRecord>,
    config: RegistryConfig,
    #[cfg(feature = "emitter")]
    emitter: RegistryEmitter,
}

impl Default for PetRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PetRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PetRegistry")
            .field("pets", &self.pets)
            .field("config", &self.config)
            .finish()
    }
}

impl PetRegistry {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        PetRegistry {
            pets: Vec::new(),
            config,
            #[cfg(feature = "emitter")]
            emitter: RegistryEmitter::new(),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Append `candidate` unless its name is already taken.
    pub fn try_add(&mut self, candidate: PetRecord) -> Result<(), RegistryError> {
        if self.contains_name(&candidate.name) {
            tracing::warn!(pet_id = %candidate.id, name = %candidate.name, "rejected add: duplicate name");
            return Err(RegistryError::DuplicateName {
                name: candidate.name,
            });
        }

        if self.config.reject_duplicate_ids && self.position(candidate.id.as_str()).is_some() {
            tracing::warn!(pet_id = %candidate.id, "rejected add: duplicate id");
            return Err(RegistryError::DuplicateId { id: candidate.id });
        }

        tracing::debug!(pet_id = %candidate.id, name = %candidate.name, "pet added");
        self.pets.push(candidate.clone());
        self.notify(RegistryEvent::PetAdded(candidate));
        Ok(())
    }

    pub fn add(&mut self, candidate: PetRecord) -> OperationResult {
        self.try_add(candidate).into()
    }

    /// Replace the record that shares `candidate.id`, keeping its position.
    pub fn try_update(&mut self, candidate: PetRecord) -> Result<(), RegistryError> {
        if self.config.unique_names_on_update
            && self
                .pets
                .iter()
                .any(|pet| pet.id != candidate.id && pet.same_name_as(&candidate.name))
        {
            tracing::warn!(pet_id = %candidate.id, name = %candidate.name, "rejected update: duplicate name");
            return Err(RegistryError::DuplicateName {
                name: candidate.name,
            });
        }

        match self.position(candidate.id.as_str()) {
            Some(index) => {
                tracing::debug!(pet_id = %candidate.id, "pet updated");
                self.pets[index] = candidate.clone();
                self.notify(RegistryEvent::PetUpdated(candidate));
                Ok(())
            }
            None if self.config.reject_unknown_update => {
                tracing::warn!(pet_id = %candidate.id, "rejected update: unknown id");
                Err(RegistryError::NotFound { id: candidate.id })
            }
            None => {
                tracing::debug!(pet_id = %candidate.id, "update matched no pet");
                Ok(())
            }
        }
    }

    pub fn update(&mut self, candidate: PetRecord) -> OperationResult {
        self.try_update(candidate).into()
    }

    /// Remove the record with `id`. Unknown ids are ignored.
    pub fn delete(&mut self, id: &str) {
        let before = self.pets.len();
        self.pets.retain(|pet| pet.id.as_str() != id);
        if self.pets.len() == before {
            tracing::trace!(pet_id = id, "delete matched no pet");
            return;
        }

        tracing::debug!(pet_id = id, "pet deleted");
        self.notify(RegistryEvent::PetDeleted { id: id.into() });
    }

    /// Records whose name contains `query`, ignoring case, in registry order.
    pub fn search(&self, query: &str) -> Vec<PetRecord> {
        let matches: Vec<PetRecord> = self
            .pets
            .iter()
            .filter(|pet| pet.name_contains(query))
            .cloned()
            .collect();
        tracing::trace!(query, matches = matches.len(), "search");
        matches
    }

    pub fn list(&self) -> Vec<PetRecord> {
        self.pets.clone()
    }

    pub fn pets(&self) -> &[PetRecord] {
        &self.pets
    }

    pub fn get(&self, id: &str) -> Option<&PetRecord> {
        self.pets.iter().find(|pet| pet.id.as_str() == id)
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.pets.iter().any(|pet| pet.same_name_as(name))
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    /// Register a listener for one of the [`RegistryEvent`] type names.
    ///
    /// The listener receives the JSON payload; decode it with
    /// [`RegistryEvent::decode`].
    #[cfg(feature = "emitter")]
    pub fn on<F>(&mut self, event_type: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.emitter.on(event_type, listener);
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.pets.iter().position(|pet| pet.id.as_str() == id)
    }

    #[cfg(feature = "emitter")]
    fn notify(&mut self, event: RegistryEvent) {
        self.emitter.enqueue(event);
        self.emitter.emit_queued();
    }

    #[cfg(not(feature = "emitter"))]
    fn notify(&mut self, _event: RegistryEvent) {}
}
