//! PetStore - shared handle to a single registry.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::pet::PetRecord;

use super::registry::PetRegistry;
use super::result::OperationResult;

/// Clone-friendly handle to one [`PetRegistry`].
///
/// Every clone observes and mutates the same collection, so the
/// composition root can build one store and pass clones to each consumer.
#[derive(Clone, Debug, Default)]
pub struct PetStore {
    registry: Arc<RwLock<PetRegistry>>,
}

impl PetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self::from_registry(PetRegistry::with_config(config))
    }

    pub fn from_registry(registry: PetRegistry) -> Self {
        PetStore {
            registry: Arc::new(RwLock::new(registry)),
        }
    }

    fn read(&self, operation: &'static str) -> Result<RwLockReadGuard<'_, PetRegistry>, RegistryError> {
        self.registry
            .read()
            .map_err(|_| RegistryError::LockPoisoned(operation))
    }

    fn write(&self, operation: &'static str) -> Result<RwLockWriteGuard<'_, PetRegistry>, RegistryError> {
        self.registry
            .write()
            .map_err(|_| RegistryError::LockPoisoned(operation))
    }

    pub fn try_add(&self, candidate: PetRecord) -> Result<(), RegistryError> {
        self.write("add")?.try_add(candidate)
    }

    pub fn add(&self, candidate: PetRecord) -> OperationResult {
        self.try_add(candidate).into()
    }

    pub fn try_update(&self, candidate: PetRecord) -> Result<(), RegistryError> {
        self.write("update")?.try_update(candidate)
    }

    pub fn update(&self, candidate: PetRecord) -> OperationResult {
        self.try_update(candidate).into()
    }

    pub fn delete(&self, id: &str) -> Result<(), RegistryError> {
        self.write("delete")?.delete(id);
        Ok(())
    }

    pub fn search(&self, query: &str) -> Result<Vec<PetRecord>, RegistryError> {
        Ok(self.read("search")?.search(query))
    }

    pub fn list(&self) -> Result<Vec<PetRecord>, RegistryError> {
        Ok(self.read("list")?.list())
    }

    pub fn get(&self, id: &str) -> Result<Option<PetRecord>, RegistryError> {
        Ok(self.read("get")?.get(id).cloned())
    }

    pub fn len(&self) -> Result<usize, RegistryError> {
        Ok(self.read("len")?.len())
    }

    pub fn is_empty(&self) -> Result<bool, RegistryError> {
        Ok(self.read("is_empty")?.is_empty())
    }

    #[cfg(feature = "emitter")]
    pub fn on<F>(&self, event_type: &str, listener: F) -> Result<(), RegistryError>
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.write("on")?.on(event_type, listener);
        Ok(())
    }
}
