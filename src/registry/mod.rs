mod events;
mod registry;
mod result;
mod store;

pub use events::RegistryEvent;
pub use registry::PetRegistry;
pub use result::OperationResult;
pub use store::PetStore;

use crate::pet::PetRecord;

/// The contract the presentation layer drives.
///
/// Implemented by the owned [`PetRegistry`] and by the shared [`PetStore`]
/// handle, so form code can work against either.
pub trait PetRepository {
    fn add(&mut self, candidate: PetRecord) -> OperationResult;
    fn update(&mut self, candidate: PetRecord) -> OperationResult;
    fn delete(&mut self, id: &str);
    fn search(&self, query: &str) -> Vec<PetRecord>;
    fn list(&self) -> Vec<PetRecord>;
}

impl PetRepository for PetRegistry {
    fn add(&mut self, candidate: PetRecord) -> OperationResult {
        PetRegistry::add(self, candidate)
    }

    fn update(&mut self, candidate: PetRecord) -> OperationResult {
        PetRegistry::update(self, candidate)
    }

    fn delete(&mut self, id: &str) {
        PetRegistry::delete(self, id)
    }

    fn search(&self, query: &str) -> Vec<PetRecord> {
        PetRegistry::search(self, query)
    }

    fn list(&self) -> Vec<PetRecord> {
        PetRegistry::list(self)
    }
}

// A poisoned lock degrades reads to an empty view; mutations report it
// through their OperationResult.
impl PetRepository for PetStore {
    fn add(&mut self, candidate: PetRecord) -> OperationResult {
        PetStore::add(self, candidate)
    }

    fn update(&mut self, candidate: PetRecord) -> OperationResult {
        PetStore::update(self, candidate)
    }

    fn delete(&mut self, id: &str) {
        if let Err(err) = PetStore::delete(self, id) {
            tracing::error!(pet_id = id, error = %err, "delete failed");
        }
    }

    fn search(&self, query: &str) -> Vec<PetRecord> {
        PetStore::search(self, query).unwrap_or_else(|err| {
            tracing::error!(query, error = %err, "search failed");
            Vec::new()
        })
    }

    fn list(&self) -> Vec<PetRecord> {
        PetStore::list(self).unwrap_or_else(|err| {
            tracing::error!(error = %err, "list failed");
            Vec::new()
        })
    }
}
