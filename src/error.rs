use crate::pet::PetId;

/// Reasons a registry operation is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Pet names must be unique")]
    DuplicateName { name: String },

    #[error("Pet ids must be unique")]
    DuplicateId { id: PetId },

    #[error("No pet with id {id}")]
    NotFound { id: PetId },

    #[error("registry lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

/// Errors raised while loading a species catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("invalid catalog json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("species {0} is listed more than once")]
    DuplicateSpecies(String),

    #[error("species name must not be empty")]
    EmptySpecies,
}

/// Errors raised while loading registry configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid registry config json: {0}")]
    Json(#[from] serde_json::Error),
}
