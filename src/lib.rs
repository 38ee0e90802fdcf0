//! In-memory pet registry.
//!
//! [`PetRegistry`] owns the records, [`PetStore`] shares one registry
//! between consumers, and [`PetForm`] drives it the way an add/edit screen
//! would.

pub mod catalog;
mod config;
mod error;
pub mod form;
mod pet;
pub mod registry;

pub use catalog::{Catalog, PetCategory};
pub use config::RegistryConfig;
pub use error::{CatalogError, ConfigError, RegistryError};
pub use form::{FieldErrors, FormMode, PetForm, SubmitOutcome};
pub use pet::{PetId, PetRecord};
pub use registry::{OperationResult, PetRegistry, PetRepository, PetStore, RegistryEvent};
