//! Registry behaviour switches.
//!
//! The defaults are strict: ids stay unique on `add`, and `update` refuses
//! both unknown ids and renames onto another pet's name.
//! [`RegistryConfig::permissive`] turns all three checks off.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// `update` with an id that is not in the registry fails with `NotFound`.
    pub reject_unknown_update: bool,
    /// `update` refuses a name held by a different record.
    pub unique_names_on_update: bool,
    /// `add` refuses a candidate whose id is already present.
    pub reject_duplicate_ids: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            reject_unknown_update: true,
            unique_names_on_update: true,
            reject_duplicate_ids: true,
        }
    }
}

impl RegistryConfig {
    /// Only the name check on `add` is kept; `update` always reports success.
    pub fn permissive() -> Self {
        RegistryConfig {
            reject_unknown_update: false,
            unique_names_on_update: false,
            reject_duplicate_ids: false,
        }
    }

    /// Missing keys fall back to the strict defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
