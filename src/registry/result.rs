use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Outcome of a mutating registry call, shaped `{success, message?}`.
///
/// Callers are expected to inspect `success`; a refused operation never
/// panics and never mutates the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[must_use]
pub struct OperationResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl OperationResult {
    pub fn ok() -> Self {
        OperationResult {
            success: true,
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        OperationResult {
            success: false,
            message: Some(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}

impl From<Result<(), RegistryError>> for OperationResult {
    fn from(result: Result<(), RegistryError>) -> Self {
        match result {
            Ok(()) => OperationResult::ok(),
            Err(err) => OperationResult::from(err),
        }
    }
}

impl From<RegistryError> for OperationResult {
    fn from(err: RegistryError) -> Self {
        OperationResult::failure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_serializes_without_message() {
        let json = serde_json::to_string(&OperationResult::ok()).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }

    #[test]
    fn failure_carries_message() {
        let result = OperationResult::from(RegistryError::DuplicateName { name: "rex".into() });
        assert!(!result.is_success());
        assert_eq!(result.message.as_deref(), Some("Pet names must be unique"));

        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"success":false,"message":"Pet names must be unique"}"#);
    }
}
