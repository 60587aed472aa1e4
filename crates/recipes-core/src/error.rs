//! Error types for the recipe catalog.

use thiserror::Error;

/// A shared error type for the whole catalog.
///
/// Every layer reports failures through this enum. Persistence failures are
/// absorbed by the persistence adapter and only show up in logs; validation
/// failures are surfaced to the user as dismissible notices.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecipeError {
    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Storage backend error (key-value store)
    #[error("Storage error: {0}")]
    Storage(String),

    /// A value does not fit into the storage quota
    #[error("Storage quota exceeded for '{key}': {size} bytes (limit {limit})")]
    QuotaExceeded {
        key: String,
        size: usize,
        limit: usize,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", "TOML", "RFC3339"
        message: String,
    },

    /// User input rejected before any state was touched
    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RecipeError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Validation error for the given form field
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Check if this error comes from the storage layer (I/O, backend or quota).
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::Io { .. } | Self::Storage(_) | Self::QuotaExceeded { .. }
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for RecipeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for RecipeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for RecipeError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<chrono::ParseError> for RecipeError {
    fn from(err: chrono::ParseError) -> Self {
        Self::Serialization {
            format: "RFC3339".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, RecipeError>`.
pub type Result<T> = std::result::Result<T, RecipeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_field() {
        let err = RecipeError::validation("title", "is required");
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Invalid title: is required");
    }

    #[test]
    fn test_storage_predicate() {
        let quota = RecipeError::QuotaExceeded {
            key: "culinary_recipes".to_string(),
            size: 10,
            limit: 5,
        };
        assert!(quota.is_storage());
        assert!(RecipeError::io("disk gone").is_storage());
        assert!(!RecipeError::not_found("recipe", "1").is_storage());
    }

    #[test]
    fn test_not_found_names_entity() {
        let err = RecipeError::not_found("recipe", "1709296200000");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Entity not found: recipe '1709296200000'");
    }

    #[test]
    fn test_json_error_converts_to_serialization() {
        let err: RecipeError = serde_json::from_str::<Vec<u32>>("not json")
            .unwrap_err()
            .into();
        assert!(err.is_serialization());
    }
}
