//! Error types for the wardrobe core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of items an outfit must hold before it can be committed.
pub const MIN_OUTFIT_ITEMS: usize = 2;

/// A shared error type for the wardrobe crates.
///
/// Generation and assembly failures are separate variants: the
/// caller shows "need at least 2 items" for the former and "select at least
/// 2 items" for the latter.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WardrobeError {
    /// Manual assembly attempted with too few occupied slots.
    #[error("Select at least 2 items to create an outfit ({selected} selected)")]
    InsufficientItems { selected: usize },

    /// The catalog cannot produce an outfit.
    #[error("Need at least 2 items in the wardrobe to generate an outfit ({available} available)")]
    GenerationImpossible { available: usize },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Key-value storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl WardrobeError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an InsufficientItems error
    ///
    /// # Arguments
    ///
    /// * `selected` - Number of occupied assembly slots
    pub fn insufficient_items(selected: usize) -> Self {
        Self::InsufficientItems { selected }
    }

    /// Creates a GenerationImpossible error
    ///
    /// # Arguments
    ///
    /// * `available` - Number of items in the catalog
    pub fn generation_impossible(available: usize) -> Self {
        Self::GenerationImpossible { available }
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

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// True for failures the user can fix by adding or selecting more items.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::InsufficientItems { .. } | Self::GenerationImpossible { .. }
        )
    }

    /// Checks if this is a GenerationImpossible error
    pub fn is_generation_impossible(&self) -> bool {
        matches!(self, Self::GenerationImpossible { .. })
    }

    /// Checks if this is an InsufficientItems error
    pub fn is_insufficient_items(&self) -> bool {
        matches!(self, Self::InsufficientItems { .. })
    }

    /// Checks if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for WardrobeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for WardrobeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for WardrobeError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for WardrobeError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, WardrobeError>`.
pub type Result<T> = std::result::Result<T, WardrobeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_facing_messages_are_distinct() {
        let generation = WardrobeError::generation_impossible(1);
        let assembly = WardrobeError::insufficient_items(1);

        assert!(generation.is_user_facing());
        assert!(assembly.is_user_facing());
        assert_ne!(generation, assembly);
        assert!(generation.to_string().starts_with("Need at least 2 items"));
        assert!(assembly.to_string().starts_with("Select at least 2 items"));
    }

    #[test]
    fn test_json_error_conversion() {
        let err = serde_json::from_str::<Vec<i64>>("not json").unwrap_err();
        let converted: WardrobeError = err.into();
        assert!(converted.is_serialization());
        assert!(!converted.is_user_facing());
    }
}
