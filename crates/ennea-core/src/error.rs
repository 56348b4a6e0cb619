//! Error types for ennea-core.

use thiserror::Error;

use crate::types::{Center, TypeNumber};

/// Top-level error type for ennea-core.
///
/// Only structurally invalid input raises an error. Absence of curated data
/// is an expected, routine outcome and is always signalled with `Option`,
/// never through this enum.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A tritype was composed from a type that does not belong to the center
    /// implied by its position.
    #[error("Invalid tritype composition: type {type_number} is not a {position} type")]
    InvalidTritypeComposition {
        position: Center,
        type_number: TypeNumber,
    },

    /// A tritype code string did not parse as three type digits.
    #[error("Malformed tritype code: {input:?} (expected exactly three digits 1-9)")]
    MalformedTritypeCode { input: String },

    /// An instinct stack string did not split into two distinct known codes.
    #[error("Malformed instinct stack: {input:?} (expected \"dominant/secondary\" with two distinct codes)")]
    MalformedInstinctStack { input: String },

    /// A numeric value outside the closed {1..9} set.
    #[error("Invalid type number: {0} (must be 1-9)")]
    InvalidTypeNumber(u8),

    /// Catalog document failed to load or validate.
    #[error("Catalog error: {0}")]
    CatalogError(String),

    /// Configuration failed to load or validate.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::CatalogError(format!("invalid catalog document: {}", err))
    }
}

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::ConfigError(err.to_string())
    }
}

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_composition() {
        let err = CoreError::InvalidTritypeComposition {
            position: Center::Head,
            type_number: TypeNumber::Two,
        };
        let msg = err.to_string();
        assert!(msg.contains("head"));
        assert!(msg.contains('2'));
    }

    #[test]
    fn test_error_display_stack() {
        let err = CoreError::MalformedInstinctStack {
            input: "sp-so".to_string(),
        };
        assert!(err.to_string().contains("sp-so"));
    }

    #[test]
    fn test_error_display_type_number() {
        let err = CoreError::InvalidTypeNumber(12);
        assert!(err.to_string().contains("12"));
    }
}
