//! Error types for loading catalog and configuration data.
//!
//! Gameplay itself never fails: missing catalog entries and bad colors degrade
//! to safe defaults. Only parsing external JSON can return an error.

use std::fmt;

/// Failure to build a [`Catalog`](crate::catalog::Catalog).
#[derive(Debug)]
pub enum CatalogError {
    /// The JSON document could not be parsed.
    Parse(serde_json::Error),
    /// The discovery sequence is empty, so the game could never progress.
    EmptySequence,
    /// Two star definitions share the same id.
    DuplicateStar {
        id: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(e) => write!(f, "catalog JSON is invalid: {}", e),
            CatalogError::EmptySequence => write!(f, "catalog discovery sequence is empty"),
            CatalogError::DuplicateStar { id } => {
                write!(f, "catalog defines star '{}' more than once", id)
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e)
    }
}

/// Failure to load a [`GameConfig`](crate::api::config::GameConfig).
#[derive(Debug)]
pub enum ConfigError {
    /// The JSON document could not be parsed.
    Parse(serde_json::Error),
    /// A field holds a value outside its usable range.
    InvalidValue {
        field: &'static str,
        value: f32,
        expected: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "config JSON is invalid: {}", e),
            ConfigError::InvalidValue { field, value, expected } => write!(
                f,
                "config field '{}' = {} is out of range (expected {})",
                field, value, expected
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
