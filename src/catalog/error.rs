//! Catalog-specific error types
//!
//! These errors come from building a catalog: either the records break one of the
//! catalog invariants (unique ids, non-empty titles, ratings within 0..=5), or the
//! catalog file cannot be read or parsed.

use std::path::PathBuf;
use thiserror::Error;

/// Catalog construction and loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two records share the same id
    #[error("Duplicate card id: {0}")]
    DuplicateId(String),

    /// A record has a blank title
    #[error("Card '{0}' has an empty title")]
    EmptyTitle(String),

    /// A rating is outside 0.0..=5.0 (or NaN)
    #[error("Card '{id}' has rating {rating}, expected a value between 0 and 5")]
    RatingOutOfRange { id: String, rating: f64 },

    /// Catalog file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON catalog could not be parsed
    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML catalog could not be parsed
    #[error("Invalid TOML catalog: {0}")]
    Toml(String),

    /// File extension is neither `.json` nor `.toml`
    #[error("Unsupported catalog format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        Self::Toml(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
