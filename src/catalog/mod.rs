//! Card catalog
//!
//! The catalog is the immutable, ordered collection of card records a session
//! works against. It is validated once on construction and read-only afterwards:
//! every other component borrows it.
//!
//! # Sources
//!
//! - **In memory**: `Catalog::new(records)` for records supplied by a frontend
//! - **Files**: `Catalog::from_path()` reads `.json` (an array of records) or
//!   `.toml` (a `[[cards]]` table array)
//! - **Built-in**: `Catalog::sample()` ships an eight-card demo catalog
//!
//! # Examples
//!
//! ```
//! use cardnova::catalog::Catalog;
//!
//! let catalog = Catalog::sample().unwrap();
//! assert_eq!(catalog.len(), 8);
//! assert!(catalog.contains("1"));
//! ```

pub mod error;
pub mod types;

pub use error::CatalogError;
pub use types::{CardRecord, CardType, ProductOffer};

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Catalog result type
pub type Result<T> = std::result::Result<T, CatalogError>;

const SAMPLE_CATALOG: &str = include_str!("sample.json");

/// TOML catalogs wrap the records in a `cards` table array
#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    cards: Vec<CardRecord>,
}

/// Immutable, validated, ordered sequence of card records
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<CardRecord>,
}

impl Catalog {
    /// Build a catalog from records, keeping their order
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if two records share an id, a title is blank, or a
    /// rating falls outside `0.0..=5.0`.
    pub fn new(records: Vec<CardRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());

        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
            if record.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(record.id.clone()));
            }
            if !(0.0..=5.0).contains(&record.rating) {
                return Err(CatalogError::RatingOutOfRange {
                    id: record.id.clone(),
                    rating: record.rating,
                });
            }
        }

        Ok(Self { records })
    }

    /// Parse a JSON array of records
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the JSON is malformed or the records are invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<CardRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Parse a TOML document with a `[[cards]]` table array
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the TOML is malformed or the records are invalid.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let parsed: TomlCatalog = toml::from_str(toml_str)?;
        Self::new(parsed.cards)
    }

    /// Load a catalog file, picking the parser from the file extension
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read, the extension is not
    /// `json` or `toml`, or the contents are invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let catalog = match extension.as_deref() {
            Some("json") => Self::from_json(&fs::read_to_string(path)?)?,
            Some("toml") => Self::from_toml(&fs::read_to_string(path)?)?,
            _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        };

        tracing::info!(path = %path.display(), cards = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// The built-in demo catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` only if the embedded data is corrupt.
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE_CATALOG)
    }

    /// Look up a record by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CardRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Whether a record with this id exists
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Catalog index of a record
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }

    /// All records in catalog order
    #[must_use]
    pub fn records(&self) -> &[CardRecord] {
        &self.records
    }

    /// Iterate records in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, CardRecord> {
        self.records.iter()
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog has no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CardRecord;
    type IntoIter = std::slice::Iter<'a, CardRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
