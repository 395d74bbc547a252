//! Cardnova - selection, filtering and comparison of card offers
//!
//! This library lets a frontend browse a catalog of credit and debit card
//! products, narrow it down with search and attribute filters, pick a bounded
//! set of cards, and compare them side by side with best-value annotations.
//!
//! # Modules
//!
//! - `catalog`: card records and loading from JSON or TOML
//! - `filters`: filter configuration and the filter engine
//! - `ranking`: lowest price, highest rating and best offer derivations
//! - `selection`: the capacity-bounded selection store
//! - `comparison`: the comparison session and table model
//! - `browse`: `BrowseSession`, the facade frontends drive
//!
//! # Examples
//!
//! ```
//! use cardnova::browse::BrowseSession;
//! use cardnova::catalog::Catalog;
//!
//! let catalog = Catalog::sample().unwrap();
//! let mut session = BrowseSession::new(&catalog);
//!
//! session.select_toggle("1").unwrap();
//! session.select_toggle("2").unwrap();
//! session.start_comparison().unwrap();
//!
//! let items = session.comparison_items().unwrap();
//! let annotations = session.ranking_annotations(&items);
//! assert!(annotations.lowest_price_index.is_some());
//! ```

use thiserror::Error;

pub mod browse;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod comparison;
pub mod config;
pub mod filters;
pub mod output;
pub mod ranking;
pub mod selection;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum CardnovaError {
    /// Catalog loading or validation error
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    /// Selection was rejected
    #[error("{0}")]
    Selection(#[from] selection::SelectionError),
    /// Comparison could not be started or queried
    #[error("{0}")]
    Comparison(#[from] comparison::ComparisonError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_error_message_passes_through() {
        let err: CardnovaError = selection::SelectionError::LimitExceeded { max: 4 }.into();
        assert_eq!(
            err.to_string(),
            "Maximum cards selected. You can compare up to 4 cards at once."
        );
    }

    #[test]
    fn test_wrapped_errors_are_prefixed() {
        let err: CardnovaError = catalog::CatalogError::DuplicateId("3".into()).into();
        assert!(err.to_string().starts_with("Catalog error: "));

        let err = CardnovaError::InvalidInput("bad".into());
        assert_eq!(err.to_string(), "Invalid input: bad");
    }
}
