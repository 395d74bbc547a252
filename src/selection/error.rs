//! Selection-specific error types
//!
//! Both errors leave the selection untouched. `LimitExceeded` is an expected,
//! user-facing condition; `UnknownId` means the caller referenced a card that is
//! not in the catalog, which is an integration bug rather than user error.

use thiserror::Error;

/// Errors returned by selection mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    /// The selection is already at capacity
    #[error("Maximum cards selected. You can compare up to {max} cards at once.")]
    LimitExceeded { max: usize },

    /// The id does not exist in the catalog
    #[error("Unknown card id: {0}")]
    UnknownId(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
