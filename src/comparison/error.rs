//! Comparison-specific error types

use thiserror::Error;

/// Errors returned by the comparison session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComparisonError {
    /// Too few cards are selected to start a comparison
    #[error("Select at least {required} cards. You need to select at least {required} cards to compare ({selected} selected).")]
    InsufficientSelection { selected: usize, required: usize },

    /// Comparison data was requested while no comparison is running
    #[error("No comparison is active")]
    NotActive,
}
