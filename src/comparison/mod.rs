//! Comparison session management
//!
//! The comparison session is a small state machine gating the comparison view.
//! It holds no card data of its own: comparison items are materialized from the
//! selection and the catalog on every query, so they can never go stale.
//!
//! # States
//!
//! ```text
//! Idle ──start() with ≥2 selected──→ Active
//!   ↑                                   │
//!   ├──────────── close() ──────────────┤
//!   └── remove_from_session() leaving ≤2 ┘
//! ```
//!
//! Removing a card from an active comparison closes it as soon as two or fewer
//! cards remain. Closing never clears the selection.

pub mod error;
pub mod table;

pub use error::ComparisonError;
pub use table::ComparisonTable;

use crate::catalog::CardRecord;
use crate::selection::{self, MIN_COMPARISON_ITEMS, SelectionChanged, SelectionStore};

/// Comparison result type
pub type Result<T> = std::result::Result<T, ComparisonError>;

/// Selection size at or below which removing a card ends the comparison
pub const AUTO_CLOSE_THRESHOLD: usize = 2;

/// Current comparison state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Browsing the catalog
    #[default]
    Idle,
    /// Comparison view is open
    Active,
}

/// State machine for entering and leaving comparison mode
#[derive(Debug, Clone, Default)]
pub struct ComparisonSession {
    state: SessionState,
}

impl ComparisonSession {
    /// Create an idle session
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the comparison view is open
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    /// Open the comparison view
    ///
    /// # Errors
    ///
    /// Returns `ComparisonError::InsufficientSelection` if fewer than two cards
    /// are selected; the session stays as it was.
    pub fn start(&mut self, selection: &SelectionStore<'_>) -> Result<()> {
        let selected = selection.len();
        if selected < MIN_COMPARISON_ITEMS {
            tracing::debug!(selected, "comparison refused, not enough cards");
            return Err(ComparisonError::InsufficientSelection {
                selected,
                required: MIN_COMPARISON_ITEMS,
            });
        }

        self.state = SessionState::Active;
        tracing::info!(cards = selected, "comparison started");
        Ok(())
    }

    /// Selected cards in selection order
    ///
    /// Ids missing from the catalog are skipped.
    ///
    /// # Errors
    ///
    /// Returns `ComparisonError::NotActive` when the session is idle.
    pub fn items<'c>(&self, selection: &SelectionStore<'c>) -> Result<Vec<&'c CardRecord>> {
        if !self.is_active() {
            return Err(ComparisonError::NotActive);
        }

        let catalog = selection.catalog();
        Ok(selection.ids().iter().filter_map(|id| catalog.get(id)).collect())
    }

    /// Comparison table for the current items
    ///
    /// # Errors
    ///
    /// Returns `ComparisonError::NotActive` when the session is idle.
    pub fn table<'c>(&self, selection: &SelectionStore<'c>) -> Result<ComparisonTable<'c>> {
        let items = self.items(selection)?;
        Ok(ComparisonTable::build(&items))
    }

    /// Deselect a card, closing the comparison if two or fewer cards remain
    ///
    /// Returns true if this call closed the comparison.
    pub fn remove_from_session(&mut self, selection: &mut SelectionStore<'_>, id: &str) -> bool {
        selection.remove(id);
        self.close_if_too_few(selection)
    }

    /// Toggle a card; a deselection follows the same auto-close rule as
    /// `remove_from_session`
    ///
    /// # Errors
    ///
    /// - `SelectionError::UnknownId` if the id is not in the catalog
    /// - `SelectionError::LimitExceeded` if the id is absent and the selection is full
    pub fn toggle_in_session(
        &mut self,
        selection: &mut SelectionStore<'_>,
        id: &str,
    ) -> selection::Result<SelectionChanged> {
        let changed = selection.toggle(id)?;
        if matches!(changed, SelectionChanged::Removed { .. }) {
            self.close_if_too_few(selection);
        }
        Ok(changed)
    }

    fn close_if_too_few(&mut self, selection: &SelectionStore<'_>) -> bool {
        if self.is_active() && selection.len() <= AUTO_CLOSE_THRESHOLD {
            self.state = SessionState::Idle;
            tracing::info!(remaining = selection.len(), "comparison closed after removal");
            return true;
        }

        false
    }

    /// Close the comparison view, keeping the selection
    pub fn close(&mut self) {
        if self.is_active() {
            tracing::info!("comparison closed");
        }
        self.state = SessionState::Idle;
    }
}
