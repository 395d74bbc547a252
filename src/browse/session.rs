//! Browse session management
//!
//! `BrowseSession` is the single entry point a presentation layer talks to. It
//! borrows the catalog and owns the mutable state of one browsing session: the
//! selection, the current filter configuration and the comparison state machine.
//!
//! # Contract
//!
//! - **Commands**: `select_toggle`, `remove_selection`, `set_filter_config`,
//!   `start_comparison`, `close_comparison`, `clear_selection`
//! - **Queries**: `filtered_catalog`, `selection`, `comparison_items`,
//!   `ranking_annotations`, `comparison_table`, `selection_status`
//!
//! # Workflow
//!
//! ```text
//! Session Created (empty selection, unfiltered)
//!     ↓
//! ┌─→ set_filter_config() / select_toggle()
//! │       ↓
//! │   start_comparison() ──fewer than 2──→ InsufficientSelection
//! │       ↓
//! │   Comparison Active
//! │   ├─ remove_selection() leaving ≤2 → back to browsing
//! │   └─ close_comparison() → back to browsing, selection kept
//! └───────┘
//! ```

use crate::catalog::{CardRecord, Catalog};
use crate::comparison::{self, ComparisonSession, ComparisonTable};
use crate::config::CardnovaConfig;
use crate::filters::{self, FilterConfig};
use crate::ranking::RankingAnnotations;
use crate::selection::{self, SelectionChanged, SelectionStatus, SelectionStore};

/// Browse session - selection, filtering and comparison over one catalog
#[derive(Debug, Clone)]
pub struct BrowseSession<'a> {
    catalog: &'a Catalog,
    selection: SelectionStore<'a>,
    filter: FilterConfig,
    comparison: ComparisonSession,
}

impl<'a> BrowseSession<'a> {
    /// Create a session with the default capacity and no filters
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            selection: SelectionStore::new(catalog),
            filter: FilterConfig::default(),
            comparison: ComparisonSession::new(),
        }
    }

    /// Create a session using the configured capacity and search scope
    #[must_use]
    pub fn with_config(catalog: &'a Catalog, config: &CardnovaConfig) -> Self {
        Self {
            catalog,
            selection: SelectionStore::with_capacity(catalog, config.max_comparison_items),
            filter: FilterConfig::builder()
                .search_scope(config.search_scope)
                .build(),
            comparison: ComparisonSession::new(),
        }
    }

    /// Select or deselect a card
    ///
    /// Deselecting follows the same rule as `remove_selection`: an open
    /// comparison closes when two or fewer cards remain.
    ///
    /// # Errors
    ///
    /// - `SelectionError::UnknownId` if the id is not in the catalog
    /// - `SelectionError::LimitExceeded` if the selection is full
    pub fn select_toggle(&mut self, id: &str) -> selection::Result<SelectionChanged> {
        self.comparison.toggle_in_session(&mut self.selection, id)
    }

    /// Deselect a card; returns true if this closed the comparison
    pub fn remove_selection(&mut self, id: &str) -> bool {
        self.comparison
            .remove_from_session(&mut self.selection, id)
    }

    /// Deselect everything and close any open comparison
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.comparison.close();
    }

    /// Replace the filter configuration
    ///
    /// The selection is left alone: a selected card stays selected when the new
    /// filter hides it.
    pub fn set_filter_config(&mut self, config: FilterConfig) {
        self.filter = config;
        tracing::debug!(
            matching = self.filtered_catalog().len(),
            total = self.catalog.len(),
            "filter config replaced"
        );
    }

    /// Open the comparison view
    ///
    /// # Errors
    ///
    /// Returns `ComparisonError::InsufficientSelection` if fewer than two cards
    /// are selected.
    pub fn start_comparison(&mut self) -> comparison::Result<()> {
        self.comparison.start(&self.selection)
    }

    /// Close the comparison view, keeping the selection
    pub fn close_comparison(&mut self) {
        self.comparison.close();
    }

    /// Catalog records passing the current filter, in catalog order
    ///
    /// May be empty; there is no fallback to the unfiltered catalog.
    #[must_use]
    pub fn filtered_catalog(&self) -> Vec<&'a CardRecord> {
        filters::apply(self.catalog, &self.filter)
    }

    /// Selected ids in selection order
    #[must_use]
    pub fn selection(&self) -> Vec<String> {
        self.selection.current()
    }

    /// Selected cards in selection order
    ///
    /// # Errors
    ///
    /// Returns `ComparisonError::NotActive` when no comparison is open.
    pub fn comparison_items(&self) -> comparison::Result<Vec<&'a CardRecord>> {
        self.comparison.items(&self.selection)
    }

    /// Best-value annotations for any sequence of cards
    #[must_use]
    pub fn ranking_annotations(&self, items: &[&'a CardRecord]) -> RankingAnnotations<'a> {
        RankingAnnotations::compute(items)
    }

    /// Row model of the open comparison
    ///
    /// # Errors
    ///
    /// Returns `ComparisonError::NotActive` when no comparison is open.
    pub fn comparison_table(&self) -> comparison::Result<ComparisonTable<'a>> {
        self.comparison.table(&self.selection)
    }

    /// Selection counter (`n/max selected`) and whether a comparison can start
    #[must_use]
    pub fn selection_status(&self) -> SelectionStatus {
        self.selection.status()
    }

    #[must_use]
    pub const fn filter_config(&self) -> &FilterConfig {
        &self.filter
    }

    #[must_use]
    pub fn is_comparing(&self) -> bool {
        self.comparison.is_active()
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.contains(id)
    }

    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }
}
