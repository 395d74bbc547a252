//! Bounded card selection
//!
//! `SelectionStore` owns the ordered set of card ids picked for comparison. It
//! guarantees three things for its whole lifetime:
//!
//! - **Capacity**: never more than `capacity` ids (default 4)
//! - **Uniqueness**: an id appears at most once
//! - **Validity**: every id exists in the catalog
//!
//! Insertion order is preserved; it drives the column order of the comparison
//! table. Rejected mutations return an error and leave the set unchanged.
//!
//! # Examples
//!
//! ```
//! use cardnova::catalog::Catalog;
//! use cardnova::selection::{SelectionChanged, SelectionStore};
//!
//! let catalog = Catalog::sample().unwrap();
//! let mut selection = SelectionStore::new(&catalog);
//!
//! assert!(matches!(selection.toggle("1"), Ok(SelectionChanged::Added { first: true, .. })));
//! assert!(matches!(selection.toggle("1"), Ok(SelectionChanged::Removed { .. })));
//! assert!(selection.is_empty());
//! ```

pub mod error;

pub use error::SelectionError;

use crate::catalog::Catalog;

/// Selection result type
pub type Result<T> = std::result::Result<T, SelectionError>;

/// Default number of cards that can be compared at once
pub const DEFAULT_MAX_COMPARISON_ITEMS: usize = 4;

/// Minimum number of selected cards for a comparison
pub const MIN_COMPARISON_ITEMS: usize = 2;

/// Outcome of a successful selection mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChanged {
    /// The id was appended
    Added {
        id: String,
        /// Position in the selection (0-based)
        position: usize,
        /// This was the first card selected
        first: bool,
    },

    /// The id was removed
    Removed { id: String },

    /// Nothing changed (e.g. adding an id that is already selected)
    Unchanged,
}

/// Snapshot of the selection for a comparison bar ("2/4 selected")
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionStatus {
    /// Number of selected cards
    pub selected: usize,
    /// Maximum number of selectable cards
    pub capacity: usize,
    /// Whether enough cards are selected to start a comparison
    pub can_compare: bool,
}

/// Capacity-bounded, duplicate-free, insertion-ordered set of card ids
#[derive(Debug, Clone)]
pub struct SelectionStore<'a> {
    catalog: &'a Catalog,
    ids: Vec<String>,
    capacity: usize,
}

impl<'a> SelectionStore<'a> {
    /// Create an empty selection with the default capacity
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self::with_capacity(catalog, DEFAULT_MAX_COMPARISON_ITEMS)
    }

    /// Create an empty selection holding at most `capacity` ids
    #[must_use]
    pub const fn with_capacity(catalog: &'a Catalog, capacity: usize) -> Self {
        Self {
            catalog,
            ids: Vec::new(),
            capacity,
        }
    }

    /// Select the id if absent, deselect it if present
    ///
    /// # Errors
    ///
    /// - `SelectionError::UnknownId` if the id is not in the catalog
    /// - `SelectionError::LimitExceeded` if the id is absent and the selection is full
    pub fn toggle(&mut self, id: &str) -> Result<SelectionChanged> {
        if self.contains(id) {
            self.remove(id);
            return Ok(SelectionChanged::Removed { id: id.to_string() });
        }

        self.add(id)
    }

    /// Append the id unless it is already selected
    ///
    /// # Errors
    ///
    /// - `SelectionError::UnknownId` if the id is not in the catalog
    /// - `SelectionError::LimitExceeded` if the selection is full
    pub fn add(&mut self, id: &str) -> Result<SelectionChanged> {
        if self.contains(id) {
            return Ok(SelectionChanged::Unchanged);
        }

        if !self.catalog.contains(id) {
            tracing::warn!(id, "rejected selection of unknown card");
            return Err(SelectionError::UnknownId(id.to_string()));
        }

        if self.is_full() {
            tracing::debug!(id, max = self.capacity, "selection limit reached");
            return Err(SelectionError::LimitExceeded { max: self.capacity });
        }

        self.ids.push(id.to_string());
        let position = self.ids.len() - 1;
        tracing::debug!(id, position, "card selected");

        Ok(SelectionChanged::Added {
            id: id.to_string(),
            position,
            first: position == 0,
        })
    }

    /// Deselect the id; returns whether it was selected
    ///
    /// Removing an id that is not selected is a no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|selected| selected != id);

        let removed = self.ids.len() != before;
        if removed {
            tracing::debug!(id, remaining = self.ids.len(), "card deselected");
        }
        removed
    }

    /// Deselect everything
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Copy of the selected ids in selection order
    #[must_use]
    pub fn current(&self) -> Vec<String> {
        self.ids.clone()
    }

    /// Borrow the selected ids in selection order
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Whether the id is selected
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
    }

    /// Number of selected ids
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Maximum number of selectable ids
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the selection is at capacity
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.ids.len() >= self.capacity
    }

    /// How many more ids can be selected
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.ids.len())
    }

    /// Counts for a comparison bar
    #[must_use]
    pub fn status(&self) -> SelectionStatus {
        SelectionStatus {
            selected: self.ids.len(),
            capacity: self.capacity,
            can_compare: self.ids.len() >= MIN_COMPARISON_ITEMS,
        }
    }

    /// The catalog ids are validated against
    #[must_use]
    pub const fn catalog(&self) -> &'a Catalog {
        self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::numbered_catalog;
    use proptest::prelude::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let catalog = numbered_catalog(5);
        let mut selection = SelectionStore::new(&catalog);

        let added = selection.toggle("2").unwrap();
        assert_eq!(
            added,
            SelectionChanged::Added {
                id: "2".to_string(),
                position: 0,
                first: true,
            }
        );
        assert_eq!(selection.current(), vec!["2"]);

        let removed = selection.toggle("2").unwrap();
        assert_eq!(removed, SelectionChanged::Removed { id: "2".to_string() });
        assert!(selection.is_empty());
    }

    #[test]
    fn test_preserves_insertion_order() {
        let catalog = numbered_catalog(5);
        let mut selection = SelectionStore::new(&catalog);

        selection.toggle("3").unwrap();
        selection.toggle("1").unwrap();
        selection.toggle("4").unwrap();

        assert_eq!(selection.current(), vec!["3", "1", "4"]);
    }

    #[test]
    fn test_limit_exceeded_leaves_selection_unchanged() {
        let catalog = numbered_catalog(5);
        let mut selection = SelectionStore::new(&catalog);

        for id in ["1", "2", "3", "4"] {
            selection.toggle(id).unwrap();
        }

        let result = selection.toggle("5");
        assert_eq!(result, Err(SelectionError::LimitExceeded { max: 4 }));
        assert_eq!(selection.current(), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_toggle_off_when_full_still_works() {
        let catalog = numbered_catalog(5);
        let mut selection = SelectionStore::with_capacity(&catalog, 2);

        selection.toggle("1").unwrap();
        selection.toggle("2").unwrap();
        assert!(selection.is_full());

        assert!(selection.toggle("1").is_ok());
        assert_eq!(selection.current(), vec!["2"]);
    }

    #[test]
    fn test_unknown_id_rejected() {
        let catalog = numbered_catalog(3);
        let mut selection = SelectionStore::new(&catalog);
        selection.toggle("1").unwrap();

        let result = selection.toggle("99");
        assert_eq!(result, Err(SelectionError::UnknownId("99".to_string())));
        assert_eq!(selection.current(), vec!["1"]);
    }

    #[test]
    fn test_add_is_not_a_toggle() {
        let catalog = numbered_catalog(3);
        let mut selection = SelectionStore::new(&catalog);

        selection.add("1").unwrap();
        assert_eq!(selection.add("1").unwrap(), SelectionChanged::Unchanged);
        assert_eq!(selection.current(), vec!["1"]);
    }

    #[test]
    fn test_first_flag_only_on_first_card() {
        let catalog = numbered_catalog(3);
        let mut selection = SelectionStore::new(&catalog);

        assert!(matches!(selection.add("1"), Ok(SelectionChanged::Added { first: true, .. })));
        assert!(matches!(selection.add("2"), Ok(SelectionChanged::Added { first: false, .. })));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let catalog = numbered_catalog(3);
        let mut selection = SelectionStore::new(&catalog);
        selection.toggle("1").unwrap();

        assert!(selection.remove("1"));
        assert!(!selection.remove("1"));
        assert!(!selection.remove("not-in-catalog"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_clear() {
        let catalog = numbered_catalog(3);
        let mut selection = SelectionStore::new(&catalog);
        selection.toggle("1").unwrap();
        selection.toggle("2").unwrap();

        selection.clear();
        assert!(selection.is_empty());
        assert_eq!(selection.remaining(), 4);
    }

    #[test]
    fn test_current_is_a_copy() {
        let catalog = numbered_catalog(3);
        let mut selection = SelectionStore::new(&catalog);
        selection.toggle("1").unwrap();

        let mut snapshot = selection.current();
        snapshot.push("2".to_string());
        snapshot.clear();

        assert_eq!(selection.current(), vec!["1"]);
    }

    #[test]
    fn test_status() {
        let catalog = numbered_catalog(3);
        let mut selection = SelectionStore::new(&catalog);
        selection.toggle("1").unwrap();

        let status = selection.status();
        assert_eq!(status.selected, 1);
        assert_eq!(status.capacity, 4);
        assert!(!status.can_compare);

        selection.toggle("2").unwrap();
        assert!(selection.status().can_compare);
    }

    fn toggle_sequence() -> impl Strategy<Value = Vec<u8>> {
        prop::collection::vec(1u8..=8, 0..40)
    }

    proptest! {
        #[test]
        fn property_capacity_never_exceeded(ids in toggle_sequence(), capacity in 1usize..6) {
            let catalog = numbered_catalog(8);
            let mut selection = SelectionStore::with_capacity(&catalog, capacity);

            for id in ids {
                let _ = selection.toggle(&id.to_string());
                prop_assert!(selection.len() <= capacity);

                let distinct: std::collections::HashSet<&String> = selection.ids().iter().collect();
                prop_assert_eq!(distinct.len(), selection.len());
            }
        }

        #[test]
        fn property_double_toggle_restores_membership(prefix in toggle_sequence(), id in 1u8..=8) {
            let catalog = numbered_catalog(8);
            let mut selection = SelectionStore::new(&catalog);
            for prior in prefix {
                let _ = selection.toggle(&prior.to_string());
            }

            let before = selection.current();
            let id = id.to_string();
            let was_selected = selection.contains(&id);
            let first = selection.toggle(&id);
            let second = selection.toggle(&id);

            // When the first toggle hits the limit, both calls are rejected
            if first.is_err() {
                prop_assert!(second.is_err());
            }

            if was_selected {
                // Re-adding appends, so only membership is restored
                let mut expected = before.clone();
                expected.retain(|selected| selected != &id);
                expected.push(id.clone());
                prop_assert_eq!(selection.current(), expected);
            } else {
                prop_assert_eq!(selection.current(), before);
            }
        }
    }
}
