//! Catalog filtering module
//!
//! This module narrows the catalog down to what the user asked to see. A filter is
//! a single `FilterConfig` value combining a free-text search, card type toggles
//! and an "offers only" switch; `apply()` evaluates it against a catalog.
//!
//! # Features
//!
//! - **Dual-mode search**: card scope (title, features, products) or product scope
//! - **Type toggles**: show credit cards, debit cards, both or neither
//! - **Offers only**: hide cards without any offer
//! - **Order preserving**: results are always a subsequence of the catalog
//!
//! Filtering never touches the selection; a selected card stays selected even
//! when the current filter hides it.
//!
//! # Examples
//!
//! ```
//! use cardnova::catalog::Catalog;
//! use cardnova::filters::{self, FilterConfig, SearchScope};
//!
//! let catalog = Catalog::sample().unwrap();
//! let config = FilterConfig::builder()
//!     .search_term("iPhone")
//!     .search_scope(SearchScope::Product)
//!     .build();
//!
//! for card in filters::apply(&catalog, &config) {
//!     println!("{} - {}", card.id, card.title);
//! }
//! ```

pub mod engine;
pub mod types;

pub use engine::{CardFilterExt, apply, matches};
pub use types::{CardTypeFilter, FilterConfig, FilterConfigBuilder, SearchScope};
