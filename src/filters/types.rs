//! Filter configuration types
//!
//! This module defines the value objects describing how the catalog is narrowed:
//! - `FilterConfig`: The complete filter (search, card type, offers)
//! - `SearchScope`: Whether the search term targets cards or products
//! - `CardTypeFilter`: Which card types are shown
//!
//! A `FilterConfig` is replaced as a whole on every change. There are no setters;
//! derive a new value with `FilterConfig::to_builder()` instead.

use crate::catalog::CardType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the search term is matched against
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    /// Title, features and product names
    #[default]
    Card,
    /// Product names only
    Product,
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Card => write!(f, "card"),
            Self::Product => write!(f, "product"),
        }
    }
}

impl FromStr for SearchScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "card" => Ok(Self::Card),
            "product" => Ok(Self::Product),
            other => Err(format!("Unknown search scope '{other}'. Use 'card' or 'product'")),
        }
    }
}

/// Card type toggles; a type is shown only when its flag is set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardTypeFilter {
    /// Show credit cards
    pub credit: bool,
    /// Show debit cards
    pub debit: bool,
}

impl CardTypeFilter {
    /// Whether cards of this type pass the filter
    #[must_use]
    pub const fn allows(self, card_type: CardType) -> bool {
        match card_type {
            CardType::Credit => self.credit,
            CardType::Debit => self.debit,
        }
    }
}

impl Default for CardTypeFilter {
    fn default() -> Self {
        Self {
            credit: true,
            debit: true,
        }
    }
}

/// Complete filter configuration
///
/// The default shows the whole catalog: empty search, card scope, both card
/// types, offers not required.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct FilterConfig {
    /// Free-text search term; empty matches everything
    #[serde(default)]
    pub search_term: String,

    /// What the search term is matched against
    #[serde(default)]
    pub search_scope: SearchScope,

    /// Which card types are shown
    #[serde(default)]
    pub card_type: CardTypeFilter,

    /// Only show cards with at least one offer
    #[serde(default)]
    pub offers_only: bool,
}

impl FilterConfig {
    /// Create a new filter config builder
    #[must_use]
    pub fn builder() -> FilterConfigBuilder {
        FilterConfigBuilder::default()
    }

    /// Start a builder from this config, for deriving the next value
    #[must_use]
    pub fn to_builder(&self) -> FilterConfigBuilder {
        FilterConfigBuilder {
            search_term: self.search_term.clone(),
            search_scope: self.search_scope,
            card_type: self.card_type,
            offers_only: self.offers_only,
        }
    }

    /// Whether this config lets every record through
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.is_empty()
            && self.card_type.credit
            && self.card_type.debit
            && !self.offers_only
    }
}

/// Builder for `FilterConfig`
#[derive(Debug, Clone, Default)]
pub struct FilterConfigBuilder {
    search_term: String,
    search_scope: SearchScope,
    card_type: CardTypeFilter,
    offers_only: bool,
}

impl FilterConfigBuilder {
    /// Set the search term
    #[must_use]
    pub fn search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Set the search scope
    #[must_use]
    pub const fn search_scope(mut self, scope: SearchScope) -> Self {
        self.search_scope = scope;
        self
    }

    /// Show or hide credit cards
    #[must_use]
    pub const fn credit(mut self, enabled: bool) -> Self {
        self.card_type.credit = enabled;
        self
    }

    /// Show or hide debit cards
    #[must_use]
    pub const fn debit(mut self, enabled: bool) -> Self {
        self.card_type.debit = enabled;
        self
    }

    /// Require at least one offer
    #[must_use]
    pub const fn offers_only(mut self, enabled: bool) -> Self {
        self.offers_only = enabled;
        self
    }

    /// Build the `FilterConfig`
    #[must_use]
    pub fn build(self) -> FilterConfig {
        FilterConfig {
            search_term: self.search_term,
            search_scope: self.search_scope,
            card_type: self.card_type,
            offers_only: self.offers_only,
        }
    }
}
