//! Ranking annotations for a card sequence
//!
//! Bundles every best-of derivation for one sequence so a frontend can mark the
//! cheapest card, the best-rated card and each card's best offers in one pass.

use super::{best_offer, best_product_offer, highest_rating_index, lowest_price_index};
use crate::catalog::{CardRecord, ProductOffer};

/// Best-value markers for an ordered sequence of cards
///
/// The per-item vectors line up with the input sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingAnnotations<'a> {
    /// Index of the cheapest card
    pub lowest_price_index: Option<usize>,

    /// Index of the best-rated card
    pub highest_rating_index: Option<usize>,

    /// First-listed offer of each card
    pub best_offer_by_item: Vec<Option<&'a str>>,

    /// Highest-cashback product offer of each card
    pub best_product_offer_by_item: Vec<Option<&'a ProductOffer>>,
}

impl<'a> RankingAnnotations<'a> {
    /// Compute all annotations for `items`
    #[must_use]
    pub fn compute(items: &[&'a CardRecord]) -> Self {
        Self {
            lowest_price_index: lowest_price_index(items),
            highest_rating_index: highest_rating_index(items),
            best_offer_by_item: items.iter().map(|&item| best_offer(item)).collect(),
            best_product_offer_by_item: items.iter().map(|&item| best_product_offer(item)).collect(),
        }
    }

    /// Whether the card at `index` is the cheapest
    #[must_use]
    pub fn is_lowest_price(&self, index: usize) -> bool {
        self.lowest_price_index == Some(index)
    }

    /// Whether the card at `index` is the best-rated
    #[must_use]
    pub fn is_highest_rating(&self, index: usize) -> bool {
        self.highest_rating_index == Some(index)
    }
}
