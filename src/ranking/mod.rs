//! Best-of rankings over card sequences
//!
//! Pure, stateless derivations used to annotate both the catalog listing and the
//! comparison table. Every function takes an ordered sequence and never reorders
//! it; returned indices refer to positions in that sequence.
//!
//! # Tie-breaking
//!
//! All "best of" selections resolve ties to the first occurrence (lowest index,
//! or first in list order). Unparseable prices and cashback rates count as `0.0`,
//! so rankings always complete.
//!
//! The functions accept anything that borrows as a `CardRecord`, so they work on
//! `&[CardRecord]` (a catalog slice) and `&[&CardRecord]` (a filtered view or
//! comparison items) alike.

mod annotations;
mod parse;

pub use annotations::RankingAnnotations;
pub use parse::parse_amount;

use crate::catalog::{CardRecord, ProductOffer};
use std::borrow::Borrow;
use std::collections::HashSet;

/// Index of the first item holding the best key
///
/// `better(candidate, current)` must return true only when `candidate` is
/// strictly better, which keeps the earliest index on ties.
fn first_best_index<C, F>(items: &[C], key: F, better: fn(f64, f64) -> bool) -> Option<usize>
where
    C: Borrow<CardRecord>,
    F: Fn(&CardRecord) -> f64,
{
    let mut best: Option<(usize, f64)> = None;

    for (index, item) in items.iter().enumerate() {
        let value = key(item.borrow());
        match best {
            Some((_, current)) if !better(value, current) => {}
            _ => best = Some((index, value)),
        }
    }

    best.map(|(index, _)| index)
}

/// Index of the cheapest item, by numeric price
///
/// Ties resolve to the lowest index. Returns `None` for an empty input.
#[must_use]
pub fn lowest_price_index<C: Borrow<CardRecord>>(items: &[C]) -> Option<usize> {
    first_best_index(items, CardRecord::numeric_price, |a, b| a < b)
}

/// Index of the highest-rated item
///
/// Ties resolve to the lowest index. Returns `None` for an empty input.
#[must_use]
pub fn highest_rating_index<C: Borrow<CardRecord>>(items: &[C]) -> Option<usize> {
    first_best_index(items, |card| card.rating, |a, b| a > b)
}

/// The best free-text offer of a card, which is simply the first one listed
#[must_use]
pub fn best_offer(item: &CardRecord) -> Option<&str> {
    item.offers.first().map(String::as_str)
}

/// The product offer with the highest cashback percentage
///
/// Malformed or missing percentages count as `0.0`; ties resolve to the first
/// offer in list order.
#[must_use]
pub fn best_product_offer(item: &CardRecord) -> Option<&ProductOffer> {
    let mut best: Option<(&ProductOffer, f64)> = None;

    for offer in &item.product_offers {
        let cashback = offer.cashback_percent();
        match best {
            Some((_, current)) if cashback <= current => {}
            _ => best = Some((offer, cashback)),
        }
    }

    best.map(|(offer, _)| offer)
}

/// Merge string sequences, keeping each distinct string once in first-seen order
///
/// Used for the comparison table rows: features and offers of several cards,
/// concatenated in card order and deduplicated.
#[must_use]
pub fn union_preserving_first_seen<'a, I, S>(sequences: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a S>,
    S: AsRef<[String]> + ?Sized + 'a,
{
    let mut seen: HashSet<&str> = HashSet::new();
    let mut union = Vec::new();

    for sequence in sequences {
        for value in sequence.as_ref() {
            if seen.insert(value.as_str()) {
                union.push(value.clone());
            }
        }
    }

    union
}
