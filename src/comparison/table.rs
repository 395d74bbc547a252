//! Side-by-side comparison table
//!
//! Builds the row model of the comparison view from the comparison items. Columns
//! follow item order; rows are:
//!
//! - price, with the cheapest cell flagged
//! - rating, with a star count and the best-rated cell flagged
//! - one row per distinct feature, in first-seen order
//! - one row per distinct offer, in first-seen order
//! - one row per distinct product with a product offer
//!
//! Rendering is left to the caller (see `output::comparison_table`).

use crate::catalog::{CardRecord, ProductOffer};
use crate::ranking::{self, RankingAnnotations};

/// Number of stars in a full rating
pub const MAX_STARS: u8 = 5;

/// Price row: raw price strings plus the cheapest column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRow<'a> {
    pub cells: Vec<&'a str>,
    pub best: Option<usize>,
}

/// One rating cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingCell {
    pub rating: f64,
    /// Filled stars out of `MAX_STARS`
    pub stars: u8,
}

/// Rating row: ratings plus the best-rated column
#[derive(Debug, Clone, PartialEq)]
pub struct RatingRow {
    pub cells: Vec<RatingCell>,
    pub best: Option<usize>,
}

/// A feature or offer row: which cards have it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceRow {
    pub label: String,
    pub present: Vec<bool>,
}

/// A card's offer for one product
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCell<'a> {
    pub offer: &'a ProductOffer,
    /// This is the card's highest-cashback product offer
    pub best: bool,
}

/// A product row: each card's offer for the product, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow<'a> {
    pub product: String,
    pub cells: Vec<Option<ProductCell<'a>>>,
}

/// Complete comparison table model
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable<'a> {
    /// Column headers (card titles)
    pub headers: Vec<&'a str>,
    pub price: PriceRow<'a>,
    pub rating: RatingRow,
    pub features: Vec<PresenceRow>,
    pub offers: Vec<PresenceRow>,
    pub products: Vec<ProductRow<'a>>,
}

impl<'a> ComparisonTable<'a> {
    /// Build the table for `items`, in item order
    #[must_use]
    pub fn build(items: &[&'a CardRecord]) -> Self {
        let annotations = RankingAnnotations::compute(items);

        let features = ranking::union_preserving_first_seen(items.iter().map(|c| &c.features))
            .into_iter()
            .map(|label| presence_row(items, label, |card| &card.features))
            .collect();

        let offers = ranking::union_preserving_first_seen(items.iter().map(|c| &c.offers))
            .into_iter()
            .map(|label| presence_row(items, label, |card| &card.offers))
            .collect();

        let product_names: Vec<Vec<String>> = items
            .iter()
            .map(|card| card.product_offers.iter().map(|o| o.product.clone()).collect())
            .collect();

        let products = ranking::union_preserving_first_seen(&product_names)
            .into_iter()
            .map(|product| product_row(items, &annotations, product))
            .collect();

        Self {
            headers: items.iter().map(|card| card.title.as_str()).collect(),
            price: PriceRow {
                cells: items.iter().map(|card| card.price.as_str()).collect(),
                best: annotations.lowest_price_index,
            },
            rating: RatingRow {
                cells: items
                    .iter()
                    .map(|card| RatingCell {
                        rating: card.rating,
                        stars: star_count(card.rating),
                    })
                    .collect(),
                best: annotations.highest_rating_index,
            },
            features,
            offers,
            products,
        }
    }

    /// Number of card columns
    #[must_use]
    pub fn columns(&self) -> usize {
        self.headers.len()
    }
}

fn presence_row(
    items: &[&CardRecord],
    label: String,
    values: impl Fn(&CardRecord) -> &Vec<String>,
) -> PresenceRow {
    let present = items.iter().map(|&card| values(card).contains(&label)).collect();
    PresenceRow { label, present }
}

fn product_row<'a>(
    items: &[&'a CardRecord],
    annotations: &RankingAnnotations<'a>,
    product: String,
) -> ProductRow<'a> {
    let cells = items
        .iter()
        .zip(&annotations.best_product_offer_by_item)
        .map(|(&card, best)| {
            card.product_offers
                .iter()
                .find(|offer| offer.product == product)
                .map(|offer| ProductCell {
                    offer,
                    best: best.is_some_and(|b| std::ptr::eq(b, offer)),
                })
        })
        .collect();

    ProductRow { product, cells }
}

/// Rounded rating, clamped to the star scale
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn star_count(rating: f64) -> u8 {
    rating.round().clamp(0.0, f64::from(MAX_STARS)) as u8
}
