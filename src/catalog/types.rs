//! Card record data structures
//!
//! These are the records the catalog is made of:
//! - `CardRecord`: One comparable card product
//! - `CardType`: Credit or debit
//! - `ProductOffer`: A per-product cashback/installment deal attached to a card
//!
//! Optional collections default to empty at deserialization time, so the rest of
//! the crate never has to deal with a missing `offers` or `productOffers` list.

use crate::ranking::parse_amount;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of card, used by the type filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    /// Credit card
    Credit,
    /// Debit card
    Debit,
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Credit => write!(f, "credit"),
            Self::Debit => write!(f, "debit"),
        }
    }
}

/// One comparable card product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    /// Catalog-assigned identifier, unique within a catalog
    pub id: String,

    /// Display name
    pub title: String,

    /// Image URL shown by frontends
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Currency-formatted price, e.g. `"$499"`
    pub price: String,

    /// Rating between 0.0 and 5.0
    pub rating: f64,

    /// Credit or debit
    pub card_type: CardType,

    /// Feature descriptions in display order
    #[serde(default)]
    pub features: Vec<String>,

    /// Free-text offer descriptions; the first one counts as the best
    #[serde(default)]
    pub offers: Vec<String>,

    /// Per-product deals
    #[serde(default)]
    pub product_offers: Vec<ProductOffer>,
}

impl CardRecord {
    /// Create a record with the required fields and no features or offers
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        price: impl Into<String>,
        rating: f64,
        card_type: CardType,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: None,
            price: price.into(),
            rating,
            card_type,
            features: Vec::new(),
            offers: Vec::new(),
            product_offers: Vec::new(),
        }
    }

    /// Price as a number, with currency symbols and separators stripped
    ///
    /// Unparseable prices count as `0.0`.
    #[must_use]
    pub fn numeric_price(&self) -> f64 {
        parse_amount(&self.price)
    }

    /// Whether the card carries at least one free-text offer
    #[must_use]
    pub fn has_offers(&self) -> bool {
        !self.offers.is_empty()
    }
}

fn default_installments() -> String {
    "N/A".to_string()
}

/// A product-specific deal, e.g. 5% cashback on a phone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOffer {
    /// Product name the deal applies to
    pub product: String,

    /// Cashback as a percentage string, e.g. `"5%"`
    #[serde(default)]
    pub cashback: String,

    /// Installment plan description, `"N/A"` when there is none
    #[serde(default = "default_installments")]
    pub installments: String,

    /// Only available to holders of this card
    #[serde(default)]
    pub exclusive: bool,
}

impl ProductOffer {
    /// Create a non-exclusive offer without installments
    #[must_use]
    pub fn new(product: impl Into<String>, cashback: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            cashback: cashback.into(),
            installments: default_installments(),
            exclusive: false,
        }
    }

    /// Cashback as a float percentage; malformed values count as `0.0`
    #[must_use]
    pub fn cashback_percent(&self) -> f64 {
        parse_amount(&self.cashback)
    }

    /// Whether an installment plan is offered
    #[must_use]
    pub fn has_installments(&self) -> bool {
        !self.installments.trim().is_empty() && self.installments != "N/A"
    }
}
