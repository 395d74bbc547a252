//! Testing utilities for cardnova
//!
//! This module provides fixture builders for writing tests: single card records
//! with sensible defaults and ready-made catalogs.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::{CardRecord, CardType, Catalog};

/// Build a credit card record titled `Card {id}` with no features or offers
///
/// Tests adjust the public fields they care about afterwards.
#[must_use]
pub fn card(id: &str, price: &str, rating: f64) -> CardRecord {
    CardRecord::new(id, format!("Card {id}"), price, rating, CardType::Credit)
}

/// Catalog of `count` cards with ids `"1"..="count"`
///
/// Prices and ratings vary so rankings have something to work with.
///
/// # Panics
/// Panics if the generated records are rejected, which would be a fixture bug.
#[must_use]
pub fn numbered_catalog(count: usize) -> Catalog {
    let records = (1..=count)
        .map(|i| {
            let rating = 3.0 + (i % 5) as f64 * 0.4;
            card(&i.to_string(), &format!("${}", 100 * i), rating)
        })
        .collect();

    Catalog::new(records).expect("numbered catalog is valid")
}

/// The built-in sample catalog
///
/// # Panics
/// Panics if the embedded sample data is corrupt.
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog::sample().expect("sample catalog is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_defaults() {
        let record = card("9", "$10", 4.2);
        assert_eq!(record.title, "Card 9");
        assert_eq!(record.card_type, CardType::Credit);
        assert!(record.features.is_empty());
    }

    #[test]
    fn test_numbered_catalog() {
        let catalog = numbered_catalog(6);
        assert_eq!(catalog.len(), 6);
        assert!(catalog.contains("1"));
        assert!(catalog.contains("6"));
        assert!(!catalog.contains("0"));
        assert!(catalog.iter().all(|c| (0.0..=5.0).contains(&c.rating)));
    }
}
