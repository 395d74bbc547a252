//! Catalog filtering
//!
//! `apply()` reduces a catalog to the records passing every predicate of a
//! `FilterConfig`, preserving catalog order. Three predicates are combined with
//! AND logic:
//!
//! 1. **Search**: case-insensitive substring match. In card scope the term may
//!    hit the title, any feature or any product name; in product scope only
//!    product names count. An empty term matches everything.
//! 2. **Card type**: the record's type must be enabled.
//! 3. **Offers**: with `offers_only`, the record needs at least one offer.
//!
//! An empty result is a valid result; there is no fallback to the full catalog.
//!
//! # Iterator Adapter
//!
//! [`CardFilterExt`] adds the same filtering to any iterator of card references:
//!
//! ```
//! use cardnova::catalog::Catalog;
//! use cardnova::filters::{CardFilterExt, FilterConfig};
//!
//! let catalog = Catalog::sample().unwrap();
//! let config = FilterConfig::builder().credit(false).build();
//! let debit_cards = catalog.iter().filter_cards(&config);
//! assert!(!debit_cards.is_empty());
//! ```

use super::types::{FilterConfig, SearchScope};
use crate::catalog::{CardRecord, Catalog};

/// Filter a catalog, keeping catalog order
#[must_use]
pub fn apply<'a>(catalog: &'a Catalog, config: &FilterConfig) -> Vec<&'a CardRecord> {
    catalog.iter().filter_cards(config)
}

/// Whether a single record passes all predicates
#[must_use]
pub fn matches(card: &CardRecord, config: &FilterConfig) -> bool {
    passes(card, &config.search_term.to_lowercase(), config)
}

/// All three predicates, with the search term lowercased once by the caller
fn passes(card: &CardRecord, term: &str, config: &FilterConfig) -> bool {
    matches_search(card, term, config.search_scope)
        && config.card_type.allows(card.card_type)
        && (!config.offers_only || card.has_offers())
}

/// Search predicate against an already lowercased term
fn matches_search(card: &CardRecord, term: &str, scope: SearchScope) -> bool {
    if term.is_empty() {
        return true;
    }

    let contains = |text: &str| text.to_lowercase().contains(term);

    let product_hit = card.product_offers.iter().any(|offer| contains(offer.product.as_str()));

    match scope {
        SearchScope::Product => product_hit,
        SearchScope::Card => {
            product_hit
                || contains(card.title.as_str())
                || card.features.iter().any(|f| contains(f.as_str()))
        }
    }
}

/// Extension trait for filtering iterators of card references
pub trait CardFilterExt<'a>: IntoIterator<Item = &'a CardRecord> + Sized {
    /// Keep the cards that pass `config`, in iteration order
    fn filter_cards(self, config: &FilterConfig) -> Vec<&'a CardRecord> {
        let term = config.search_term.to_lowercase();

        self.into_iter()
            .filter(|card| passes(card, &term, config))
            .collect()
    }
}

impl<'a, I> CardFilterExt<'a> for I where I: IntoIterator<Item = &'a CardRecord> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CardType, ProductOffer};
    use crate::testing::{card, sample_catalog};
    use proptest::prelude::*;

    fn ids(cards: &[&CardRecord]) -> Vec<String> {
        cards.iter().map(|c| c.id.clone()).collect()
    }

    fn small_catalog() -> Catalog {
        let mut a = card("1", "$499", 4.8);
        a.title = "Premium iPhone Card".into();
        a.features = vec!["Airport Lounge Access".into()];
        a.product_offers = vec![ProductOffer::new("iPhone", "5%")];
        a.offers = vec!["Bonus points".into()];

        let mut b = card("2", "$199", 4.5);
        b.title = "Lounge Lover".into();
        b.card_type = CardType::Debit;

        let mut c = card("3", "$99", 4.1);
        c.title = "iPhone Fans Card".into();
        c.product_offers = vec![ProductOffer::new("Galaxy", "3%")];

        Catalog::new(vec![a, b, c]).unwrap()
    }

    #[test]
    fn test_default_config_keeps_everything() {
        let catalog = small_catalog();
        let result = apply(&catalog, &FilterConfig::default());
        assert_eq!(ids(&result), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_card_scope_matches_title_feature_and_product() {
        let catalog = small_catalog();

        let by_title = FilterConfig::builder().search_term("fans").build();
        assert_eq!(ids(&apply(&catalog, &by_title)), vec!["3"]);

        let by_feature = FilterConfig::builder().search_term("LOUNGE").build();
        assert_eq!(ids(&apply(&catalog, &by_feature)), vec!["1", "2"]);

        let by_product = FilterConfig::builder().search_term("galaxy").build();
        assert_eq!(ids(&apply(&catalog, &by_product)), vec!["3"]);
    }

    #[test]
    fn test_product_scope_ignores_title_and_features() {
        let catalog = small_catalog();
        let config = FilterConfig::builder()
            .search_term("iPhone")
            .search_scope(SearchScope::Product)
            .build();

        // Card 3 has "iPhone" in its title but no iPhone product offer
        assert_eq!(ids(&apply(&catalog, &config)), vec!["1"]);
    }

    #[test]
    fn test_type_filter() {
        let catalog = small_catalog();

        let credit_only = FilterConfig::builder().debit(false).build();
        assert_eq!(ids(&apply(&catalog, &credit_only)), vec!["1", "3"]);

        let none = FilterConfig::builder().credit(false).debit(false).build();
        assert!(apply(&catalog, &none).is_empty());
    }

    #[test]
    fn test_offers_only() {
        let catalog = small_catalog();
        let config = FilterConfig::builder().offers_only(true).build();
        assert_eq!(ids(&apply(&catalog, &config)), vec!["1"]);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let catalog = small_catalog();
        let config = FilterConfig::builder().search_term("does not exist").build();
        assert!(apply(&catalog, &config).is_empty());
    }

    #[test]
    fn test_matches_single_record() {
        let catalog = small_catalog();
        let config = FilterConfig::builder().search_term("lover").build();
        assert!(matches(catalog.get("2").unwrap(), &config));
        assert!(!matches(catalog.get("1").unwrap(), &config));
    }

    #[test]
    fn test_filter_ext_on_sample() {
        let catalog = sample_catalog();
        let config = FilterConfig::builder()
            .search_term("iphone")
            .search_scope(SearchScope::Product)
            .build();

        let result = catalog.iter().filter_cards(&config);
        assert_eq!(ids(&result), vec!["1", "2", "8"]);
    }

    fn arbitrary_config() -> impl Strategy<Value = FilterConfig> {
        (
            prop_oneof![Just(""), Just("card"), Just("iphone"), Just("lounge"), Just("metal")],
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(term, product, credit, debit, offers_only)| {
                let scope = if product {
                    SearchScope::Product
                } else {
                    SearchScope::Card
                };
                FilterConfig::builder()
                    .search_term(term)
                    .search_scope(scope)
                    .credit(credit)
                    .debit(debit)
                    .offers_only(offers_only)
                    .build()
            })
    }

    proptest! {
        #[test]
        fn property_result_is_ordered_subsequence_of_catalog(config in arbitrary_config()) {
            let catalog = sample_catalog();
            let result = apply(&catalog, &config);

            let positions: Vec<usize> = result
                .iter()
                .map(|c| catalog.position(&c.id).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(result.iter().all(|c| matches(c, &config)));

            let excluded = catalog.iter().filter(|c| !result.iter().any(|r| r.id == c.id));
            for card in excluded {
                prop_assert!(!matches(card, &config));
            }
        }
    }
}
