//! List command - print the filtered catalog with best-value markers

use crate::{
    CardnovaError,
    browse::BrowseSession,
    catalog::Catalog,
    filters::FilterConfig,
    output::{self, ListMarks},
};

type Result<T> = std::result::Result<T, CardnovaError>;

/// Execute the list command
///
/// # Errors
/// Currently infallible; returns `Result` like every other command.
pub fn execute(catalog: &Catalog, filter: FilterConfig, quiet: bool) -> Result<()> {
    let mut session = BrowseSession::new(catalog);
    session.set_filter_config(filter);

    for line in listing(&session, quiet) {
        println!("{line}");
    }
    Ok(())
}

/// Listing lines for the session's filtered view
///
/// The cheapest and best-rated markers are computed over the filtered view,
/// not the whole catalog.
#[must_use]
pub fn listing(session: &BrowseSession<'_>, quiet: bool) -> Vec<String> {
    let cards = session.filtered_catalog();

    if cards.is_empty() {
        return if quiet {
            Vec::new()
        } else {
            vec!["No cards match the current filters.".to_string()]
        };
    }

    let annotations = session.ranking_annotations(&cards);
    let mut lines = Vec::with_capacity(cards.len() + 1);

    if !quiet {
        lines.push(format!(
            "Showing {} of {} cards:",
            cards.len(),
            session.catalog().len()
        ));
    }

    lines.extend(cards.iter().enumerate().map(|(i, card)| {
        let marks = ListMarks {
            cheapest: annotations.is_lowest_price(i),
            best_rated: annotations.is_highest_rating(i),
            selected: session.is_selected(&card.id),
        };
        output::card_line(card, marks, quiet)
    }));

    lines
}
