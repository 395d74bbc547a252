//! Output formatting for CLI display
//!
//! Plain-text renderings of catalog listings, card details and comparison
//! tables. Best-price markers are green and best-rating markers are blue;
//! `colored` handles terminals without color support and `--no-color`.

use crate::catalog::CardRecord;
use crate::comparison::table::{ComparisonTable, MAX_STARS, PresenceRow, star_count};
use crate::ranking;
use crate::selection::SelectionStatus;
use colored::Colorize;

const PRESENT: &str = "✓";
const ABSENT: &str = "—";

/// Markers shown next to a card in a listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListMarks {
    pub cheapest: bool,
    pub best_rated: bool,
    pub selected: bool,
}

/// Filled and empty stars for a rating
#[must_use]
pub fn stars(rating: f64) -> String {
    let filled = usize::from(star_count(rating));
    let empty = usize::from(MAX_STARS) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

/// One listing line for a card
#[must_use]
pub fn card_line(card: &CardRecord, marks: ListMarks, quiet: bool) -> String {
    if quiet {
        return card.id.clone();
    }

    let check = if marks.selected { "[x]" } else { "[ ]" };
    let mut line = format!(
        "  {check} {:<4} {:<28} {:>8}  {:.1} {}  {}",
        card.id,
        card.title,
        card.price,
        card.rating,
        stars(card.rating),
        card.card_type
    );

    if marks.cheapest {
        line.push_str(&format!("  {}", "Best price".green().bold()));
    }
    if marks.best_rated {
        line.push_str(&format!("  {}", "Top rated".blue().bold()));
    }
    line
}

/// Multi-line details of one card, including its best offers
#[must_use]
pub fn card_details(card: &CardRecord) -> String {
    let mut lines = vec![
        format!("{} ({})", card.title.bold(), card.id),
        format!("  Type:     {}", card.card_type),
        format!("  Price:    {}", card.price),
        format!("  Rating:   {:.1} {}", card.rating, stars(card.rating)),
    ];

    if !card.features.is_empty() {
        lines.push(format!("  Features: {}", card.features.join(", ")));
    }

    if let Some(best) = ranking::best_offer(card) {
        lines.push(format!("  Offers:   {}", card.offers.join("; ")));
        lines.push(format!("  Best offer: {}", best.green()));
    }

    if !card.product_offers.is_empty() {
        let best = ranking::best_product_offer(card);
        lines.push("  Product offers:".to_string());
        for offer in &card.product_offers {
            let mut line = format!("    {} - {} cashback", offer.product, offer.cashback);
            if offer.has_installments() {
                line.push_str(&format!(", {}", offer.installments));
            }
            if offer.exclusive {
                line.push_str(" [exclusive]");
            }
            if best.is_some_and(|b| std::ptr::eq(b, offer)) {
                line.push_str(&format!(" {}", "(best)".green()));
            }
            lines.push(line);
        }
    }

    lines.join("\n")
}

/// Comparison bar text, e.g. `2/4 selected`
#[must_use]
pub fn selection_status(status: SelectionStatus) -> String {
    format!("{}/{} selected", status.selected, status.capacity)
}

/// Render a comparison table as aligned text columns
#[must_use]
pub fn comparison_table(table: &ComparisonTable<'_>) -> String {
    let mut rows: Vec<(String, Vec<Cell>)> = Vec::new();

    rows.push((
        "Price".to_string(),
        table
            .price
            .cells
            .iter()
            .enumerate()
            .map(|(i, price)| Cell::new(*price, Highlight::price(table.price.best == Some(i))))
            .collect(),
    ));

    rows.push((
        "Rating".to_string(),
        table
            .rating
            .cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                Cell::new(
                    format!("{:.1} {}", cell.rating, stars(cell.rating)),
                    Highlight::rating(table.rating.best == Some(i)),
                )
            })
            .collect(),
    ));

    rows.extend(table.features.iter().map(presence_cells));
    rows.extend(table.offers.iter().map(presence_cells));

    for product in &table.products {
        let cells = product
            .cells
            .iter()
            .map(|cell| match cell {
                Some(cell) => Cell::new(
                    format!("{} cashback", cell.offer.cashback),
                    Highlight::price(cell.best),
                ),
                None => Cell::new(ABSENT, Highlight::None),
            })
            .collect();
        rows.push((product.product.clone(), cells));
    }

    let label_width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    let column_widths: Vec<usize> = (0..table.columns())
        .map(|col| {
            rows.iter()
                .map(|(_, cells)| cells[col].text.chars().count())
                .chain(std::iter::once(table.headers[col].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = Vec::with_capacity(rows.len() + 1);

    let header = table
        .headers
        .iter()
        .zip(&column_widths)
        .map(|(title, &width)| format!("{:<width$}", title).bold().to_string())
        .collect::<Vec<_>>()
        .join("  ");
    out.push(format!("{:<label_width$}  {header}", ""));

    for (label, cells) in &rows {
        let line = cells
            .iter()
            .zip(&column_widths)
            .map(|(cell, &width)| cell.render(width))
            .collect::<Vec<_>>()
            .join("  ");
        out.push(format!("{label:<label_width$}  {line}"));
    }

    out.join("\n")
}

fn presence_cells(row: &PresenceRow) -> (String, Vec<Cell>) {
    let cells = row
        .present
        .iter()
        .map(|&present| Cell::new(if present { PRESENT } else { ABSENT }, Highlight::None))
        .collect();
    (row.label.clone(), cells)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Highlight {
    None,
    BestPrice,
    BestRating,
}

impl Highlight {
    const fn price(best: bool) -> Self {
        if best { Self::BestPrice } else { Self::None }
    }

    const fn rating(best: bool) -> Self {
        if best { Self::BestRating } else { Self::None }
    }
}

#[derive(Debug, Clone)]
struct Cell {
    text: String,
    highlight: Highlight,
}

impl Cell {
    fn new(text: impl Into<String>, highlight: Highlight) -> Self {
        Self {
            text: text.into(),
            highlight,
        }
    }

    /// Pad first so escape codes don't count toward the width
    fn render(&self, width: usize) -> String {
        let padded = format!("{:<width$}", self.text);
        match self.highlight {
            Highlight::None => padded,
            Highlight::BestPrice => padded.green().bold().to_string(),
            Highlight::BestRating => padded.blue().bold().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductOffer;
    use crate::testing::card;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(4.8), "★★★★★");
        assert_eq!(stars(3.4), "★★★☆☆");
        assert_eq!(stars(0.0), "☆☆☆☆☆");
    }

    #[test]
    fn test_card_line_quiet_prints_id() {
        let record = card("7", "$99", 4.0);
        assert_eq!(card_line(&record, ListMarks::default(), true), "7");
    }

    #[test]
    fn test_card_line_marks() {
        plain();
        let record = card("7", "$99", 4.0);
        let marks = ListMarks {
            cheapest: true,
            best_rated: false,
            selected: true,
        };

        let line = card_line(&record, marks, false);
        assert!(line.contains("[x]"));
        assert!(line.contains("Card 7"));
        assert!(line.contains("Best price"));
        assert!(!line.contains("Top rated"));
    }

    #[test]
    fn test_card_details_best_offers() {
        plain();
        let mut record = card("1", "$499", 4.8);
        record.offers = vec!["Welcome bonus".into(), "Lounge access".into()];
        record.product_offers = vec![
            ProductOffer::new("iPhone", "5%"),
            ProductOffer::new("iPad", "7%"),
        ];

        let details = card_details(&record);
        assert!(details.contains("Best offer: Welcome bonus"));
        assert!(details.contains("iPad - 7% cashback (best)"));
        assert!(!details.contains("iPhone - 5% cashback (best)"));
    }

    #[test]
    fn test_selection_status() {
        let status = SelectionStatus {
            selected: 2,
            capacity: 4,
            can_compare: true,
        };
        assert_eq!(selection_status(status), "2/4 selected");
    }

    #[test]
    fn test_comparison_table_layout() {
        plain();
        let mut a = card("1", "$499", 4.8);
        a.features = vec!["Metal".into()];
        let b = card("2", "$199", 4.5);
        let items = vec![&a, &b];

        let rendered = comparison_table(&ComparisonTable::build(&items));
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Card 1"));
        assert!(lines[1].starts_with("Price"));
        assert!(lines[3].starts_with("Metal"));
        assert!(lines[3].contains(PRESENT));
        assert!(lines[3].contains(ABSENT));
    }
}
