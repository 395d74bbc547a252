//! Lenient numeric parsing for prices and percentages
//!
//! Catalog prices and cashback rates are display strings (`"$1,299"`, `"5%"`).
//! Ranking needs numbers, and ranking must always complete, so parsing here is
//! total: anything that does not yield a number counts as `0.0`.

use regex::Regex;
use std::sync::LazyLock;

static NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.]").expect("static pattern is valid"));

static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+\.?\d*|\.\d+)").expect("static pattern is valid"));

/// Parse an amount out of a display string
///
/// Every character other than ASCII digits and `.` is stripped first, then the
/// longest leading number is parsed. Returns `0.0` when nothing numeric remains.
///
/// # Examples
/// ```
/// use cardnova::ranking::parse_amount;
///
/// assert_eq!(parse_amount("$1,299"), 1299.0);
/// assert_eq!(parse_amount("5%"), 5.0);
/// assert_eq!(parse_amount("N/A"), 0.0);
/// ```
#[must_use]
pub fn parse_amount(text: &str) -> f64 {
    let stripped = NON_NUMERIC.replace_all(text, "");

    LEADING_NUMBER
        .find(&stripped)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}
