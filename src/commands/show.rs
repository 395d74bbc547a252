//! Show command - print one card in detail

use crate::{CardnovaError, catalog::Catalog, output, selection::SelectionError};

type Result<T> = std::result::Result<T, CardnovaError>;

/// Execute the show command
///
/// # Errors
/// Returns `SelectionError::UnknownId` (wrapped) if the catalog has no such card
pub fn execute(catalog: &Catalog, id: &str) -> Result<()> {
    let card = catalog
        .get(id)
        .ok_or_else(|| SelectionError::UnknownId(id.to_string()))?;

    println!("{}", output::card_details(card));
    Ok(())
}
