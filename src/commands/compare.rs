//! Compare command - side-by-side table for the given cards

use crate::{
    CardnovaError, browse::BrowseSession, catalog::Catalog, config::CardnovaConfig, output,
};

type Result<T> = std::result::Result<T, CardnovaError>;

/// Execute the compare command
///
/// Ids are selected in argument order; repeated ids are ignored.
///
/// # Errors
/// Returns an error if an id is unknown, more ids are given than the configured
/// capacity allows, or fewer than two distinct cards remain.
pub fn execute(catalog: &Catalog, config: &CardnovaConfig, ids: &[String], quiet: bool) -> Result<()> {
    let mut session = BrowseSession::with_config(catalog, config);
    let rendered = render(&mut session, ids)?;

    if !quiet {
        println!("{}\n", output::selection_status(session.selection_status()));
    }
    println!("{rendered}");
    Ok(())
}

/// Select `ids`, open the comparison and render its table
///
/// # Errors
/// See [`execute`].
pub fn render(session: &mut BrowseSession<'_>, ids: &[String]) -> Result<String> {
    for id in ids {
        if !session.is_selected(id) {
            session.select_toggle(id)?;
        }
    }

    session.start_comparison()?;
    let table = session.comparison_table()?;
    Ok(output::comparison_table(&table))
}
