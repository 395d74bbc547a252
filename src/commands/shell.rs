//! Shell command - interactive browsing session over stdin
//!
//! Reads one command per line and drives a `BrowseSession`. Rejected actions
//! (full selection, unknown id, too few cards to compare) print a message and
//! the session carries on; only I/O failures end it early.
//!
//! Every filter command rebuilds the whole `FilterConfig` from the current one,
//! so the session never sees a half-updated filter.

use crate::{
    CardnovaError,
    browse::BrowseSession,
    catalog::Catalog,
    commands::list,
    config::CardnovaConfig,
    filters::{FilterConfig, SearchScope},
    output,
    selection::SelectionChanged,
};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

type Result<T> = std::result::Result<T, CardnovaError>;

const PROMPT: &str = "cardnova> ";

const HELP: &str = "\
Commands:
  toggle <id>           Select or deselect a card
  remove <id>           Deselect a card
  clear                 Deselect all cards
  search <term>         Search titles, features and products (empty clears)
  scope card|product    Choose what the search term matches
  credit on|off         Show or hide credit cards
  debit on|off          Show or hide debit cards
  offers on|off         Only show cards with offers
  list                  Show the filtered catalog
  selected              Show the selected cards
  compare               Compare the selected cards
  close                 Close the comparison
  help                  Show this help
  quit                  Leave the shell";

/// A parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Toggle(String),
    Remove(String),
    Clear,
    Search(String),
    Scope(SearchScope),
    Credit(bool),
    Debit(bool),
    Offers(bool),
    List,
    Selected,
    Compare,
    Close,
    Help,
    Quit,
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let line = line.trim();
        let (name, arg) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(name, arg)| (name, arg.trim()));

        let command = match name.to_lowercase().as_str() {
            "toggle" | "t" => Self::Toggle(required(name, arg)?),
            "remove" | "rm" => Self::Remove(required(name, arg)?),
            "clear" => Self::Clear,
            "search" | "s" => Self::Search(arg.to_string()),
            "scope" => Self::Scope(arg.parse()?),
            "credit" => Self::Credit(on_off(name, arg)?),
            "debit" => Self::Debit(on_off(name, arg)?),
            "offers" => Self::Offers(on_off(name, arg)?),
            "list" | "ls" => Self::List,
            "selected" => Self::Selected,
            "compare" | "c" => Self::Compare,
            "close" => Self::Close,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => return Err(format!("Unknown command '{name}'. Type 'help' for a list")),
        };
        Ok(command)
    }
}

fn required(name: &str, arg: &str) -> std::result::Result<String, String> {
    if arg.is_empty() {
        Err(format!("Usage: {name} <id>"))
    } else {
        Ok(arg.to_string())
    }
}

fn on_off(name: &str, arg: &str) -> std::result::Result<bool, String> {
    match arg.to_lowercase().as_str() {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        _ => Err(format!("Usage: {name} on|off")),
    }
}

/// Whether the shell keeps reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Execute the shell command on stdin and stdout
///
/// # Errors
/// Returns an error if reading stdin or writing stdout fails
pub fn execute(catalog: &Catalog, config: &CardnovaConfig, quiet: bool) -> Result<()> {
    let mut session = BrowseSession::with_config(catalog, config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(&mut session, stdin.lock(), &mut stdout, quiet)
}

/// Run the read-eval loop until `quit` or end of input
///
/// # Errors
/// Returns an error if reading `input` or writing `out` fails
pub fn run<R: BufRead, W: Write>(
    session: &mut BrowseSession<'_>,
    input: R,
    out: &mut W,
    quiet: bool,
) -> Result<()> {
    if !quiet {
        writeln!(
            out,
            "{} cards loaded. Type 'help' for commands.",
            session.catalog().len()
        )?;
    }

    prompt(out, quiet)?;
    for line in input.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            match line.parse::<ShellCommand>() {
                Ok(command) => {
                    if apply(session, command, out, quiet)? == Flow::Quit {
                        return Ok(());
                    }
                }
                Err(message) => writeln!(out, "{message}")?,
            }
        }
        prompt(out, quiet)?;
    }

    Ok(())
}

fn prompt<W: Write>(out: &mut W, quiet: bool) -> io::Result<()> {
    if !quiet {
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }
    Ok(())
}

fn apply<W: Write>(
    session: &mut BrowseSession<'_>,
    command: ShellCommand,
    out: &mut W,
    quiet: bool,
) -> Result<Flow> {
    match command {
        ShellCommand::Toggle(id) => {
            let was_comparing = session.is_comparing();
            match session.select_toggle(&id) {
                Ok(SelectionChanged::Added { first: true, .. }) => {
                    writeln!(out, "Card selected. Select at least one more card to compare.")?;
                }
                Ok(SelectionChanged::Added { .. }) => writeln!(out, "Card selected.")?,
                Ok(SelectionChanged::Removed { .. }) => {
                    writeln!(out, "Card removed.")?;
                    if was_comparing && !session.is_comparing() {
                        writeln!(out, "Comparison closed.")?;
                    }
                }
                Ok(SelectionChanged::Unchanged) => {}
                Err(e) => writeln!(out, "{e}")?,
            }
            writeln!(out, "{}", output::selection_status(session.selection_status()))?;
        }
        ShellCommand::Remove(id) => {
            if session.remove_selection(&id) {
                writeln!(out, "Comparison closed.")?;
            }
            writeln!(out, "{}", output::selection_status(session.selection_status()))?;
        }
        ShellCommand::Clear => {
            session.clear_selection();
            writeln!(out, "{}", output::selection_status(session.selection_status()))?;
        }
        ShellCommand::Search(term) => {
            let filter = session.filter_config().to_builder().search_term(term).build();
            refilter(session, filter, out)?;
        }
        ShellCommand::Scope(scope) => {
            let filter = session.filter_config().to_builder().search_scope(scope).build();
            refilter(session, filter, out)?;
        }
        ShellCommand::Credit(enabled) => {
            let filter = session.filter_config().to_builder().credit(enabled).build();
            refilter(session, filter, out)?;
        }
        ShellCommand::Debit(enabled) => {
            let filter = session.filter_config().to_builder().debit(enabled).build();
            refilter(session, filter, out)?;
        }
        ShellCommand::Offers(enabled) => {
            let filter = session.filter_config().to_builder().offers_only(enabled).build();
            refilter(session, filter, out)?;
        }
        ShellCommand::List => {
            for line in list::listing(session, quiet) {
                writeln!(out, "{line}")?;
            }
        }
        ShellCommand::Selected => {
            let catalog = session.catalog();
            for id in session.selection() {
                if let Some(card) = catalog.get(&id) {
                    writeln!(out, "  {id}  {}", card.title)?;
                }
            }
            writeln!(out, "{}", output::selection_status(session.selection_status()))?;
        }
        ShellCommand::Compare => {
            let started = if session.is_comparing() {
                Ok(())
            } else {
                session.start_comparison()
            };
            match started.and_then(|()| session.comparison_table()) {
                Ok(table) => writeln!(out, "{}", output::comparison_table(&table))?,
                Err(e) => writeln!(out, "{e}")?,
            }
        }
        ShellCommand::Close => {
            session.close_comparison();
            writeln!(out, "Comparison closed.")?;
        }
        ShellCommand::Help => writeln!(out, "{HELP}")?,
        ShellCommand::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}

fn refilter<W: Write>(
    session: &mut BrowseSession<'_>,
    filter: FilterConfig,
    out: &mut W,
) -> Result<()> {
    session.set_filter_config(filter);
    writeln!(out, "{} cards match.", session.filtered_catalog().len())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{numbered_catalog, sample_catalog};
    use std::io::Cursor;

    fn run_script(session: &mut BrowseSession<'_>, script: &str) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        run(session, Cursor::new(script), &mut out, true).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("toggle 3".parse::<ShellCommand>(), Ok(ShellCommand::Toggle("3".into())));
        assert_eq!("  SEARCH  iPhone 15 ".parse::<ShellCommand>(), Ok(ShellCommand::Search("iPhone 15".into())));
        assert_eq!("search".parse::<ShellCommand>(), Ok(ShellCommand::Search(String::new())));
        assert_eq!("scope product".parse::<ShellCommand>(), Ok(ShellCommand::Scope(SearchScope::Product)));
        assert_eq!("debit off".parse::<ShellCommand>(), Ok(ShellCommand::Debit(false)));
        assert_eq!("q".parse::<ShellCommand>(), Ok(ShellCommand::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!("toggle".parse::<ShellCommand>().is_err());
        assert!("credit maybe".parse::<ShellCommand>().is_err());
        assert!("scope title".parse::<ShellCommand>().is_err());
        assert!("launch".parse::<ShellCommand>().is_err());
    }

    #[test]
    fn test_toggle_messages_and_status() {
        let catalog = numbered_catalog(5);
        let mut session = BrowseSession::new(&catalog);

        let output = run_script(&mut session, "toggle 1\ntoggle 2\ntoggle 1\n");
        assert!(output.contains("Card selected. Select at least one more card to compare."));
        assert!(output.contains("2/4 selected"));
        assert!(output.contains("Card removed."));
        assert_eq!(session.selection(), vec!["2"]);
    }

    #[test]
    fn test_limit_message() {
        let catalog = numbered_catalog(5);
        let mut session = BrowseSession::new(&catalog);

        let output = run_script(&mut session, "t 1\nt 2\nt 3\nt 4\nt 5\n");
        assert!(output.contains("You can compare up to 4 cards at once."));
        assert_eq!(session.selection().len(), 4);
    }

    #[test]
    fn test_compare_needs_two_then_auto_closes() {
        let catalog = numbered_catalog(5);
        let mut session = BrowseSession::new(&catalog);

        let output = run_script(&mut session, "toggle 1\ncompare\n");
        assert!(output.contains("Select at least 2 cards"));
        assert!(!session.is_comparing());

        let output = run_script(&mut session, "toggle 2\ntoggle 3\ncompare\n");
        assert!(output.contains("Card 3"));
        assert!(session.is_comparing());

        let output = run_script(&mut session, "remove 3\n");
        assert!(output.contains("Comparison closed."));
        assert!(!session.is_comparing());
        assert_eq!(session.selection(), vec!["1", "2"]);
    }

    #[test]
    fn test_filters_rebuild_config() {
        let catalog = sample_catalog();
        let mut session = BrowseSession::new(&catalog);

        run_script(&mut session, "search iphone\nscope product\noffers on\n");
        let filter = session.filter_config();
        assert_eq!(filter.search_term, "iphone");
        assert_eq!(filter.search_scope, SearchScope::Product);
        assert!(filter.offers_only);

        run_script(&mut session, "credit off\ndebit off\n");
        assert!(session.filtered_catalog().is_empty());
        assert_eq!(session.filter_config().search_term, "iphone");
    }

    #[test]
    fn test_quit_stops_reading() {
        let catalog = numbered_catalog(3);
        let mut session = BrowseSession::new(&catalog);

        run_script(&mut session, "quit\ntoggle 1\n");
        assert!(session.selection().is_empty());
    }

    #[test]
    fn test_unknown_command_keeps_going() {
        let catalog = numbered_catalog(3);
        let mut session = BrowseSession::new(&catalog);

        let output = run_script(&mut session, "dance\ntoggle 1\n");
        assert!(output.contains("Unknown command 'dance'"));
        assert_eq!(session.selection(), vec!["1"]);
    }
}
