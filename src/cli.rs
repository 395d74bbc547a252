//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for cardnova using the `clap`
//! crate, plus helpers that turn parsed flags into library values.
//!
//! # Commands
//!
//! - **list**: Show the (filtered) catalog with best-value markers (default)
//! - **show**: Print one card in detail
//! - **compare**: Side-by-side table of two to four cards
//! - **shell**: Interactive session over stdin
//! - **config**: Read or change settings
//!
//! # Design Features
//!
//! - Global `--quiet` flag for scripting-friendly output
//! - Global `--catalog` to browse a JSON or TOML catalog instead of the built-in one
//! - Command aliases (`l` for `list`, `c` for `compare`)
//!
//! # Examples
//!
//! ```
//! use cardnova::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["cardnova", "list", "--search", "metal"]);
//! assert!(matches!(cli.get_command(), Commands::List { .. }));
//! ```

use crate::filters::{FilterConfig, SearchScope};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Filter flags shared by commands that show the catalog
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Search card titles, features and products (case-insensitive)
    #[arg(short = 's', long = "search", value_name = "TERM")]
    pub search: Option<String>,

    /// Only match the search term against product offers
    #[arg(long = "product")]
    pub product: bool,

    /// Hide credit cards
    #[arg(long = "no-credit")]
    pub no_credit: bool,

    /// Hide debit cards
    #[arg(long = "no-debit")]
    pub no_debit: bool,

    /// Only show cards with at least one offer
    #[arg(long = "offers-only")]
    pub offers_only: bool,
}

impl FilterArgs {
    /// Build a filter configuration; `default_scope` applies unless `--product` is set
    #[must_use]
    pub fn to_filter_config(&self, default_scope: SearchScope) -> FilterConfig {
        let scope = if self.product {
            SearchScope::Product
        } else {
            default_scope
        };

        FilterConfig::builder()
            .search_term(self.search.clone().unwrap_or_default())
            .search_scope(scope)
            .credit(!self.no_credit)
            .debit(!self.no_debit)
            .offers_only(self.offers_only)
            .build()
    }
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., max_comparison_items=3)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., quiet)
        #[arg(value_name = "KEY")]
        key: String,
    },
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "cardnova")]
#[command(about = "Browse, filter and compare card offers", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Catalog file to use (JSON or TOML); overrides config
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    /// Disable colored best-value markers
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List catalog cards, optionally filtered (default)
    #[command(visible_alias = "l")]
    List {
        #[command(flatten)]
        filter_args: FilterArgs,
    },

    /// Show one card in detail
    Show {
        /// Card id
        id: String,
    },

    /// Compare cards side by side
    #[command(visible_alias = "c")]
    Compare {
        /// Card ids, in column order
        #[arg(value_name = "ID", required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Start an interactive browsing session
    Shell,

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to an unfiltered List if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::List {
            filter_args: FilterArgs::default(),
        })
    }
}

/// Split a `key=value` setting
///
/// Returns `None` when there is no `=`.
#[must_use]
pub fn split_setting(setting: &str) -> Option<(&str, &str)> {
    setting
        .split_once('=')
        .map(|(key, value)| (key.trim(), value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_unfiltered_list() {
        let cli = Cli::parse_from(["cardnova"]);
        match cli.get_command() {
            Commands::List { filter_args } => assert_eq!(filter_args, FilterArgs::default()),
            other => panic!("Expected List, got {other:?}"),
        }
    }

    #[test]
    fn test_list_flags_to_filter_config() {
        let cli = Cli::parse_from([
            "cardnova",
            "l",
            "-s",
            "iPhone",
            "--product",
            "--no-debit",
            "--offers-only",
        ]);
        let Commands::List { filter_args } = cli.get_command() else {
            panic!("Expected List");
        };

        let config = filter_args.to_filter_config(SearchScope::Card);
        assert_eq!(config.search_term, "iPhone");
        assert_eq!(config.search_scope, SearchScope::Product);
        assert!(config.card_type.credit);
        assert!(!config.card_type.debit);
        assert!(config.offers_only);
    }

    #[test]
    fn test_default_scope_used_without_product_flag() {
        let args = FilterArgs::default();
        assert_eq!(
            args.to_filter_config(SearchScope::Product).search_scope,
            SearchScope::Product
        );
        assert!(args.to_filter_config(SearchScope::Card).is_unfiltered());
    }

    #[test]
    fn test_compare_requires_ids() {
        assert!(Cli::try_parse_from(["cardnova", "compare"]).is_err());

        let cli = Cli::parse_from(["cardnova", "c", "1", "3"]);
        let Some(Commands::Compare { ids }) = cli.command else {
            panic!("Expected Compare");
        };
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["cardnova", "show", "2", "-q", "--catalog", "cards.toml", "--no-color"]);
        assert!(cli.quiet);
        assert!(cli.no_color);
        assert_eq!(cli.catalog, Some(PathBuf::from("cards.toml")));
    }

    #[test]
    fn test_split_setting() {
        assert_eq!(split_setting("quiet = true"), Some(("quiet", "true")));
        assert_eq!(split_setting("catalog="), Some(("catalog", "")));
        assert_eq!(split_setting("quiet"), None);
    }
}
