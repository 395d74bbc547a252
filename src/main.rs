//! Cardnova CLI application entry point
//!
//! This is the main executable for the cardnova card comparison engine. It
//! provides a command-line interface for browsing a card catalog, filtering it,
//! and comparing cards side by side.
//!
//! # Features
//!
//! - **Listing**: Filtered catalog with cheapest and best-rated markers
//! - **Comparison**: Side-by-side table of up to four cards
//! - **Shell**: Interactive session with selection, filters and comparison
//! - **Custom Catalogs**: Load cards from JSON or TOML files
//! - **Quiet Mode**: Suppress informational output for scripting
//!
//! # Usage
//!
//! ```bash
//! # List the catalog (default command)
//! cardnova
//! cardnova list --search metal --no-debit
//!
//! # Cards with an iPhone offer
//! cardnova list -s iphone --product
//!
//! # Compare cards
//! cardnova compare 1 2 8
//! cardnova c 1 4
//!
//! # Interactive session
//! cardnova shell
//!
//! # Use another catalog
//! cardnova --catalog cards.toml list
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/cardnova/config.toml` on Linux) and created with defaults on first
//! run. Set `RUST_LOG=debug` to see selection and comparison events on stderr.

use cardnova::{
    CardnovaError,
    catalog::Catalog,
    cli::{self, Cli, Commands, ConfigCommands},
    commands,
    config::CardnovaConfig,
};
use std::path::Path;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, CardnovaError>;

/// Handle config subcommands - read or change one setting
///
/// # Errors
///
/// Returns `CardnovaError` if the setting is malformed, the key is unknown, the
/// value is invalid, or the config file cannot be written.
fn handle_config_command(mut config: CardnovaConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = cli::split_setting(setting).ok_or_else(|| {
                CardnovaError::InvalidInput("Invalid format. Use: cardnova config set key=value".into())
            })?;

            config.set(key, value)?;
            config.save()?;
            if !quiet {
                println!("Set {key} = {}", config.get(key)?);
            }
        }
        ConfigCommands::Get { key } => {
            println!("{}", config.get(key)?);
        }
    }
    Ok(())
}

/// Load the catalog: `--catalog` first, then the configured file, then the built-in sample
///
/// # Errors
///
/// Returns `CardnovaError` if the chosen file cannot be read, parsed, or validated.
fn load_catalog(cli_path: Option<&Path>, config: &CardnovaConfig) -> Result<Catalog> {
    let catalog = match cli_path.or(config.catalog.as_deref()) {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::sample()?,
    };
    Ok(catalog)
}

/// Main entry point for the cardnova application
///
/// Initializes logging, parses command-line arguments, loads configuration, and
/// dispatches to the appropriate command handler.
///
/// # Errors
///
/// Returns `CardnovaError` if configuration loading fails, the catalog cannot be
/// loaded, or any command handler returns an error.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse_args();
    let command = cli.get_command();

    // config get|set must still work when the stored values are out of range
    let config = match &command {
        Commands::Config { .. } => CardnovaConfig::load_unchecked()?,
        _ => CardnovaConfig::load()?,
    };

    let quiet = cli.quiet || config.quiet;

    if cli.no_color || !config.color {
        colored::control::set_override(false);
    }

    if let Commands::Config { command } = &command {
        return handle_config_command(config, command, quiet);
    }

    let catalog = load_catalog(cli.catalog.as_deref(), &config)?;

    match &command {
        Commands::List { filter_args } => {
            commands::list(&catalog, filter_args.to_filter_config(config.search_scope), quiet)?;
        }
        Commands::Show { id } => {
            commands::show(&catalog, id)?;
        }
        Commands::Compare { ids } => {
            commands::compare(&catalog, &config, ids, quiet)?;
        }
        Commands::Shell => {
            commands::shell(&catalog, &config, quiet)?;
        }
        Commands::Config { .. } => unreachable!(),
    }

    Ok(())
}
