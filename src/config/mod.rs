//! Configuration module for cardnova
//!
//! Manages application configuration: comparison capacity, the default catalog
//! file and display preferences. Configuration is stored as TOML in the user's
//! config directory (`~/.config/cardnova/config.toml` on Linux).

use crate::filters::SearchScope;
use crate::selection::{DEFAULT_MAX_COMPARISON_ITEMS, MIN_COMPARISON_ITEMS};
use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys accepted by `get` and `set`
pub const KEYS: &[&str] = &["max_comparison_items", "catalog", "quiet", "search_scope", "color"];

const fn default_max_comparison_items() -> usize {
    DEFAULT_MAX_COMPARISON_ITEMS
}

const fn default_color() -> bool {
    true
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CardnovaConfig {
    /// How many cards can be selected for comparison
    #[serde(default = "default_max_comparison_items")]
    pub max_comparison_items: usize,

    /// Catalog file used when `--catalog` is not given; the built-in sample otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Initial search scope of a new session
    #[serde(default)]
    pub search_scope: SearchScope,

    /// Colorize best-value markers
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for CardnovaConfig {
    fn default() -> Self {
        Self {
            max_comparison_items: DEFAULT_MAX_COMPARISON_ITEMS,
            catalog: None,
            quiet: false,
            search_scope: SearchScope::Card,
            color: true,
        }
    }
}

impl CardnovaConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("cardnova").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created,
    /// or if it holds invalid values.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, writing defaults there if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created, or if
    /// it holds invalid values.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the default location without validating values
    ///
    /// Used by `config get|set` so an out-of-range setting can still be read and
    /// repaired.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load_unchecked() -> Result<Self, ConfigError> {
        Self::load_unchecked_from(&Self::config_path()?)
    }

    /// Load configuration from `path` without validating values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or created.
    pub fn load_unchecked_from(path: &Path) -> Result<Self, ConfigError> {
        Self::read(path)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or the
    /// file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Check value constraints
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `max_comparison_items` is below 2, since a
    /// comparison needs at least two cards.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_comparison_items < MIN_COMPARISON_ITEMS {
            return Err(ConfigError::Message(format!(
                "max_comparison_items must be at least {MIN_COMPARISON_ITEMS}, got {}",
                self.max_comparison_items
            )));
        }
        Ok(())
    }

    /// Read a setting as display text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the key is unknown.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "max_comparison_items" => self.max_comparison_items.to_string(),
            "catalog" => self
                .catalog
                .as_ref()
                .map_or_else(|| "(built-in sample)".to_string(), |p| p.display().to_string()),
            "quiet" => self.quiet.to_string(),
            "search_scope" => self.search_scope.to_string(),
            "color" => self.color.to_string(),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }

    /// Change a setting from its text form; does not save
    ///
    /// An empty value for `catalog` resets it to the built-in sample.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the key is unknown or the value does not parse or
    /// validate. The configuration is unchanged on error.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let mut updated = self.clone();

        match key {
            "max_comparison_items" => {
                updated.max_comparison_items = value.parse().map_err(|_| {
                    ConfigError::Message(format!(
                        "Invalid value for max_comparison_items: '{value}'. Use a whole number"
                    ))
                })?;
            }
            "catalog" => {
                updated.catalog = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "quiet" => updated.quiet = parse_bool(key, value)?,
            "search_scope" => {
                updated.search_scope = value.parse().map_err(ConfigError::Message)?;
            }
            "color" => updated.color = parse_bool(key, value)?,
            _ => return Err(unknown_key(key)),
        }

        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    value.parse::<bool>().map_err(|_| {
        ConfigError::Message(format!(
            "Invalid value for {key}: '{value}'. Use 'true' or 'false'"
        ))
    })
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::Message(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        KEYS.join(", ")
    ))
}
