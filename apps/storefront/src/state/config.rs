//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOREFRONT_STORE_NAME=Only                                         │
//! │     STOREFRONT_CATALOG_PATH=./catalog.json                             │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or the platform config dir:                       │
//! │     ~/.config/storefront/storefront.toml (Linux)                       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     Built-in mock catalog, ruble sign, 8 hot deals                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! store_name = "Only"
//! currency_code = "RUB"
//! currency_symbol = "₽"
//! hot_deals_limit = 8
//! catalog_path = "/srv/storefront/catalog.json"
//! ```
//!
//! Read-only after startup, so no lock.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use storefront_core::{Money, DEFAULT_HOT_DEALS_LIMIT};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ConfigState {
    /// Store name shown in the header.
    pub store_name: String,

    /// Currency code (ISO 4217).
    pub currency_code: String,

    /// Currency symbol appended to formatted prices.
    pub currency_symbol: String,

    /// How many products the home screen lists as hot deals.
    pub hot_deals_limit: usize,

    /// Catalog JSON file. `None` uses the built-in mock catalog.
    pub catalog_path: Option<PathBuf>,
}

impl Default for ConfigState {
    /// Defaults suitable for the demo: mock catalog, rubles, 8 hot deals.
    fn default() -> Self {
        ConfigState {
            store_name: "Only".to_string(),
            currency_code: "RUB".to_string(),
            currency_symbol: "₽".to_string(),
            hot_deals_limit: DEFAULT_HOT_DEALS_LIMIT,
            catalog_path: None,
        }
    }
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (explicit path, else the platform default if it exists)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) if path.exists() => {
                info!(?path, "Loading config from file");
                Self::from_file(&path)?
            }
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Parses a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Parses TOML text; missing keys keep their defaults.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue("store_name".to_string()));
        }

        if self.currency_symbol.is_empty() {
            return Err(ConfigError::InvalidValue("currency_symbol".to_string()));
        }

        if self.hot_deals_limit == 0 {
            return Err(ConfigError::InvalidValue("hot_deals_limit".to_string()));
        }

        Ok(())
    }

    /// Applies `STOREFRONT_*` overrides read through `lookup`.
    ///
    /// `lookup` is `std::env::var` in production; tests pass a map.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("STOREFRONT_STORE_NAME") {
            debug!(store_name = %name, "Overriding store name from environment");
            self.store_name = name;
        }

        if let Some(code) = lookup("STOREFRONT_CURRENCY_CODE") {
            self.currency_code = code;
        }

        if let Some(symbol) = lookup("STOREFRONT_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(path) = lookup("STOREFRONT_CATALOG_PATH") {
            debug!(path = %path, "Overriding catalog path from environment");
            self.catalog_path = if path.is_empty() {
                None
            } else {
                Some(PathBuf::from(path))
            };
        }

        if let Some(limit) = lookup("STOREFRONT_HOT_DEALS_LIMIT") {
            match limit.parse::<usize>() {
                Ok(n) => self.hot_deals_limit = n,
                Err(_) => {
                    warn!(value = %limit, "Unparseable STOREFRONT_HOT_DEALS_LIMIT");
                    return Err(ConfigError::InvalidValue(
                        "STOREFRONT_HOT_DEALS_LIMIT".to_string(),
                    ));
                }
            }
        }

        Ok(())
    }

    /// Formats a price with the configured currency symbol.
    ///
    /// ## Examples
    /// ```rust,ignore
    /// config.format_price(Money::from_rubles(89_990)) // "89 990 ₽"
    /// ```
    pub fn format_price(&self, amount: Money) -> String {
        amount.format_with(&self.currency_symbol)
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ConfigState::default();
        assert_eq!(config.hot_deals_limit, 8);
        assert_eq!(config.currency_symbol, "₽");
        assert!(config.catalog_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ConfigState::from_toml("store_name = \"Downtown\"\nhot_deals_limit = 4\n").unwrap();
        assert_eq!(config.store_name, "Downtown");
        assert_eq!(config.hot_deals_limit, 4);
        assert_eq!(config.currency_code, "RUB");
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(matches!(
            ConfigState::from_toml("hot_deals_limit = \"many\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_env_overrides_win_over_file() {
        let mut config = ConfigState::from_toml("store_name = \"From File\"").unwrap();
        config
            .apply_env_overrides(env(&[
                ("STOREFRONT_STORE_NAME", "From Env"),
                ("STOREFRONT_CATALOG_PATH", "/tmp/catalog.json"),
                ("STOREFRONT_HOT_DEALS_LIMIT", "3"),
            ]))
            .unwrap();

        assert_eq!(config.store_name, "From Env");
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
        assert_eq!(config.hot_deals_limit, 3);
    }

    #[test]
    fn test_bad_env_number_rejected() {
        let mut config = ConfigState::default();
        let result = config.apply_env_overrides(env(&[("STOREFRONT_HOT_DEALS_LIMIT", "lots")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_format_price() {
        let config = ConfigState::default();
        assert_eq!(config.format_price(Money::from_rubles(89_990)), "89\u{a0}990\u{a0}₽");
    }

    #[test]
    fn test_validation() {
        let mut config = ConfigState::default();
        config.hot_deals_limit = 0;
        assert!(config.validate().is_err());

        let mut config = ConfigState::default();
        config.store_name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unreadable_file_reports_path() {
        let err = ConfigState::from_file(Path::new("/nonexistent/storefront.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("/nonexistent/storefront.toml"));
    }
}
