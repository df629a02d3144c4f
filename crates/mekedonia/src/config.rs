//! Configuration management for the Mekedonia app.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "mekedonia";

/// Default session database file name.
const SESSION_FILE_NAME: &str = "session.db";

/// Merchant name shown on the payment sheet.
const DEFAULT_MERCHANT_NAME: &str = "Mekedonia Charity";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `MEKEDONIA_`)
/// 2. TOML config file at `~/.config/mekedonia/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend API configuration.
    pub api: ApiConfig,
    /// Payment configuration.
    pub payment: PaymentConfig,
    /// Session storage configuration.
    pub session: SessionConfig,
}

/// Backend API configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the charity backend.
    /// When unset, the in-process mock collaborators are used.
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// Payment-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentConfig {
    /// Publishable key for the payment SDK.
    pub publishable_key: Option<String>,
    /// Merchant name shown on the payment sheet.
    pub merchant_display_name: String,
    /// ISO 4217 currency code for donations.
    pub currency: String,
    /// Predefined donation amounts in whole dollars.
    pub preset_amounts: Vec<u64>,
}

/// Session storage configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Path to the session database file.
    /// Defaults to `~/.local/share/mekedonia/session.db`
    pub store_path: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None, // Mock collaborators until the backend is live
            timeout_secs: 30,
        }
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            publishable_key: None,
            merchant_display_name: DEFAULT_MERCHANT_NAME.to_string(),
            currency: "usd".to_string(),
            preset_amounts: vec![10, 25, 50, 100],
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `MEKEDONIA_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("MEKEDONIA_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.api.timeout_secs == 0 {
            return Err(Error::ConfigValidation {
                message: "timeout_secs must be greater than 0".to_string(),
            });
        }

        if let Some(url) = &self.api.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(Error::ConfigValidation {
                    message: format!("base_url must be an http(s) URL: {url}"),
                });
            }
        }

        let currency_ok = self.payment.currency.len() == 3
            && self
                .payment
                .currency
                .chars()
                .all(|c| c.is_ascii_alphabetic());
        if !currency_ok {
            return Err(Error::ConfigValidation {
                message: format!(
                    "currency must be a 3-letter ISO code: {}",
                    self.payment.currency
                ),
            });
        }

        if self.payment.preset_amounts.is_empty() {
            return Err(Error::ConfigValidation {
                message: "preset_amounts must not be empty".to_string(),
            });
        }
        if self.payment.preset_amounts.contains(&0) {
            return Err(Error::ConfigValidation {
                message: "preset_amounts must all be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Get the session database path, resolving defaults if not set.
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.session
            .store_path
            .clone()
            .unwrap_or_else(|| Self::default_data_dir().join(SESSION_FILE_NAME))
    }

    /// Get the API request timeout as a Duration.
    #[must_use]
    pub fn api_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.api.base_url.is_none());
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.payment.publishable_key.is_none());
        assert_eq!(config.payment.merchant_display_name, "Mekedonia Charity");
        assert_eq!(config.payment.currency, "usd");
    }

    #[test]
    fn test_default_preset_amounts() {
        let payment = PaymentConfig::default();
        assert_eq!(payment.preset_amounts, vec![10, 25, 50, 100]);
    }

    #[test]
    fn test_default_session_config() {
        let session = SessionConfig::default();
        assert!(session.store_path.is_none());
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = Config::default();
        config.api.timeout_secs = 0;

        let result = config.validate();
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("timeout_secs"));
    }

    #[test]
    fn test_validate_bad_base_url() {
        let mut config = Config::default();
        config.api.base_url = Some("ftp://charity.example".to_string());

        let result = config.validate();
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("base_url"));
    }

    #[test]
    fn test_validate_accepts_https_base_url() {
        let mut config = Config::default();
        config.api.base_url = Some("https://api.mekedonia.example".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_currency() {
        let mut config = Config::default();
        config.payment.currency = "dollars".to_string();

        let result = config.validate();
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("currency"));
    }

    #[test]
    fn test_validate_empty_presets() {
        let mut config = Config::default();
        config.payment.preset_amounts = vec![];

        let result = config.validate();
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("preset_amounts"));
    }

    #[test]
    fn test_validate_zero_preset() {
        let mut config = Config::default();
        config.payment.preset_amounts = vec![10, 0];

        let result = config.validate();
        assert!(result.is_err());
    }

    #[test]
    fn test_store_path_default() {
        let config = Config::default();
        let path = config.store_path();

        assert!(path.to_string_lossy().contains("session.db"));
        assert!(path.to_string_lossy().contains("mekedonia"));
    }

    #[test]
    fn test_store_path_custom() {
        let mut config = Config::default();
        config.session.store_path = Some(PathBuf::from("/custom/path/session.db"));

        assert_eq!(
            config.store_path(),
            PathBuf::from("/custom/path/session.db")
        );
    }

    #[test]
    fn test_api_timeout() {
        let config = Config::default();
        assert_eq!(config.api_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_default_config_path() {
        let path = Config::default_config_path();
        assert!(path.to_string_lossy().contains("mekedonia"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }

    #[test]
    fn test_load_nonexistent_config() {
        // Loading from a nonexistent path should work (uses defaults)
        let result = Config::load_from(Some(PathBuf::from("/nonexistent/config.toml")));
        assert!(result.is_ok());

        let config = result.unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_serialize() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("preset_amounts"));
        assert!(json.contains("merchant_display_name"));
    }

    #[test]
    fn test_payment_config_deserialize() {
        let json = r#"{"currency": "eur", "preset_amounts": [5, 15]}"#;
        let payment: PaymentConfig = serde_json::from_str(json).unwrap();
        assert_eq!(payment.currency, "eur");
        assert_eq!(payment.preset_amounts, vec![5, 15]);
        // Unspecified fields fall back to defaults
        assert_eq!(payment.merchant_display_name, "Mekedonia Charity");
    }

    #[test]
    fn test_config_clone() {
        let config = Config::default();
        let cloned = config.clone();
        assert_eq!(config, cloned);
    }
}
