//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Itinerary API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Result rendering settings
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(AppError::validation("api.base_url is empty"));
        }
        url::Url::parse(&self.api.base_url)
            .map_err(|e| AppError::validation(format!("api.base_url is invalid: {e}")))?;
        if self.api.endpoint.trim().is_empty() {
            return Err(AppError::validation("api.endpoint is empty"));
        }
        if self.api.token_env.trim().is_empty() {
            return Err(AppError::validation("api.token_env is empty"));
        }
        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(AppError::validation("api.timeout_secs must be > 0"));
        }
        Ok(())
    }
}

/// Itinerary API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API root, e.g. `https://host/api/v2`
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Path of the itinerary listing below the root
    #[serde(default = "defaults::endpoint")]
    pub endpoint: String,

    /// Request the paginated listing; `false` adds `pagination=false`
    #[serde(default)]
    pub paginate: bool,

    /// Environment variable holding the bearer token
    #[serde(default = "defaults::token_env")]
    pub token_env: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            endpoint: defaults::endpoint(),
            paginate: false,
            token_env: defaults::token_env(),
            timeout_secs: defaults::timeout(),
            user_agent: defaults::user_agent(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

/// Result rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Card template, see [`crate::models::Itinerary::format`]
    #[serde(default = "defaults::card_template")]
    pub card_template: String,

    #[serde(default = "defaults::currency_symbol")]
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            card_template: defaults::card_template(),
            currency_symbol: defaults::currency_symbol(),
        }
    }
}

mod defaults {
    // Api defaults
    pub fn base_url() -> String {
        "https://staging.cordeliacruises.com/api/v2".into()
    }
    pub fn endpoint() -> String {
        "itineraries".into()
    }
    pub fn token_env() -> String {
        "CRUISE_API_TOKEN".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; cruise-search/0.1)".into()
    }

    // Logging defaults
    pub fn log_level() -> String {
        "info".into()
    }

    // Display defaults
    pub fn card_template() -> String {
        "{title} | {start_date} → {end_date} | {trip_type} | from {currency}{fare} ({currency}{per_night}/guest/night) | {status}".into()
    }
    pub fn currency_symbol() -> String {
        "₹".into()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        let mut config = Config::default();
        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_token_env() {
        let mut config = Config::default();
        config.api.token_env = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_fills_missing_fields_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\nbase_url = \"http://localhost:9000/api\"\n\n[logging]\nlevel = \"debug\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9000/api");
        assert_eq!(config.api.endpoint, "itineraries");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.display.currency_symbol, "₹");
    }

    #[test]
    fn load_or_default_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(dir.path().join("missing.toml"));
        assert_eq!(config.api.token_env, "CRUISE_API_TOKEN");
    }
}
