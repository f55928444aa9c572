//! Configuration management for the `TripScout` service
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::TripScoutError;

/// Root configuration structure for the `TripScout` service
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TripScoutConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Place catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// External chatbot (trip-plan) service
    #[serde(default)]
    pub chatbot: ChatbotConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,
    /// Directory served as static image assets under `/Image`
    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,
}

/// Place catalog source settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to the places JSON file
    #[serde(default = "default_catalog_path")]
    pub data_path: String,
}

/// External chatbot service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatbotConfig {
    /// Endpoint the trip-plan endpoint forwards to
    #[serde(default = "default_chatbot_endpoint")]
    pub endpoint: String,
    /// Request timeout in seconds
    #[serde(default = "default_chatbot_timeout")]
    pub timeout_seconds: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

// Default value functions
fn default_port() -> u16 {
    3001
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_assets_dir() -> String {
    "Image".to_string()
}

fn default_catalog_path() -> String {
    "data/places.json".to_string()
}

fn default_chatbot_endpoint() -> String {
    "http://localhost:5000/chatbot".to_string()
}

fn default_chatbot_timeout() -> u32 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            assets_dir: default_assets_dir(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_path: default_catalog_path(),
        }
    }
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        Self {
            endpoint: default_chatbot_endpoint(),
            timeout_seconds: default_chatbot_timeout(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl TripScoutConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. TRIPSCOUT_SERVER__PORT=8080
        builder = builder.add_source(
            Environment::with_prefix("TRIPSCOUT")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: TripScoutConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tripscout").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        if self.catalog.data_path.is_empty() {
            return Err(TripScoutError::config("Catalog data path cannot be empty").into());
        }

        if self.chatbot.endpoint.is_empty() {
            return Err(TripScoutError::config("Chatbot endpoint cannot be empty").into());
        }

        if !self.chatbot.endpoint.starts_with("http://")
            && !self.chatbot.endpoint.starts_with("https://")
        {
            return Err(TripScoutError::config(
                "Chatbot endpoint must be an http(s) URL",
            )
            .into());
        }

        if self.chatbot.timeout_seconds == 0 || self.chatbot.timeout_seconds > 300 {
            return Err(TripScoutError::config(
                "Chatbot timeout must be between 1 and 300 seconds",
            )
            .into());
        }

        let valid_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            return Err(TripScoutError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_levels.join(", ")
            ))
            .into());
        }

        let valid_formats = ["pretty", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            return Err(TripScoutError::config(format!(
                "Invalid log format '{}'. Must be 'pretty' or 'json'",
                self.logging.format
            ))
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TripScoutConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.catalog.data_path, "data/places.json");
        assert_eq!(config.chatbot.endpoint, "http://localhost:5000/chatbot");
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        let mut config = TripScoutConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let mut config = TripScoutConfig::default();
        config.chatbot.timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_non_http_chatbot_endpoint_is_rejected() {
        let mut config = TripScoutConfig::default();
        config.chatbot.endpoint = "ftp://example.com/chatbot".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_catalog_path_is_rejected() {
        let mut config = TripScoutConfig::default();
        config.catalog.data_path = String::new();
        assert!(config.validate().is_err());
    }
}
