//! Configuration management for `TravelAssist`
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::{Result, TravelAssistError};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for `TravelAssist`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TravelAssistConfig {
    /// Provider endpoints
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    /// Outbound HTTP settings
    #[serde(default)]
    pub http: HttpConfig,
    /// Station tool settings
    #[serde(default)]
    pub stations: StationsConfig,
    /// Agent settings
    #[serde(default)]
    pub agents: AgentsConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Base URLs of the public APIs the tools wrap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointsConfig {
    /// Open-Meteo geocoding API
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,
    /// Open-Meteo forecast API
    #[serde(default = "default_weather_base_url")]
    pub weather_base_url: String,
    /// HeartRails Express JSON API
    #[serde(default = "default_station_base_url")]
    pub station_base_url: String,
}

/// HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Request timeout in seconds. Unset means the transport default.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Station tool settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationsConfig {
    /// Maximum number of nearby stations reported
    #[serde(default = "default_nearby_limit")]
    pub nearby_limit: usize,
}

/// Agent settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentsConfig {
    /// Model identifier handed to the hosted runtime
    #[serde(default = "default_model")]
    pub model: String,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty, compact or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com/v1".to_string()
}

fn default_weather_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_station_base_url() -> String {
    "https://express.heartrails.com/api/json".to_string()
}

fn default_user_agent() -> String {
    format!("TravelAssist/{}", crate::VERSION)
}

fn default_nearby_limit() -> usize {
    5
}

fn default_model() -> String {
    "gemini-2.0-flash-lite".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            geocoding_base_url: default_geocoding_base_url(),
            weather_base_url: default_weather_base_url(),
            station_base_url: default_station_base_url(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: None,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for StationsConfig {
    fn default() -> Self {
        Self {
            nearby_limit: default_nearby_limit(),
        }
    }
}

impl Default for AgentsConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
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

impl TravelAssistConfig {
    /// Load configuration from the default file location and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // An explicit path must exist; the default location is optional
        match config_path {
            Some(config_file) => {
                builder = builder.add_source(
                    File::from(config_file)
                        .required(true)
                        .format(config::FileFormat::Toml),
                );
            }
            None => {
                let config_file =
                    Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"));
                if config_file.exists() {
                    builder = builder.add_source(
                        File::from(config_file)
                            .required(false)
                            .format(config::FileFormat::Toml),
                    );
                }
            }
        }

        // TRAVELASSIST_LOGGING__LEVEL=debug overrides logging.level
        builder = builder.add_source(
            Environment::with_prefix("TRAVELASSIST")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder.build().map_err(|e| {
            TravelAssistError::config(format!("Failed to build configuration: {e}"))
        })?;

        let mut config: TravelAssistConfig = settings.try_deserialize().map_err(|e| {
            TravelAssistError::config(format!("Failed to deserialize configuration: {e}"))
        })?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("travelassist").join("config.toml"))
    }

    /// Apply default values to blank configuration fields
    pub fn apply_defaults(&mut self) {
        if self.endpoints.geocoding_base_url.is_empty() {
            self.endpoints.geocoding_base_url = default_geocoding_base_url();
        }
        if self.endpoints.weather_base_url.is_empty() {
            self.endpoints.weather_base_url = default_weather_base_url();
        }
        if self.endpoints.station_base_url.is_empty() {
            self.endpoints.station_base_url = default_station_base_url();
        }
        if self.http.user_agent.is_empty() {
            self.http.user_agent = default_user_agent();
        }
        if self.stations.nearby_limit == 0 {
            self.stations.nearby_limit = default_nearby_limit();
        }
        if self.agents.model.is_empty() {
            self.agents.model = default_model();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_endpoints()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    fn validate_endpoints(&self) -> Result<()> {
        let endpoints = [
            ("geocoding", &self.endpoints.geocoding_base_url),
            ("weather", &self.endpoints.weather_base_url),
            ("station", &self.endpoints.station_base_url),
        ];

        for (name, url) in endpoints {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(TravelAssistError::config(format!(
                    "The {name} base URL must be a valid HTTP or HTTPS URL, got '{url}'"
                )));
            }
        }

        Ok(())
    }

    fn validate_numeric_ranges(&self) -> Result<()> {
        if let Some(timeout) = self.http.timeout_seconds {
            if timeout == 0 || timeout > 300 {
                return Err(TravelAssistError::config(
                    "HTTP timeout must be between 1 and 300 seconds",
                ));
            }
        }

        if self.stations.nearby_limit > 50 {
            return Err(TravelAssistError::config(
                "Nearby station limit cannot exceed 50",
            ));
        }

        Ok(())
    }

    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TravelAssistError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            )));
        }

        let valid_log_formats = ["pretty", "compact", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TravelAssistError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TravelAssistConfig::default();
        assert_eq!(
            config.endpoints.geocoding_base_url,
            "https://geocoding-api.open-meteo.com/v1"
        );
        assert_eq!(config.endpoints.weather_base_url, "https://api.open-meteo.com/v1");
        assert_eq!(
            config.endpoints.station_base_url,
            "https://express.heartrails.com/api/json"
        );
        assert!(config.http.timeout_seconds.is_none());
        assert_eq!(config.stations.nearby_limit, 5);
        assert_eq!(config.agents.model, "gemini-2.0-flash-lite");
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = TravelAssistConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_invalid_log_format() {
        let mut config = TravelAssistConfig::default();
        config.logging.format = "xml".to_string();
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("Invalid log format"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = TravelAssistConfig::default();
        config.http.timeout_seconds = Some(500);
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("HTTP timeout"));

        let mut config = TravelAssistConfig::default();
        config.stations.nearby_limit = 100;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_bad_url() {
        let mut config = TravelAssistConfig::default();
        config.endpoints.station_base_url = "express.heartrails.com".to_string();
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("station base URL"));
    }

    #[test]
    fn test_apply_defaults_fills_blanks() {
        let mut config = TravelAssistConfig::default();
        config.endpoints.weather_base_url.clear();
        config.stations.nearby_limit = 0;
        config.logging.format.clear();
        config.apply_defaults();
        assert_eq!(config.endpoints.weather_base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.stations.nearby_limit, 5);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_toml_file() {
        let path = std::env::temp_dir().join(format!(
            "travelassist-config-test-{}.toml",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "[stations]\nnearby_limit = 3\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = TravelAssistConfig::load_from_path(Some(path.clone())).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.stations.nearby_limit, 3);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.endpoints.weather_base_url, "https://api.open-meteo.com/v1");
    }

    #[test]
    fn test_missing_explicit_config_file_is_an_error() {
        let path = std::env::temp_dir().join(format!(
            "travelassist-missing-{}/typo.toml",
            std::process::id()
        ));

        let err = TravelAssistConfig::load_from_path(Some(path)).unwrap_err();
        assert!(matches!(err, TravelAssistError::Config { .. }));
        assert!(err.to_string().contains("Failed to build configuration"));
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = TravelAssistConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("travelassist"));
            assert!(path.to_string_lossy().contains("config.toml"));
        }
    }
}
