//! Configuration management for the `TravelGuide` service
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TravelGuideError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `TravelGuide` service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelGuideConfig {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Storage backend configuration
    pub storage: StorageConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Trip planner settings
    pub planner: PlannerConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory with a built web UI, served for non-API paths
    #[serde(default)]
    pub static_dir: Option<String>,
}

/// Storage backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend kind (fjall or memory)
    #[serde(default = "default_storage_backend")]
    pub backend: String,
    /// Database directory for the fjall backend
    #[serde(default = "default_storage_path")]
    pub path: String,
    /// Import the reference catalog when the store is empty
    #[serde(default = "default_seed_on_start")]
    pub seed_on_start: bool,
    /// Catalog JSON file; the embedded catalog is used when unset
    #[serde(default)]
    pub seed_file: Option<String>,
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

/// Trip planner settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// How many affordable hotels are averaged for the lodging estimate
    #[serde(default = "default_hotel_candidates")]
    pub hotel_candidates: usize,
    /// How many top-rated attractions are spread over the itinerary
    #[serde(default = "default_attraction_limit")]
    pub attraction_limit: usize,
    /// Accommodation label used when no hotel fits the budget
    #[serde(default = "default_fallback_accommodation")]
    pub fallback_accommodation: String,
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_storage_backend() -> String {
    "fjall".to_string()
}

fn default_storage_path() -> String {
    dirs::data_dir()
        .map(|dir| dir.join("travelguide").join("db"))
        .unwrap_or_else(|| PathBuf::from("data").join("db"))
        .to_string_lossy()
        .into_owned()
}

fn default_seed_on_start() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_hotel_candidates() -> usize {
    3
}

fn default_attraction_limit() -> usize {
    5
}

fn default_fallback_accommodation() -> String {
    "Budget accommodation".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: None,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_storage_backend(),
            path: default_storage_path(),
            seed_on_start: default_seed_on_start(),
            seed_file: None,
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

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            hotel_candidates: default_hotel_candidates(),
            attraction_limit: default_attraction_limit(),
            fallback_accommodation: default_fallback_accommodation(),
        }
    }
}

impl TravelGuideConfig {
    /// Load configuration from `config_path` (or the default location) and
    /// `TRAVELGUIDE__*` environment variables
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
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

        // Environment overrides, e.g. TRAVELGUIDE__SERVER__PORT=9000
        builder = builder.add_source(
            Environment::with_prefix("TRAVELGUIDE")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: TravelGuideConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        // Apply defaults for missing values
        config.apply_defaults();

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("travelguide").join("config.toml"))
    }

    /// Apply default values to empty configuration fields
    pub fn apply_defaults(&mut self) {
        if self.server.host.is_empty() {
            self.server.host = default_host();
        }
        if self.storage.backend.is_empty() {
            self.storage.backend = default_storage_backend();
        }
        if self.storage.path.is_empty() {
            self.storage.path = default_storage_path();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
        if self.planner.fallback_accommodation.trim().is_empty() {
            self.planner.fallback_accommodation = default_fallback_accommodation();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(TravelGuideError::config("Server port cannot be 0").into());
        }

        if !(1..=50).contains(&self.planner.hotel_candidates) {
            return Err(TravelGuideError::config(
                "Planner hotel_candidates must be between 1 and 50",
            )
            .into());
        }

        if !(1..=50).contains(&self.planner.attraction_limit) {
            return Err(TravelGuideError::config(
                "Planner attraction_limit must be between 1 and 50",
            )
            .into());
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TravelGuideError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TravelGuideError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        let valid_backends = ["fjall", "memory"];
        if !valid_backends.contains(&self.storage.backend.as_str()) {
            return Err(TravelGuideError::config(format!(
                "Invalid storage backend '{}'. Must be one of: {}",
                self.storage.backend,
                valid_backends.join(", ")
            ))
            .into());
        }

        Ok(())
    }

    /// Address string for the HTTP listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
