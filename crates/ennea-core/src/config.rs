//! Configuration management for the resolution engine.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{CoreError, CoreResult};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

/// Main configuration structure.
///
/// The engine itself needs almost nothing: where to find the curated
/// catalog (built-in by default) and how hosting binaries should log.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Logging settings consumed by hosting binaries.
///
/// The library emits `tracing` events but never installs a subscriber.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Minimum level: trace, debug, info, warn, or error.
    pub level: String,
    /// Output format: pretty or json.
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// Catalog source selection.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Path to a JSON catalog document overriding the built-in tables.
    /// `None` selects the built-in catalog.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in order:
    /// 1. config/default.toml (base settings)
    /// 2. config/{ENNEA_ENV}.toml (environment-specific)
    /// 3. Environment variables with ENNEA_ prefix
    pub fn load() -> CoreResult<Self> {
        let env = std::env::var("ENNEA_ENV").unwrap_or_else(|_| "development".to_string());

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            .add_source(config::Environment::with_prefix("ENNEA").separator("__"));

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &std::path::Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CoreError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| CoreError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> CoreResult<()> {
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(CoreError::ConfigError(format!(
                "logging.level must be one of {:?}, got {:?}",
                LOG_LEVELS, self.logging.level
            )));
        }

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(CoreError::ConfigError(format!(
                "logging.format must be one of {:?}, got {:?}",
                LOG_FORMATS, self.logging.format
            )));
        }

        if let Some(path) = &self.catalog.path {
            if !path.exists() {
                return Err(CoreError::ConfigError(format!(
                    "catalog.path does not exist: {}",
                    path.display()
                )));
            }
        }

        Ok(())
    }
}
