//! Configuration for recency.

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;

use crate::cache::Capacity;
use crate::{RecencyError, RecencyResult};

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE: &str = "recency.toml";

/// Main configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Recency list settings.
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: &[&str] = &["text", "json"];

/// Recency list settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of items: -1 for unbounded, 0 to accept nothing.
    #[serde(default)]
    pub capacity: Capacity,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: Capacity::Unbounded,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> RecencyResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> RecencyResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Checks values serde cannot check on its own.
    pub fn validate(&self) -> RecencyResult<()> {
        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(RecencyError::config(format!(
                "unknown log level '{}'",
                self.logging.level
            )));
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(RecencyError::config(format!(
                "unknown log format '{}'",
                self.logging.format
            )));
        }
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            logging: LoggingConfig::default(),
            cache: CacheConfig::default(),
        }
    }

    /// Loads `recency.toml` from the current directory, or the defaults when
    /// the file does not exist.
    pub fn load_or_default() -> RecencyResult<Self> {
        Self::load_or_default_from(CONFIG_FILE)
    }

    /// Loads `path`, or the defaults when the file does not exist.
    ///
    /// Any other failure, an invalid capacity included, is returned.
    pub fn load_or_default_from<P: AsRef<Path>>(path: P) -> RecencyResult<Self> {
        match Self::load(&path) {
            Err(RecencyError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    path = %path.as_ref().display(),
                    "Config file not found, using defaults"
                );
                Ok(Self::default_config())
            }
            other => other,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "text");
        assert!(config.cache.capacity.is_unbounded());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial() {
        let config: Config = toml::from_str("[cache]\ncapacity = 3\n").unwrap();
        assert_eq!(config.cache.capacity, Capacity::Limited(3));
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_parse_unbounded_and_zero() {
        let config: Config = toml::from_str("[cache]\ncapacity = -1\n").unwrap();
        assert!(config.cache.capacity.is_unbounded());

        let config: Config = toml::from_str("[cache]\ncapacity = 0\n").unwrap();
        assert_eq!(config.cache.capacity, Capacity::Limited(0));
    }

    #[test]
    fn test_parse_rejects_negative_capacity() {
        let err = toml::from_str::<Config>("[cache]\ncapacity = -2\n").unwrap_err();
        assert!(err.to_string().contains("Capacidade inválida -2"));
    }

    #[test]
    fn test_serialize_capacity_as_integer() {
        let mut config = Config::default();
        config.cache.capacity = Capacity::Limited(12);
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("capacity = 12"));

        config.cache.capacity = Capacity::Unbounded;
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("capacity = -1"));
    }

    #[test]
    fn test_validate_rejects_unknown_values() {
        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(matches!(config.validate(), Err(RecencyError::Config(_))));

        let mut config = Config::default();
        config.logging.format = "xml".to_string();
        assert!(matches!(config.validate(), Err(RecencyError::Config(_))));

        let mut config = Config::default();
        config.logging.level = "DEBUG".to_string();
        assert!(config.validate().is_ok());
    }
}
