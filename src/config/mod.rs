//! Configuration loading and defaults
//!
//! Read from `.primos.config.json` when present. Every field is optional in
//! the file and falls back to the defaults below.

use std::path::Path;
use std::time::Duration;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::report::OutputFormat;

/// Default config file name, resolved relative to the working directory
pub const DEFAULT_CONFIG_PATH: &str = ".primos.config.json";

fn default_limit() -> i64 {
    33
}

fn default_count() -> i64 {
    7
}

fn default_true() -> bool {
    true
}

fn default_label() -> String {
    "Date and time".to_string()
}

fn default_timestamp_format() -> String {
    "%c".to_string()
}

/// Main primos configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Upper bound used by `run` when none is given
    #[serde(default = "default_limit")]
    pub limit: i64,

    /// Number of primes used by `run` when none is given
    #[serde(default = "default_count")]
    pub count: i64,

    /// How prime lists are printed
    #[serde(default)]
    pub format: OutputFormat,

    /// Timestamp line printed after each list
    #[serde(default)]
    pub trailer: TrailerConfig,

    /// Deadline applied to first-N searches (milliseconds)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_runtime_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            count: default_count(),
            format: OutputFormat::default(),
            trailer: TrailerConfig::default(),
            max_runtime_ms: None,
        }
    }
}

impl Config {
    /// Load config from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from `path`, falling back to defaults only when the file is absent
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Deadline for first-N searches, if configured
    pub fn max_runtime(&self) -> Option<Duration> {
        self.max_runtime_ms.map(Duration::from_millis)
    }

    /// Reject values that can only fail later
    pub fn validate(&self) -> crate::Result<()> {
        if self.limit < 0 {
            return Err(crate::PrimosError::Config(format!(
                "limit must be non-negative, got {}",
                self.limit
            )));
        }
        if self.count < 0 {
            return Err(crate::PrimosError::Config(format!(
                "count must be non-negative, got {}",
                self.count
            )));
        }
        let pattern = &self.trailer.timestamp_format;
        if pattern.trim().is_empty() {
            return Err(crate::PrimosError::Config(
                "trailer.timestamp_format must not be empty".to_string(),
            ));
        }
        if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            return Err(crate::PrimosError::Config(format!(
                "trailer.timestamp_format is not a valid strftime pattern: {}",
                pattern
            )));
        }
        Ok(())
    }
}

/// Timestamp trailer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailerConfig {
    /// Print the trailer at all
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Text before the timestamp
    #[serde(default = "default_label")]
    pub label: String,

    /// chrono strftime pattern
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
}

impl Default for TrailerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            label: default_label(),
            timestamp_format: default_timestamp_format(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.limit, 33);
        assert_eq!(config.count, 7);
        assert!(config.trailer.enabled);
        assert_eq!(config.trailer.timestamp_format, "%c");
    }

    #[test]
    fn test_partial_trailer() {
        let config: Config =
            serde_json::from_str(r#"{"format":"json","trailer":{"label":"Fecha y hora"}}"#).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.trailer.label, "Fecha y hora");
        assert_eq!(config.trailer.timestamp_format, "%c");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_PATH);
        let config = Config {
            limit: 100,
            max_runtime_ms: Some(250),
            ..Config::default()
        };
        config.save(&path).unwrap();
        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.max_runtime(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_validate_rejects_negative_values() {
        let config = Config {
            count: -1,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            limit: -1,
            ..Config::default()
        };
        assert!(config.validate().is_err());

        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_strftime_pattern() {
        let mut config = Config::default();
        config.trailer.timestamp_format = "%Q".to_string();
        assert!(matches!(
            config.validate(),
            Err(crate::PrimosError::Config(_))
        ));

        config.trailer.timestamp_format = "%Y-%m-%d %H:%M:%S".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_PATH);
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_or_default_reports_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_PATH);
        std::fs::write(&path, r#"{ "limit": "oops" }"#).unwrap();
        assert!(matches!(
            Config::load_or_default(&path),
            Err(crate::PrimosError::Json(_))
        ));
    }
}
