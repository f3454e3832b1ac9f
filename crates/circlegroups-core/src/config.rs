use crate::error::{Error, Result};
use crate::persistence::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding the stored groups and the optional config file
pub const DEFAULT_DATA_DIR: &str = ".circlegroups";

/// Name of the config file inside the data directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for CircleGroups
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub data_dir: ConfigValue<PathBuf>,
    pub storage_key: ConfigValue<String>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            data_dir: ConfigValue::new(PathBuf::from(DEFAULT_DATA_DIR), ConfigSource::Default),
            storage_key: ConfigValue::new(DEFAULT_STORAGE_KEY.to_string(), ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| Error::ConfigInvalid {
            key: "file".to_string(),
            reason: format!("Failed to read config file: {}", e),
        })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| Error::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(data_dir) = file_config.data_dir {
            self.data_dir.update(data_dir, ConfigSource::File);
        }

        if let Some(storage_key) = file_config.storage_key {
            self.storage_key.update(parse_storage_key(&storage_key)?, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load the config file only if it exists
    pub fn load_from_file_if_exists<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        if path.as_ref().exists() {
            self.load_from_file(path)
        } else {
            tracing::debug!(path = %path.as_ref().display(), "No config file, using defaults");
            Ok(self)
        }
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // CIRCLEGROUPS_DATA_DIR
        if let Ok(dir) = env::var("CIRCLEGROUPS_DATA_DIR") {
            if dir.trim().is_empty() {
                tracing::warn!("Ignoring empty CIRCLEGROUPS_DATA_DIR");
            } else {
                self.data_dir.update(PathBuf::from(dir), ConfigSource::Environment);
            }
        }

        // CIRCLEGROUPS_STORAGE_KEY
        if let Ok(key_str) = env::var("CIRCLEGROUPS_STORAGE_KEY") {
            match parse_storage_key(&key_str) {
                Ok(key) => self.storage_key.update(key, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid CIRCLEGROUPS_STORAGE_KEY value '{}': expected a plain name such as circle-groups",
                    key_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(data_dir) = overrides.data_dir {
            self.data_dir.update(data_dir, ConfigSource::Cli);
        }

        if let Some(storage_key) = overrides.storage_key {
            self.storage_key.update(storage_key, ConfigSource::Cli);
        }
    }

    /// Layer `other` on top, keeping whichever value has the higher-precedence source
    pub fn merge(&mut self, other: LayeredConfig) {
        self.data_dir.update(other.data_dir.value, other.data_dir.source);
        self.storage_key.update(other.storage_key.value, other.storage_key.source);
    }

    /// Path of the config file for a data directory
    pub fn config_file_path(data_dir: &Path) -> PathBuf {
        data_dir.join(CONFIG_FILE_NAME)
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert(
            "data_dir".to_string(),
            (self.data_dir.value.display().to_string(), self.data_dir.source),
        );

        map.insert(
            "storage_key".to_string(),
            (self.storage_key.value.clone(), self.storage_key.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    storage_key: Option<String>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub data_dir: Option<PathBuf>,
    pub storage_key: Option<String>,
}

/// Parse a storage key, which must be usable as a plain file name
pub fn parse_storage_key(s: &str) -> Result<String> {
    let key = s.trim();
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        && !key.starts_with('.');

    if valid {
        Ok(key.to_string())
    } else {
        Err(Error::ConfigInvalid {
            key: "storage_key".to_string(),
            reason: format!(
                "Invalid storage key: '{}'. Use letters, digits, '-', '_' or '.'",
                s
            ),
        })
    }
}
