use fastsearch_core::IndexConfig;
use fastsearch_search::SearchConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Widget settings, persisted as fastsearch.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

impl Settings {
    /// Returns the settings file path within the given directory.
    pub fn path(dir: &Path) -> PathBuf {
        dir.join("fastsearch.toml")
    }

    /// Loads settings from a TOML file. Returns defaults if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let settings = toml::from_str(&content)?;
        Ok(settings)
    }

    /// Saves settings to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates settings values and returns list of validation errors.
    /// Returns empty vec if settings are valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.index.location.trim().is_empty() {
            errors.push("index.location must not be empty".to_string());
        }

        if self.index.timeout_secs == 0 {
            errors.push("index.timeout_secs must be at least 1".to_string());
        }

        errors.extend(
            self.search
                .validate()
                .into_iter()
                .map(|e| format!("search.{e}")),
        );

        errors
    }

    /// Returns validated settings, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = IndexConfig::default();
        Self {
            index: IndexConfig {
                location: if self.index.location.trim().is_empty() {
                    defaults.location
                } else {
                    self.index.location.clone()
                },
                base: self.index.base.clone(),
                timeout_secs: if self.index.timeout_secs == 0 {
                    defaults.timeout_secs
                } else {
                    self.index.timeout_secs
                },
            },
            search: self.search.with_defaults_for_invalid(),
        }
    }
}

/// Errors that can occur when loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
