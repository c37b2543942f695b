//! CLI configuration stored as TOML

use std::path::{Path, PathBuf};

use anyhow::Context;
use pathcount_core::{fixture, LabelStyle};
use serde::{Deserialize, Serialize};

/// Get default config file path
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pathcount")
        .join("config.toml")
}

/// Configuration for the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default start vertex, as an id or letter label
    pub start: String,
    /// Default path length in edges
    pub length: usize,
    pub labels: LabelStyle,
    /// Default output format: table, json, csv
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start: fixture::DEMO_START.to_string(),
            length: fixture::DEMO_LENGTH,
            labels: LabelStyle::Letters,
            format: "table".to_string(),
        }
    }
}

impl Config {
    /// Load config from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => match toml::from_str(&text) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Ignoring invalid config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                tracing::debug!("No config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &["start", "length", "labels", "format"]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "start" => Some(self.start.clone()),
            "length" => Some(self.length.to_string()),
            "labels" => Some(self.labels.to_string()),
            "format" => Some(self.format.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "start" => {
                if pathcount_core::parse_vertex(value).is_none() {
                    anyhow::bail!("Invalid vertex: {}", value);
                }
                self.start = value.to_string();
            }
            "length" => {
                let length: usize = value
                    .parse()
                    .with_context(|| format!("Invalid length: {}", value))?;
                pathcount_core::limits::validate_path_length(length)?;
                self.length = length;
            }
            "labels" => {
                self.labels = value.parse().map_err(anyhow::Error::msg)?;
            }
            "format" => match value.to_lowercase().as_str() {
                "table" | "json" | "csv" => self.format = value.to_lowercase(),
                _ => anyhow::bail!("Invalid format: {} (expected table, json, csv)", value),
            },
            _ => anyhow::bail!(
                "Unknown config key: {} (available: {})",
                key,
                Self::keys().join(", ")
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut config = Config::default();
        config.set("start", "C").unwrap();
        config.set("length", "4").unwrap();
        config.set("labels", "numbers").unwrap();
        config.set("format", "JSON").unwrap();

        assert_eq!(config.get("start").as_deref(), Some("C"));
        assert_eq!(config.get("length").as_deref(), Some("4"));
        assert_eq!(config.get("labels").as_deref(), Some("numbers"));
        assert_eq!(config.get("format").as_deref(), Some("json"));
        assert_eq!(config.get("missing"), None);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("start", "A-1").is_err());
        assert!(config.set("length", "many").is_err());
        assert!(config.set("length", "1000").is_err());
        assert!(config.set("labels", "roman").is_err());
        assert!(config.set("format", "xml").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        assert_eq!(Config::load(&path), Config::default());

        let mut config = Config::default();
        config.set("length", "2").unwrap();
        config.save(&path).unwrap();
        assert_eq!(Config::load(&path), config);

        std::fs::write(&path, "length = \"two\"").unwrap();
        assert_eq!(Config::load(&path), Config::default());
    }
}
