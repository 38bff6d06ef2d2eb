//! Configuration management for the ESBN explorer.
//!
//! Handles loading and saving configuration from JSONC files.
//! Manages the start view, default ordering, seeding and logging preferences.

use crate::ranker::SortKey;
use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the user's config dir.
const APP_DIR: &str = "esbn-tui";

/// Application configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Intent opened at startup (e.g. "home", "results?q=bone+loss")
    pub start_intent: String,
    /// Ordering used when the results view opens
    pub default_sort: SortKey,
    /// Fixed seed for rotating text; taken from the clock when absent
    pub seed: Option<u64>,
    /// Log file path (relative to config dir or absolute)
    pub log_file: String,
    /// Log level filter (e.g. "info", "debug", "esbn_tui=trace")
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_intent: "home".to_string(),
            default_sort: SortKey::Relevance,
            seed: None,
            log_file: "esbn-tui.log".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    ///
    /// # Details
    /// Searches for config file in:
    /// 1. Provided path (if given)
    /// 2. `$XDG_CONFIG_HOME/esbn-tui/config.jsonc`
    /// 3. `~/.config/esbn-tui/config.jsonc`
    ///
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = serde_json::from_str(&strip_comments(&content))
            .with_context(|| format!("Failed to deserialize config: {}", config_path.display()))?;

        Ok(config)
    }

    /// Save configuration to file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Details
    /// Creates config directory if it doesn't exist.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, json)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Get default configuration file path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - `$XDG_CONFIG_HOME/esbn-tui/config.jsonc` or error
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(app_config_dir()?.join("config.jsonc"))
    }

    /// Get log file path.
    ///
    /// # Details
    /// If log_file is absolute, returns it as-is.
    /// Otherwise, returns path relative to config directory.
    pub fn log_file_path(&self) -> Result<PathBuf> {
        let log_path = Path::new(&self.log_file);
        if log_path.is_absolute() {
            Ok(log_path.to_path_buf())
        } else {
            Ok(app_config_dir()?.join(log_path))
        }
    }
}

fn app_config_dir() -> Result<PathBuf> {
    let dir = config_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
    Ok(dir.join(APP_DIR))
}

/// Strip `//` line comments that sit outside string literals.
fn strip_comments(content: &str) -> String {
    content
        .lines()
        .map(|line| {
            let mut in_string = false;
            let mut escaped = false;
            let mut prev_slash = false;
            for (i, c) in line.char_indices() {
                match c {
                    _ if escaped => escaped = false,
                    '\\' if in_string => escaped = true,
                    '"' => in_string = !in_string,
                    '/' if !in_string && prev_slash => return line[..i - 1].trim_end(),
                    _ => {}
                }
                prev_slash = c == '/' && !in_string;
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.start_intent, "home");
        assert_eq!(config.default_sort, SortKey::Relevance);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_config_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load(Some(&temp_dir.path().join("absent.jsonc"))).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.jsonc");

        let config = Config {
            default_sort: SortKey::Year,
            seed: Some(7),
            ..Config::default()
        };

        config.save(Some(&config_path)).unwrap();
        assert!(config_path.exists());

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_jsonc_with_comments() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");

        let jsonc_content = r#"{
            // Open straight into the results view
            "start_intent": "results?q=https://ntrs.nasa.gov", // trailing
            "default_sort": "citations"
        }"#;

        fs::write(&config_path, jsonc_content).unwrap();

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded.start_intent, "results?q=https://ntrs.nasa.gov");
        assert_eq!(loaded.default_sort, SortKey::Citations);
        assert_eq!(loaded.log_level, "info");
    }

    #[test]
    fn test_config_rejects_unknown_sort() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");
        fs::write(&config_path, r#"{ "default_sort": "downloads" }"#).unwrap();
        assert!(Config::load(Some(&config_path)).is_err());
    }

    #[test]
    fn test_log_file_path_absolute() {
        let config = Config {
            log_file: "/tmp/esbn.log".to_string(),
            ..Config::default()
        };
        assert_eq!(config.log_file_path().unwrap(), PathBuf::from("/tmp/esbn.log"));
    }
}
