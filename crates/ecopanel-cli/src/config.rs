//! Configuration management for Ecopanel CLI
//!
//! Stores the server URL in ~/.config/ecopanel/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR: &str = "ecopanel";
const CONFIG_FILE: &str = "config.toml";

/// Overrides `base_url` without touching the file
pub const URL_ENV: &str = "ECOPANEL_URL";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let config = match Self::read_file()? {
            Some(content) => Self::parse(&content)?,
            None => Self::default(),
        };
        Ok(config.with_env_override())
    }

    /// Load config, falling back to defaults when the file is unreadable or
    /// corrupt. The error, if any, is handed back for the caller to report.
    pub fn load_lenient() -> (Self, Option<anyhow::Error>) {
        let (config, error) = match Self::read_file() {
            Ok(Some(content)) => Self::parse_lenient(&content),
            Ok(None) => (Self::default(), None),
            Err(e) => (Self::default(), Some(e)),
        };
        (config.with_env_override(), error)
    }

    fn read_file() -> Result<Option<String>> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .with_context(|| format!("Failed to read config from {:?}", path))
    }

    fn with_env_override(mut self) -> Self {
        if let Ok(url) = std::env::var(URL_ENV) {
            if !url.trim().is_empty() {
                self.base_url = url.trim().to_string();
            }
        }
        self
    }

    /// Parse config file contents
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Parse config file contents, using defaults when they do not parse
    pub fn parse_lenient(content: &str) -> (Self, Option<anyhow::Error>) {
        match Self::parse(content) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }
}
