//! Configuration file support.

use crate::enrich::DEFAULT_WIKIPEDIA_ENDPOINT;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Default store file
    pub store: Option<PathBuf>,

    /// Wikipedia opensearch endpoint override
    pub wiki_endpoint: Option<String>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/jotter/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jotter")
            .join("config.toml")
    }

    /// Resolve the store file, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--store` argument
    /// 2. Config file `store` setting
    /// 3. `notes.json` in the current working directory
    pub fn store_path(&self, cli_store: Option<&PathBuf>) -> PathBuf {
        cli_store
            .cloned()
            .or_else(|| self.store.clone())
            .unwrap_or_else(|| PathBuf::from("notes.json"))
    }

    /// Resolve the Wikipedia opensearch endpoint.
    pub fn wiki_endpoint(&self) -> &str {
        self.wiki_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_WIKIPEDIA_ENDPOINT)
    }
}
