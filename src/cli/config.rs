//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::summarize::{
    DEFAULT_ENDPOINT, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, SummarizerSettings,
};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "CHRISNOTES_CONFIG";

/// Environment variable holding the summarization API token.
pub const TOKEN_ENV: &str = "CHRISNOTES_API_TOKEN";

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Directory holding notes.json, tags.json and settings.json
    pub data_dir: Option<PathBuf>,

    /// Summarization service settings
    #[serde(default)]
    pub summarizer: SummarizerConfig,
}

/// `[summarizer]` table.
#[derive(Debug, Default, Deserialize)]
pub struct SummarizerConfig {
    pub endpoint: Option<String>,
    pub api_token: Option<String>,
    pub max_length: Option<u32>,
    pub min_length: Option<u32>,
    pub timeout_secs: Option<u64>,
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

        Self::parse(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Parses configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/chrisnotes/config.toml`, overridable via `CHRISNOTES_CONFIG`.
    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chrisnotes")
            .join("config.toml")
    }

    /// Resolve the data directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--data-dir` argument
    /// 2. Config file `data_dir` setting
    /// 3. Platform data directory + `ChrisNotes`
    pub fn data_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.data_dir.clone())
            .unwrap_or_else(default_data_dir)
    }

    /// Builds summarizer settings.
    ///
    /// The token comes from the config file, then `CHRISNOTES_API_TOKEN`.
    pub fn summarizer_settings(&self) -> SummarizerSettings {
        self.summarizer_settings_with_env(std::env::var(TOKEN_ENV).ok())
    }

    fn summarizer_settings_with_env(&self, env_token: Option<String>) -> SummarizerSettings {
        let s = &self.summarizer;
        SummarizerSettings {
            endpoint: s
                .endpoint
                .clone()
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            api_token: s.api_token.clone().or(env_token),
            max_length: s.max_length.unwrap_or(DEFAULT_MAX_LENGTH),
            min_length: s.min_length.unwrap_or(DEFAULT_MIN_LENGTH),
            timeout: s.timeout_secs.map(Duration::from_secs),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ChrisNotes")
}
