//! Configuration loading and management.
//!
//! Settings come from an optional `connectwith.toml`, with the Gemini API key
//! taken from the environment (a local `.env` file is honoured at startup).

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("GEMINI_API_KEY not found. Please add your API key to continue.")]
    MissingApiKey,
}

/// LLM settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Model identifier (e.g., "gemini-2.0-flash")
    pub model: String,
    /// Sampling temperature used for both completion calls
    pub temperature: f32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".to_string(),
            temperature: 0.7,
        }
    }
}

/// API keys configuration (loaded from environment)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    #[serde(default)]
    pub gemini_key: Option<String>,
}

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub agent: AgentConfig,
    pub api: ApiConfig,
}

impl Config {
    /// Load configuration, falling back to defaults when no config file
    /// exists in the standard locations.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::find_config_file() {
            Some(path) => {
                let content = std::fs::read_to_string(&path)?;
                toml::from_str(&content)?
            }
            None => Config::default(),
        };

        // Override the API key from the environment
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            config.api.gemini_key = Some(key);
        }

        Ok(config)
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        // Check current directory first
        let local_config = PathBuf::from("connectwith.toml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Check home directory
        if let Some(home) = dirs::home_dir() {
            let home_config = home
                .join(".config")
                .join("connectwith")
                .join("connectwith.toml");
            if home_config.exists() {
                return Some(home_config);
            }
        }

        None
    }

    /// Get the Gemini API key; an absent key is a startup error.
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        self.api.gemini_key.as_deref().ok_or(ConfigError::MissingApiKey)
    }
}
