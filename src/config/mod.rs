//
//  catchtrend
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Settings for the CatchTrend backend, the completion service and secure
//! storage, read from a TOML file in the platform config directory. A
//! missing file means "all defaults".
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/catchtrend/config.toml`
//! - **macOS**: `~/Library/Application Support/catchtrend/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\catchtrend\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [api]
//! base_url = "https://strategy-claude-code.vercel.app"
//! timeout_secs = 30
//!
//! [completion]
//! base_url = "https://api.openai.com/v1"
//! model = "gpt-5-mini"
//! timeout_secs = 120
//! api_key_env = "OPENAI_API_KEY"
//!
//! [storage]
//! service = "com.sunshinenew07.CatchTrend"
//! ```
//!
//! Secrets never live in this file: the bearer token goes to secure
//! storage and the completion API key is read from the environment variable
//! named by `completion.api_key_env`.
//!
//! ## Environment Overrides
//!
//! - `CT_BASE_URL` replaces `api.base_url`

mod file;

pub use file::*;

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::auth::DEFAULT_SERVICE;

/// Environment variable overriding `api.base_url`.
pub const BASE_URL_ENV: &str = "CT_BASE_URL";

/// Default CatchTrend backend.
pub const DEFAULT_BASE_URL: &str = "https://strategy-claude-code.vercel.app";

/// Default OpenAI-compatible completion endpoint.
pub const DEFAULT_COMPLETION_BASE_URL: &str = "https://api.openai.com/v1";

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const KEYS: [&str; 7] = [
    "api.base_url",
    "api.timeout_secs",
    "completion.base_url",
    "completion.model",
    "completion.timeout_secs",
    "completion.api_key_env",
    "storage.service",
];

/// The complete configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub completion: CompletionConfig,

    #[serde(default)]
    pub storage: StorageConfig,
}

/// The market-data backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_api_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_api_timeout(),
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// The AI completion service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionConfig {
    #[serde(default = "default_completion_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_completion_timeout")]
    pub timeout_secs: u64,

    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_completion_base_url() -> String {
    DEFAULT_COMPLETION_BASE_URL.to_string()
}

fn default_model() -> String {
    "gpt-5-mini".to_string()
}

fn default_completion_timeout() -> u64 {
    120
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: default_completion_base_url(),
            model: default_model(),
            timeout_secs: default_completion_timeout(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl CompletionConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reads the API key from the configured environment variable.
    ///
    /// Returns `None` when the variable is unset or blank.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }
}

/// Secure storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Keyring service namespace for the stored credentials.
    #[serde(default = "default_service")]
    pub service: String,
}

fn default_service() -> String {
    DEFAULT_SERVICE.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            service: default_service(),
        }
    }
}

impl Config {
    /// Loads the configuration from the default location and applies
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_env();
        Ok(config)
    }

    /// Loads the configuration from `path`. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = read_config_file(path)?;
        toml::from_str(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        write_config_file(path, &content)
    }

    /// The default config file path.
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "catchtrend")
            .ok_or_else(|| anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    fn apply_env(&mut self) {
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                debug!("Using {} from environment", BASE_URL_ENV);
                self.api.base_url = base_url.trim().to_string();
            }
        }
    }

    /// Reads a setting by dotted key, e.g. `api.base_url`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api.base_url" => Some(self.api.base_url.clone()),
            "api.timeout_secs" => Some(self.api.timeout_secs.to_string()),
            "completion.base_url" => Some(self.completion.base_url.clone()),
            "completion.model" => Some(self.completion.model.clone()),
            "completion.timeout_secs" => Some(self.completion.timeout_secs.to_string()),
            "completion.api_key_env" => Some(self.completion.api_key_env.clone()),
            "storage.service" => Some(self.storage.service.clone()),
            _ => None,
        }
    }

    /// Sets a setting by dotted key.
    ///
    /// # Errors
    ///
    /// Fails for an unknown key or a value of the wrong type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "api.base_url" => self.api.base_url = value.to_string(),
            "api.timeout_secs" => self.api.timeout_secs = parse_secs(key, value)?,
            "completion.base_url" => self.completion.base_url = value.to_string(),
            "completion.model" => self.completion.model = value.to_string(),
            "completion.timeout_secs" => self.completion.timeout_secs = parse_secs(key, value)?,
            "completion.api_key_env" => self.completion.api_key_env = value.to_string(),
            "storage.service" => self.storage.service = value.to_string(),
            _ => {
                return Err(anyhow!(
                    "Unknown config key '{}'. Valid keys: {}",
                    key,
                    KEYS.join(", ")
                ))
            }
        }
        Ok(())
    }
}

fn parse_secs(key: &str, value: &str) -> Result<u64> {
    let secs: u64 = value
        .parse()
        .with_context(|| format!("{} expects a whole number of seconds, got '{}'", key, value))?;
    if secs == 0 {
        return Err(anyhow!("{} must be greater than zero", key));
    }
    Ok(secs)
}
