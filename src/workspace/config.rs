//! Configuration primitives for the personality lab.
//!
//! Stored in a machine-readable TOML file located at
//! `<workspace root>/config/config.toml`, where the workspace root is
//! `PERSONALITYLAB_HOME` or the OS data directory.

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the workspace root.
pub const HOME_ENV: &str = "PERSONALITYLAB_HOME";
/// Environment variable overriding `ai.api_key`.
pub const API_KEY_ENV: &str = "PERSONALITYLAB_API_KEY";
/// Standard file name of the config inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    /// Narrative provider credentials and model selection.
    #[serde(default)]
    pub ai: AiSettings,
    /// Profile library behaviour.
    #[serde(default)]
    pub library: LibrarySettings,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiSettings {
    /// Provider API key. Absent or blank means analysis is unavailable.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Model used for relationship analysis.
    #[serde(default = "default_analysis_model")]
    pub analysis_model: String,
    /// Model used for follow-up chat.
    #[serde(default = "default_chat_model")]
    pub chat_model: String,
    /// Base URL of the Gemini REST API.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            analysis_model: default_analysis_model(),
            chat_model: default_chat_model(),
            endpoint: default_endpoint(),
        }
    }
}

impl AiSettings {
    /// Resolves the effective key: the environment wins over the file, and
    /// blank values count as missing.
    pub fn resolve_api_key(&self) -> Option<String> {
        let from_env = env::var(API_KEY_ENV).ok();
        non_blank(from_env).or_else(|| non_blank(self.api_key.clone()))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn default_analysis_model() -> String {
    "gemini-3-pro-preview".into()
}

fn default_chat_model() -> String {
    "gemini-3-flash-preview".into()
}

fn default_endpoint() -> String {
    crate::analysis::gemini::DEFAULT_ENDPOINT.into()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LibrarySettings {
    /// Report the seeded demo profiles while a vault is empty.
    #[serde(default = "default_include_demos")]
    pub include_demos: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            include_demos: default_include_demos(),
        }
    }
}

const fn default_include_demos() -> bool {
    true
}

/// Returns the root directory where the lab stores data.
///
/// Order of precedence:
/// 1. `PERSONALITYLAB_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var(HOME_ENV) {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("PersonalityLab"))
}

pub fn config_file_path(root: &Path) -> PathBuf {
    root.join("config").join(CONFIG_FILE_NAME)
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default(root: &Path) -> Result<AppConfig> {
    let path = config_file_path(root);
    if path.exists() {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let cfg: AppConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(cfg)
    } else {
        Ok(AppConfig::default())
    }
}

/// Persists the configuration to disk.
pub fn save(root: &Path, config: &AppConfig) -> Result<PathBuf> {
    let path = config_file_path(root);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;
    }
    let data = toml::to_string_pretty(config)?;
    fs::write(&path, data).with_context(|| format!("Failed to write config file {:?}", path))?;
    Ok(path)
}
