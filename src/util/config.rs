//! Configuration file support for pinata.
//!
//! pinata supports two configuration file locations:
//! - Global: `~/.pinata/config.toml` - User-wide defaults
//! - Project: `.pinata/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config. The API credential
//! is never read from these files; it comes from `GITHUB_TOKEN` or `--token`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::sources::DEFAULT_API_URL;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// pinata configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Network settings
    pub net: NetConfig,
}

/// Network-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct NetConfig {
    /// GitHub API base URL (for GitHub Enterprise Server)
    pub api_url: Option<String>,

    /// Per-request timeout in seconds
    pub timeout: Option<u64>,

    /// User-Agent header sent with every request
    pub user_agent: Option<String>,
}

impl NetConfig {
    /// API base URL, defaulting to api.github.com.
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// User-Agent header value.
    pub fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("pinata/{}", env!("CARGO_PKG_VERSION")))
    }
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.net.api_url.is_some() {
            self.net.api_url = other.net.api_url;
        }
        if other.net.timeout.is_some() {
            self.net.timeout = other.net.timeout;
        }
        if other.net.user_agent.is_some() {
            self.net.user_agent = other.net.user_agent;
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.pinata/config.toml)
/// 2. Global config (~/.pinata/config.toml)
/// 3. Defaults
pub fn load_config(global_path: &Path, project_path: &Path) -> Config {
    let mut config = Config::default();

    if global_path.exists() {
        config.merge(Config::load_or_default(global_path));
    }

    if project_path.exists() {
        config.merge(Config::load_or_default(project_path));
    }

    config
}

/// Get the global pinata config directory (~/.pinata).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".pinata"))
}

/// Get the project config path (.pinata/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".pinata").join("config.toml")
}
