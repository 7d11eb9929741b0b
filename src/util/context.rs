//! Global context for pinata operations.
//!
//! Provides centralized access to configuration, paths, and the API
//! credential for one run.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use url::Url;

use crate::resolver::Resolver;
use crate::sources::{GitHubSource, HttpTransport};
use crate::util::config::{global_config_dir, load_config, project_config_path, Config};

/// Directory scanned when none is given.
pub const DEFAULT_WORKFLOW_DIR: &str = ".github/workflows";

/// Global context containing configuration and paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Home directory for global pinata data (~/.pinata/)
    home: PathBuf,

    /// Whether to use verbose output
    verbose: bool,

    /// Whether to use colors in output
    color: bool,

    /// Merged global + project configuration
    config: Config,

    /// Bearer token for the GitHub API
    token: Option<String>,
}

impl GlobalContext {
    /// Create a new GlobalContext rooted at the current directory.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Ok(Self::with_cwd(cwd))
    }

    /// Create a GlobalContext with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Self {
        let home = global_config_dir().unwrap_or_else(|| PathBuf::from(".pinata"));
        let config = load_config(&home.join("config.toml"), &project_config_path(&cwd));

        GlobalContext {
            cwd,
            home,
            verbose: false,
            color: true,
            config,
            token: None,
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set verbose mode.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Set color output.
    pub fn set_color(&mut self, color: bool) {
        self.color = color;
    }

    /// Set the API credential. Empty tokens count as absent.
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token.filter(|t| !t.is_empty());
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the pinata home directory (~/.pinata/).
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Get the merged configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if color output is enabled.
    pub fn color(&self) -> bool {
        self.color
    }

    /// Check if an API credential is configured.
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Resolve a workflow directory argument against the working directory.
    pub fn workflow_dir(&self, dir: &Path) -> PathBuf {
        self.cwd.join(dir)
    }

    /// Build a resolver that talks to the configured GitHub API.
    pub fn resolver(&self) -> Result<Resolver> {
        let net = &self.config.net;
        let api_url = Url::parse(net.api_url())
            .with_context(|| format!("invalid API URL: {}", net.api_url()))?;
        let transport = HttpTransport::new(net, self.token.clone())?;

        Ok(Resolver::new(Box::new(GitHubSource::new(
            api_url,
            Box::new(transport),
        ))))
    }
}
