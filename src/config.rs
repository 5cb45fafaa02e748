use anyhow::Result;
use ::config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::github::retry::RetryConfig;
use crate::github::GitHubError;

/// Main configuration structure for the bootstrap tool
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// GitHub configuration
    pub github: GitHubConfig,
    /// Fork polling settings
    pub fork: ForkConfig,
    /// Logging settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// GitHub API token (can be set via env var)
    pub token: Option<String>,
    /// Account the fork lands in
    pub username: Option<String>,
    /// API base URI, for GitHub Enterprise
    pub api_base: Option<String>,
}

impl GitHubConfig {
    pub fn require_token(&self) -> Result<&str, GitHubError> {
        self.token
            .as_deref()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                GitHubError::TokenNotFound(
                    "set github.token, GITHUB_TOKEN or ATLANTIS_BOOTSTRAP_GITHUB_TOKEN".to_string(),
                )
            })
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ForkConfig {
    /// Fork requests issued before giving up
    pub max_attempts: u32,
    /// Pause between fork requests
    pub interval_ms: u64,
    /// Abort a full run when the fork could not be confirmed
    pub require_ready: bool,
}

impl Default for ForkConfig {
    fn default() -> Self {
        let retry = RetryConfig::default();
        Self {
            max_attempts: retry.max_attempts,
            interval_ms: retry.interval.as_millis() as u64,
            require_ready: false,
        }
    }
}

impl ForkConfig {
    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig {
            max_attempts: self.max_attempts,
            interval: Duration::from_millis(self.interval_ms),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level, overridden by RUST_LOG
    pub log_level: String,
    /// Emit JSON log lines instead of human-readable ones
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: true,
        }
    }
}

impl BootstrapConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration files (atlantis-bootstrap.toml, .atlantis-bootstrap-rc)
    /// 3. Environment variables (ATLANTIS_BOOTSTRAP__SECTION__KEY)
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Same as [`BootstrapConfig::load`], looking for configuration files in `dir`.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let mut builder = Config::builder();

        let toml_file = dir.join("atlantis-bootstrap.toml");
        if toml_file.exists() {
            builder = builder.add_source(File::from(toml_file));
        }

        let rc_file = dir.join(".atlantis-bootstrap-rc");
        if rc_file.exists() {
            builder = builder.add_source(File::from(rc_file).format(::config::FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix("ATLANTIS_BOOTSTRAP")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let mut bootstrap_config: BootstrapConfig = builder.build()?.try_deserialize()?;

        // Token falls back to the conventional variables
        if bootstrap_config.github.token.is_none() {
            if let Ok(token) = std::env::var("GITHUB_TOKEN") {
                bootstrap_config.github.token = Some(token);
            } else if let Ok(token) = std::env::var("ATLANTIS_BOOTSTRAP_GITHUB_TOKEN") {
                bootstrap_config.github.token = Some(token);
            }
        }

        Ok(bootstrap_config)
    }

    pub fn github_username(&self) -> Result<&str, GitHubError> {
        self.github
            .username
            .as_deref()
            .filter(|username| !username.is_empty())
            .ok_or_else(|| {
                GitHubError::ConfigNotFound(
                    "github.username is required to locate the fork".to_string(),
                )
            })
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists. Returns whether one was loaded.
    ///
    /// Runs before logging is set up, so reporting is left to the caller.
    pub fn load_env_file() -> Result<bool> {
        Self::load_env_file_from(Path::new("."))
    }

    pub fn load_env_file_from(dir: &Path) -> Result<bool> {
        let env_file = dir.join(".env");
        if !env_file.exists() {
            return Ok(false);
        }
        dotenvy::from_path(&env_file)?;
        Ok(true)
    }
}
