//! Configuration management
//!
//! Loads backend, HTTP, and logging settings from a TOML file. The backend
//! URL is resolved once at startup and injected into the dispatcher; nothing
//! reads it as a global afterwards.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Backend endpoint settings
    #[serde(default)]
    pub backend: BackendConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the provisioning backend lives
#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    /// Base URL, e.g. "http://127.0.0.1:8000"
    #[serde(default = "default_backend_url")]
    pub url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct HttpConfig {
    /// Request timeout in seconds. Unset means the call waits on the backend
    /// indefinitely.
    #[serde(default)]
    pub timeout: Option<u64>,

    /// Connection timeout in seconds. Unset means no limit.
    #[serde(default)]
    pub connect_timeout: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// Log level, overridable via RUST_LOG
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default value functions
fn default_backend_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from `override_path` if given, otherwise probe the
    /// usual locations. Missing config files fall back to defaults.
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = override_path {
            return Self::from_file(path);
        }

        let config_paths = vec![
            PathBuf::from("oltctl.toml"),
            PathBuf::from("/etc/oltctl/config.toml"),
            dirs::home_dir()
                .map(|h| h.join(".config/oltctl/config.toml"))
                .unwrap_or_default(),
        ];

        for path in &config_paths {
            if path.exists() {
                return Self::from_file(path);
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn from_file(path: &Path) -> Result<Self> {
        tracing::debug!("Loading config from: {}", path.display());
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }
}
