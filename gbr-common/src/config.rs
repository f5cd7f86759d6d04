//! Bootstrap configuration loading
//!
//! Settings come from, in priority order:
//! 1. Command-line arguments / environment (handled by the binary)
//! 2. TOML configuration file
//! 3. Compiled defaults
//!
//! Missing default config file is not an error: defaults are used and the
//! service starts. An explicitly named file that is missing or malformed is.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::{Error, Result};

/// Default public catalog API
pub const DEFAULT_REMOTE_BASE_URL: &str = "https://api.deezer.com";

/// Configuration loaded from TOML
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TomlConfig {
    /// Interface to bind the HTTP server to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Remote catalog settings
    #[serde(default)]
    pub remote: RemoteConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Remote catalog API settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteConfig {
    /// Base URL, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// How long a fetched genre list is reused (0 disables caching)
    #[serde(default = "default_genre_cache_secs")]
    pub genre_cache_secs: u64,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5780
}

fn default_base_url() -> String {
    DEFAULT_REMOTE_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_genre_cache_secs() -> u64 {
    3600
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            remote: RemoteConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            genre_cache_secs: default_genre_cache_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl TomlConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: TomlConfig = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Invalid TOML: {}", e)))?;
        config.remote.base_url = config.remote.base_url.trim_end_matches('/').to_string();
        config.validate()?;
        Ok(config)
    }

    /// Reject values the service cannot run with
    pub fn validate(&self) -> Result<()> {
        let url = &self.remote.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::InvalidInput(format!(
                "remote.base_url must start with http:// or https://: {}",
                url
            )));
        }
        if self.remote.timeout_secs == 0 {
            return Err(Error::InvalidInput(
                "remote.timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Platform config file location: `<config_dir>/genre-browser/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("genre-browser").join("config.toml"))
}

/// Load configuration
///
/// With an explicit path the file must exist and parse. Without one, the
/// platform default location is tried and compiled defaults are used when
/// it does not exist.
pub fn load_config(explicit_path: Option<&Path>) -> Result<TomlConfig> {
    if let Some(path) = explicit_path {
        return read_config_file(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => read_config_file(&path),
        _ => {
            info!("No config file found, using built-in defaults");
            Ok(TomlConfig::default())
        }
    }
}

fn read_config_file(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;
    let config = TomlConfig::from_toml_str(&content)?;
    info!("Loaded configuration from {}", path.display());
    Ok(config)
}
