//! Application configuration
//!
//! Loaded from `config.json` under the platform config directory, then
//! overridden by environment variables. Every field is optional.

use std::path::{Path, PathBuf};
use std::time::Duration;

use passvault_core::error::{CoreError, CoreResult};
use passvault_remote::{HttpClientOptions, DEFAULT_CONNECT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};

/// Default Config Service collection URL.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/vault/api/key_configs";
/// Default bound on the initial preset load (milliseconds).
pub const DEFAULT_LOAD_TIMEOUT_MS: u64 = 5000;

pub const ENV_ENDPOINT: &str = "PASSVAULT_ENDPOINT";
pub const ENV_AUTH_TOKEN: &str = "PASSVAULT_AUTH_TOKEN";

const CONFIG_DIR_NAME: &str = "passvault";
const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Config Service collection URL.
    pub endpoint: String,
    pub load_timeout_ms: u64,
    pub connect_timeout_secs: u64,
    /// Overall per-request timeout, unbounded when absent.
    pub request_timeout_secs: Option<u64>,
    /// Sent as the `auth_token` header.
    pub auth_token: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            load_timeout_ms: DEFAULT_LOAD_TIMEOUT_MS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            request_timeout_secs: None,
            auth_token: None,
        }
    }
}

impl AppConfig {
    /// `<config dir>/passvault/config.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the file at `path` (or the default location) and apply environment
    /// overrides.
    pub fn load(path: Option<&Path>) -> CoreResult<Self> {
        let config = match path {
            Some(path) => Self::load_from(path)?,
            None => match Self::default_path() {
                Some(path) => Self::load_from(&path)?,
                None => {
                    log::debug!("No platform config directory, using defaults");
                    Self::default()
                }
            },
        };
        Ok(config.with_env(|key| std::env::var(key).ok()))
    }

    /// Read a config file. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> CoreResult<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("Config file {} not found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(CoreError::ConfigError(format!(
                    "Failed to read {}: {e}",
                    path.display()
                )));
            }
        };

        let config: Self = serde_json::from_str(&content).map_err(|e| {
            CoreError::ConfigError(format!("Invalid config file {}: {e}", path.display()))
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply `PASSVAULT_ENDPOINT` / `PASSVAULT_AUTH_TOKEN` as returned by `lookup`.
    /// Empty values are ignored.
    #[must_use]
    pub fn with_env(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(endpoint) = non_empty(ENV_ENDPOINT) {
            self.endpoint = endpoint;
        }
        if let Some(token) = non_empty(ENV_AUTH_TOKEN) {
            self.auth_token = Some(token);
        }
        self
    }

    pub fn load_timeout(&self) -> Duration {
        Duration::from_millis(self.load_timeout_ms)
    }

    pub fn http_options(&self) -> HttpClientOptions {
        HttpClientOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: self.request_timeout_secs.map(Duration::from_secs),
            auth_token: self.auth_token.clone(),
        }
    }
}
