use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

// ============ Presets ============

/// Derivation parameters stored for one named preset.
///
/// This is the record shape exchanged with the Config Service: the collection
/// endpoint returns a JSON object of `name -> PresetConfig`, and the upsert
/// endpoint takes a single `PresetConfig` as its body.
///
/// # Symbols
///
/// `symbols` is either empty, meaning symbol injection is disabled, or the
/// literal pool of symbol characters to draw from. Records that omit the
/// field deserialize as disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetConfig {
    /// Site identifier fed into derivation.
    pub platform: String,
    /// Target credential length.
    pub length: u32,
    /// Symbol pool, empty when disabled.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub symbols: String,
}

impl PresetConfig {
    /// Create a preset record.
    pub fn new(platform: impl Into<String>, length: u32, symbols: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            length,
            symbols: symbols.into(),
        }
    }

    /// Whether this preset enables symbol injection.
    #[must_use]
    pub fn symbols_enabled(&self) -> bool {
        !self.symbols.is_empty()
    }
}

/// `"symbols": null` is treated the same as an absent field.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Collection payload returned by the Config Service, keyed by preset name.
pub type PresetMap = BTreeMap<String, PresetConfig>;

// ============ HTTP client options ============

/// Default connect timeout (seconds).
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Options for [`HttpConfigService`](crate::HttpConfigService).
///
/// # Default
///
/// Connect timeout of 10 seconds, no overall request timeout, no auth token.
#[derive(Debug, Clone)]
pub struct HttpClientOptions {
    /// TCP/TLS connect timeout.
    pub connect_timeout: Duration,
    /// Overall request timeout. `None` lets a stalled request wait indefinitely.
    pub request_timeout: Option<Duration>,
    /// Token sent in the `auth_token` header on every request.
    pub auth_token: Option<String>,
}

impl Default for HttpClientOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: None,
            auth_token: None,
        }
    }
}
