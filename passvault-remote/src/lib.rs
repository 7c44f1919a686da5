//! # passvault-remote
//!
//! The Config Service contract for PassVault site presets and its HTTP client.
//!
//! A preset is a named bundle of derivation parameters (platform, length,
//! symbol pool). The Config Service is the remote authority holding them; this
//! crate defines the contract as the [`ConfigService`] trait and implements it
//! over HTTP in [`HttpConfigService`].
//!
//! ## Wire Contract
//!
//! | Operation | Request | Success |
//! |-----------|---------|---------|
//! | Read collection | `GET {endpoint}` | JSON object `name -> PresetConfig` |
//! | Upsert one | `PUT {endpoint}/{name}` with JSON `PresetConfig` | any 2xx |
//! | Delete one | `DELETE {endpoint}/{name}` | any 2xx |
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: Use rustls.
//! - **`native-tls`**: Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use passvault_remote::{ConfigService, HttpClientOptions, HttpConfigService, PresetConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = HttpConfigService::new(
//!         "https://vault.example/vault/api/key_configs",
//!         HttpClientOptions::default(),
//!     )?;
//!
//!     service
//!         .upsert("Gmail_1", &PresetConfig::new("google.com", 16, "!@#%_-+"))
//!         .await?;
//!
//!     for (name, preset) in service.fetch_all().await? {
//!         println!("{name}: {} ({} chars)", preset.platform, preset.length);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, RemoteError>`](RemoteError):
//!
//! - [`RemoteError::NetworkError`] / [`RemoteError::Timeout`]: no HTTP response
//! - [`RemoteError::Rejected`]: the service answered with a non-2xx status
//! - [`RemoteError::ParseError`]: the collection payload is malformed
//!
//! Nothing is retried: every call is exactly one attempt.

mod error;
mod http_client;
mod http_service;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{RemoteError, Result};

// Re-export the contract
pub use traits::ConfigService;

// Re-export the HTTP implementation
pub use http_service::HttpConfigService;

// Re-export types
pub use types::{DEFAULT_CONNECT_TIMEOUT_SECS, HttpClientOptions, PresetConfig, PresetMap};

// Re-export utils module
pub use utils::log_sanitizer;
