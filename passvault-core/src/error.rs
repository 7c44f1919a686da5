//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use passvault_remote::RemoteError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Malformed or missing input, caught before any network call
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Mutation attempted while the preset store is offline
    #[error("Offline mode: presets are read-only")]
    ReadOnly,

    /// Preset not found in the local mirror
    #[error("Preset not found: {0}")]
    PresetNotFound(String),

    /// Configuration file could not be read or parsed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Config Service error (converting from library)
    #[error("{0}")]
    Remote(#[from] RemoteError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, offline mode, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::ValidationError(_) | Self::ReadOnly | Self::PresetNotFound(_) => true,
            Self::Remote(e) => e.is_expected(),
            Self::ConfigError(_) => false,
        }
    }

    /// Whether the Config Service answered with a non-success status.
    #[must_use]
    pub fn is_remote_rejection(&self) -> bool {
        matches!(self, Self::Remote(RemoteError::Rejected { .. }))
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
