//! PassVault Core Library
//!
//! Platform-independent logic for PassVault:
//! - Deterministic credential derivation (`crypto`)
//! - Preset name validation (`validation`)
//! - The preset store kept in sync with a Config Service (`services::AliasStore`)
//!
//! The Config Service itself is abstracted behind
//! [`passvault_remote::ConfigService`], so hosts can plug in the HTTP client
//! or any other implementation.

pub mod crypto;
pub mod error;
pub mod services;
pub mod types;
pub mod validation;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use crypto::derive;
pub use error::{CoreError, CoreResult};
pub use passvault_remote::ConfigService;
pub use services::{AliasStore, DEFAULT_LOAD_TIMEOUT};
pub use validation::is_valid_preset_name;
