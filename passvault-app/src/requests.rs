//! Command request and response types.

use passvault_core::crypto::DEFAULT_LENGTH;
use passvault_core::types::{MasterSecret, PresetConfig, SymbolPolicy};
use serde::{Deserialize, Serialize};

/// Input of a single derivation.
#[derive(Debug)]
pub struct DeriveRequest {
    pub secret: MasterSecret,
    /// Site identifier, trimmed before use.
    pub site: String,
    pub length: u32,
    pub symbols: SymbolPolicy,
}

/// Create-or-update request for a named preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavePresetRequest {
    pub name: String,
    pub platform: String,
    pub length: u32,
    pub symbols: SymbolPolicy,
}

impl SavePresetRequest {
    /// Stored form: trimmed platform, policy converted to the `symbols` field.
    pub(crate) fn to_preset(&self) -> PresetConfig {
        PresetConfig::new(
            self.platform.trim(),
            self.length,
            self.symbols.to_preset_symbols(),
        )
    }
}

/// Field values to pre-fill when a preset name is entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetForm {
    /// Empty when no preset is selected.
    pub platform: String,
    pub length: u32,
    pub symbols: SymbolPolicy,
}

impl PresetForm {
    /// Blank form: default length, symbols on with the built-in pool.
    pub fn defaults() -> Self {
        Self {
            platform: String::new(),
            length: DEFAULT_LENGTH,
            symbols: SymbolPolicy::default_pool(),
        }
    }

    pub fn from_preset(preset: &PresetConfig) -> Self {
        Self {
            platform: preset.platform.clone(),
            length: preset.length,
            symbols: SymbolPolicy::from_preset_symbols(&preset.symbols),
        }
    }
}

/// One row of the preset listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetSummary {
    pub name: String,
    pub platform: String,
}
