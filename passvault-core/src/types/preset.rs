use serde::{Deserialize, Serialize};

use crate::crypto::DEFAULT_SYMBOLS;

/// Symbol policy for a derivation.
///
/// `enabled = false` disables symbol injection. When enabled, an empty `pool`
/// falls back to [`DEFAULT_SYMBOLS`] at derivation time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SymbolPolicy {
    pub enabled: bool,
    #[serde(default)]
    pub pool: String,
}

impl SymbolPolicy {
    /// Symbol injection off.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Symbol injection on with the built-in pool.
    pub fn default_pool() -> Self {
        Self {
            enabled: true,
            pool: String::new(),
        }
    }

    /// Symbol injection on with a custom pool.
    pub fn with_pool(pool: impl Into<String>) -> Self {
        Self {
            enabled: true,
            pool: pool.into(),
        }
    }

    /// Pool actually drawn from, `None` when disabled.
    pub fn effective_pool(&self) -> Option<&str> {
        if !self.enabled {
            None
        } else if self.pool.is_empty() {
            Some(DEFAULT_SYMBOLS)
        } else {
            Some(&self.pool)
        }
    }

    /// Read the policy back from a preset's `symbols` field (`""` means disabled).
    pub fn from_preset_symbols(symbols: &str) -> Self {
        if symbols.is_empty() {
            Self::disabled()
        } else {
            Self::with_pool(symbols)
        }
    }

    /// Value to store in a preset's `symbols` field.
    ///
    /// An enabled policy with an empty pool stores the default pool explicitly,
    /// so the preset keeps producing the same credential if the default changes.
    pub fn to_preset_symbols(&self) -> String {
        self.effective_pool().unwrap_or_default().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_policy_stores_empty_string() {
        assert_eq!(SymbolPolicy::disabled().to_preset_symbols(), "");
    }

    #[test]
    fn default_pool_stored_explicitly() {
        assert_eq!(SymbolPolicy::default_pool().to_preset_symbols(), "!@#%_-+");
    }

    #[test]
    fn disabled_policy_ignores_pool() {
        let policy = SymbolPolicy {
            enabled: false,
            pool: "$$".to_string(),
        };
        assert_eq!(policy.effective_pool(), None);
        assert_eq!(policy.to_preset_symbols(), "");
    }

    #[test]
    fn preset_symbols_round_trip() {
        assert_eq!(
            SymbolPolicy::from_preset_symbols(""),
            SymbolPolicy::disabled()
        );
        let policy = SymbolPolicy::from_preset_symbols("$&");
        assert_eq!(policy, SymbolPolicy::with_pool("$&"));
        assert_eq!(policy.to_preset_symbols(), "$&");
    }
}
