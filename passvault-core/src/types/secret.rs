//! Secret-bearing values.
//!
//! Neither type implements `Serialize` or `Display`, and both redact themselves
//! in `Debug` output, so they cannot end up in a log line or a config file by
//! accident. Their buffers are wiped on drop.

use std::fmt;

use zeroize::Zeroize;

/// Master secret supplied by the user for one derivation.
pub struct MasterSecret {
    value: String,
}

impl MasterSecret {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Raw key material for the MAC.
    pub fn as_bytes(&self) -> &[u8] {
        self.value.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl From<String> for MasterSecret {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for MasterSecret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Drop for MasterSecret {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

impl fmt::Debug for MasterSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MasterSecret([REDACTED])")
    }
}

/// Credential produced by one derivation call.
///
/// The characters are only reachable through [`DerivedCredential::expose`].
pub struct DerivedCredential {
    value: String,
}

impl DerivedCredential {
    pub(crate) fn new(value: String) -> Self {
        Self { value }
    }

    /// The credential text.
    pub fn expose(&self) -> &str {
        &self.value
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl Drop for DerivedCredential {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

impl fmt::Debug for DerivedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DerivedCredential([REDACTED; {}])", self.len())
    }
}

impl PartialEq for DerivedCredential {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for DerivedCredential {}
