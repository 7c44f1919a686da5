//! Preset name validation
//!
//! Preset names double as remote resource identifiers, so they are kept to a
//! conservative filename-safe charset: `[A-Za-z0-9_]+`, minus the device names
//! Windows reserves regardless of extension or case.

/// Windows reserved device names (compared case-insensitively).
const RESERVED_NAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Whether `name` is an acceptable preset name.
pub fn is_valid_preset_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    if !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        return false;
    }
    !RESERVED_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(name))
}
