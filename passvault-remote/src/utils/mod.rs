//! Utility modules.

/// Log sanitization utilities to keep response bodies short in logs.
pub mod log_sanitizer;
