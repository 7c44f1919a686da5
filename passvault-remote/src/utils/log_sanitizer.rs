//! Log sanitization utilities
//!
//! Config Service error bodies can be arbitrarily large and multi-line (HTML
//! error pages from a reverse proxy, stack traces). They are folded onto one
//! line and only a bounded prefix ever reaches the log.

/// Maximum number of characters of a body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Fold a response body into a single bounded log line.
///
/// Runs of whitespace (including newlines) collapse to one space. Results
/// longer than `TRUNCATE_LIMIT` characters keep that many characters plus the
/// original body size in bytes.
pub fn truncate_for_log(s: &str) -> String {
    let mut folded = String::with_capacity(s.len().min(TRUNCATE_LIMIT * 4));
    let mut kept = 0usize;
    for word in s.split_whitespace() {
        if kept > 0 {
            if kept == TRUNCATE_LIMIT {
                return truncated(folded, s.len());
            }
            folded.push(' ');
            kept += 1;
        }
        for c in word.chars() {
            if kept == TRUNCATE_LIMIT {
                return truncated(folded, s.len());
            }
            folded.push(c);
            kept += 1;
        }
    }
    folded
}

fn truncated(prefix: String, total_bytes: usize) -> String {
    format!("{prefix}... [truncated, total {total_bytes} bytes]")
}
