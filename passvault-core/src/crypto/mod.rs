//! Credential derivation
//!
//! Deterministic site credentials from a master secret:
//!
//! 1. `D = HMAC-SHA256(key = secret, message = UTF-8(site))`, 32 bytes
//! 2. `C[i] = BASE62[D[i] mod 62]`, 32 characters
//! 3. `C[0]` upper-case, `C[1]` lower-case, `C[2]` digit, all picked from `D[0..3]`
//! 4. with symbols enabled and `length >= 4`, `C[3] = pool[D[3] mod |pool|]`
//! 5. the first `length` characters of `C`
//!
//! The scheme is frozen: changing any constant here changes every credential
//! ever derived.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use zeroize::Zeroize;

use crate::error::{CoreError, CoreResult};
use crate::types::{DerivedCredential, MasterSecret, SymbolPolicy};

type HmacSha256 = Hmac<Sha256>;

/// Digits, then upper-case, then lower-case.
const BASE62: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8; 10] = b"0123456789";

/// Symbol pool used when symbols are enabled without a custom pool.
pub const DEFAULT_SYMBOLS: &str = "!@#%_-+";

/// Digest size of HMAC-SHA256 (bytes); also the longest derivable credential.
pub const DIGEST_LENGTH: usize = 32;
/// Shortest derivable credential.
pub const MIN_LENGTH: u32 = 1;
/// Longest derivable credential.
pub const MAX_LENGTH: u32 = 32;
/// Length used when the caller does not choose one.
pub const DEFAULT_LENGTH: u32 = 16;

/// Index of the forced symbol.
const SYMBOL_POSITION: usize = 3;

/// Reject lengths the digest cannot supply.
pub fn validate_length(length: u32) -> CoreResult<()> {
    if (MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        Ok(())
    } else {
        Err(CoreError::ValidationError(format!(
            "Length must be between {MIN_LENGTH} and {MAX_LENGTH}, got {length}"
        )))
    }
}

/// HMAC-SHA256 of `site` keyed with `secret`.
pub fn site_digest(secret: &[u8], site: &str) -> CoreResult<[u8; DIGEST_LENGTH]> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|e| CoreError::ValidationError(format!("Invalid key material: {e}")))?;
    mac.update(site.as_bytes());
    let mut digest = [0u8; DIGEST_LENGTH];
    digest.copy_from_slice(&mac.finalize().into_bytes());
    Ok(digest)
}

/// Derive the credential for `site`.
///
/// Deterministic: the same secret, site, length and policy always produce the
/// same credential. Empty secrets and empty sites are valid inputs.
///
/// # Errors
/// `CoreError::ValidationError` when `length` is outside `1..=32`.
pub fn derive(
    secret: &MasterSecret,
    site: &str,
    length: u32,
    policy: &SymbolPolicy,
) -> CoreResult<DerivedCredential> {
    validate_length(length)?;

    let mut digest = site_digest(secret.as_bytes(), site)?;
    let mut chars = candidate_chars(&digest);

    if length > 3 {
        if let Some(pool) = policy.effective_pool() {
            let mut pool: Vec<char> = pool.chars().collect();
            if !pool.is_empty() {
                chars[SYMBOL_POSITION] =
                    pool[usize::from(digest[SYMBOL_POSITION]) % pool.len()];
            }
            pool.zeroize();
        }
    }

    let credential: String = chars.iter().take(length as usize).collect();
    digest.zeroize();
    chars.zeroize();
    Ok(DerivedCredential::new(credential))
}

/// Base62 mapping with the composition positions forced.
fn candidate_chars(digest: &[u8; DIGEST_LENGTH]) -> Vec<char> {
    let mut chars: Vec<char> = digest
        .iter()
        .map(|b| char::from(BASE62[usize::from(*b) % BASE62.len()]))
        .collect();
    chars[0] = char::from(UPPERCASE[usize::from(digest[0]) % UPPERCASE.len()]);
    chars[1] = char::from(LOWERCASE[usize::from(digest[1]) % LOWERCASE.len()]);
    chars[2] = char::from(DIGITS[usize::from(digest[2]) % DIGITS.len()]);
    chars
}
