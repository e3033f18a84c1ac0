//! # Anonymized Identity
//!
//! Derives the short display handle shown next to posts and the log-safe
//! digest used wherever a raw network address would otherwise be written.

use chrono::NaiveDate;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Length of the display handle, in hex characters.
pub const HANDLE_LEN: usize = 8;

/// Length of the truncated address digest, in hex characters.
pub const ADDRESS_DIGEST_LEN: usize = 16;

/// In-repo salt prefix for address hashing. Combined with the UTC calendar
/// date, so digests are stable within a day and unlinkable across days.
const ADDRESS_SALT_PREFIX: &str = "placard-address-v1";

/// Stable per-session display handle for a public key: its first 8 hex
/// characters, lowercased. Deliberately not hashed; the full key is public
/// anyway and the handle only needs to be recognizable, not hiding.
pub fn display_handle(key_hex: &str) -> String {
    key_hex
        .chars()
        .take(HANDLE_LEN)
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Log-safe digest of a raw network address for a given calendar date.
///
/// HMAC-SHA-256 keyed by the date-rotated salt, truncated for display.
/// One-way without the salt; the daily rotation makes entries from different
/// days unlinkable.
pub fn anonymize_address(address: &str, date: NaiveDate) -> String {
    let salt = format!("{ADDRESS_SALT_PREFIX}:{}", date.format("%Y-%m-%d"));
    let mut mac =
        HmacSha256::new_from_slice(salt.as_bytes()).expect("HMAC can take key of any size");
    mac.update(address.as_bytes());
    let digest = hex::encode(mac.finalize().into_bytes());
    digest[..ADDRESS_DIGEST_LEN].to_string()
}
