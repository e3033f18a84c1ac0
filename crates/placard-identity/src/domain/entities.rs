//! # Domain Entities
//!
//! Core data structures for identity verification.

use serde::{Deserialize, Serialize};

/// Length of an uncompressed SEC1 point: `0x04 || X || Y`.
pub const UNCOMPRESSED_POINT_LEN: usize = 65;

/// Length of the external hex encoding of a public key.
pub const PUBLIC_KEY_HEX_LEN: usize = 2 * UNCOMPRESSED_POINT_LEN;

/// Leading byte of an uncompressed SEC1 point.
pub const UNCOMPRESSED_POINT_PREFIX: u8 = 0x04;

/// Length of a fixed-width `r || s` ECDSA signature (32 bytes each component).
pub const FIXED_WIDTH_SIGNATURE_LEN: usize = 64;

/// A validated P-256 public key.
///
/// Construction goes through [`crate::domain::key::parse_public_key_hex`],
/// so any instance is already known to be 65 decoded bytes with the `0x04`
/// prefix. Whether the coordinates lie on the curve is decided later, by the
/// verifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    /// X coordinate, 32-byte unsigned big-endian.
    pub x: [u8; 32],
    /// Y coordinate, 32-byte unsigned big-endian.
    pub y: [u8; 32],
}

impl PublicKey {
    /// The uncompressed SEC1 encoding `0x04 || X || Y`.
    pub fn to_uncompressed_bytes(&self) -> [u8; UNCOMPRESSED_POINT_LEN] {
        let mut out = [0u8; UNCOMPRESSED_POINT_LEN];
        out[0] = UNCOMPRESSED_POINT_PREFIX;
        out[1..33].copy_from_slice(&self.x);
        out[33..].copy_from_slice(&self.y);
        out
    }
}
