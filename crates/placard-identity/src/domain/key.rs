//! # Key Codec
//!
//! Parses and validates the external public-key encoding and builds the
//! canonical DER key structure the verifier consumes.
//!
//! The external form is 130 hex characters decoding to an uncompressed SEC1
//! point (`0x04 || X || Y`). Everything here is a pure function.

use super::entities::{
    PublicKey, PUBLIC_KEY_HEX_LEN, UNCOMPRESSED_POINT_LEN, UNCOMPRESSED_POINT_PREFIX,
};
use super::errors::KeyFormatError;

/// DER prefix of a SubjectPublicKeyInfo wrapping an uncompressed P-256 point:
///
/// ```text
/// SEQUENCE (89 bytes)
///   SEQUENCE (19 bytes)
///     OID 1.2.840.10045.2.1   (id-ecPublicKey)
///     OID 1.2.840.10045.3.1.7 (prime256v1)
///   BIT STRING (66 bytes, 0 unused bits)
/// ```
///
/// The 65 point bytes follow this prefix verbatim.
const SPKI_PREFIX: [u8; 26] = [
    0x30, 0x59, // SEQUENCE, 89 bytes
    0x30, 0x13, // SEQUENCE, 19 bytes (AlgorithmIdentifier)
    0x06, 0x07, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x02, 0x01, // OID id-ecPublicKey
    0x06, 0x08, 0x2a, 0x86, 0x48, 0xce, 0x3d, 0x03, 0x01, 0x07, // OID prime256v1
    0x03, 0x42, 0x00, // BIT STRING, 66 bytes, no unused bits
];

/// Validate the external hex encoding of a public key.
///
/// Checks, in order: exact length (130 hex chars), hex charset, and the
/// `0x04` uncompressed-point prefix. Each failure is a distinct terminal
/// error; none of them involve cryptographic work.
pub fn parse_public_key_hex(key_hex: &str) -> Result<PublicKey, KeyFormatError> {
    if key_hex.len() != PUBLIC_KEY_HEX_LEN {
        return Err(KeyFormatError::WrongLength {
            expected: PUBLIC_KEY_HEX_LEN,
            actual: key_hex.len(),
        });
    }

    let bytes = hex::decode(key_hex).map_err(|_| KeyFormatError::NotHex)?;
    debug_assert_eq!(bytes.len(), UNCOMPRESSED_POINT_LEN);

    if bytes[0] != UNCOMPRESSED_POINT_PREFIX {
        return Err(KeyFormatError::NotUncompressedPoint(bytes[0]));
    }

    let mut x = [0u8; 32];
    let mut y = [0u8; 32];
    x.copy_from_slice(&bytes[1..33]);
    y.copy_from_slice(&bytes[33..]);
    Ok(PublicKey { x, y })
}

/// Build the DER SubjectPublicKeyInfo for a validated key.
///
/// The result is the fixed 26-byte template followed by the uncompressed
/// point, which is exactly what the verifier imports.
pub fn subject_public_key_info(key: &PublicKey) -> Vec<u8> {
    let mut out = Vec::with_capacity(SPKI_PREFIX.len() + UNCOMPRESSED_POINT_LEN);
    out.extend_from_slice(&SPKI_PREFIX);
    out.extend_from_slice(&key.to_uncompressed_bytes());
    out
}
