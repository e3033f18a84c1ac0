//! # Identity Errors
//!
//! Error types for key parsing, signature decoding, and verification.

use thiserror::Error;

/// Terminal validation failures of the external public-key encoding.
///
/// All of these are detected before any cryptographic work begins and never
/// escape as panics.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyFormatError {
    /// The string contains characters outside `[0-9a-fA-F]`.
    #[error("public key is not valid hex")]
    NotHex,

    /// The string does not encode exactly 65 bytes.
    #[error("public key must be {expected} hex characters, got {actual}")]
    WrongLength { expected: usize, actual: usize },

    /// The decoded point does not start with the `0x04` uncompressed prefix.
    #[error("public key is not an uncompressed point (prefix byte {0:#04x})")]
    NotUncompressedPoint(u8),
}

/// Malformed external signature encoding.
///
/// The codec itself cannot fail semantically (a 64-byte input is re-encoded,
/// anything else passes through), so this only covers the hex layer at the
/// request boundary. Malformed DER surfaces as a verification failure
/// downstream, not here.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureFormatError {
    /// The signature string contains characters outside `[0-9a-fA-F]`.
    #[error("signature is not valid hex")]
    NotHex,
}

/// Verification failures, split so callers can tell malformed input apart
/// from a cryptographically wrong signature.
///
/// The external contract stays the same either way: every variant is an
/// authentication failure. The split exists for diagnostics and tests.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VerifyError {
    /// The public key failed shape validation before any curve work.
    #[error("malformed public key: {0}")]
    MalformedKey(#[from] KeyFormatError),

    /// The key decoded cleanly but the curve rejected it (point not on
    /// P-256, point at infinity, etc.).
    #[error("public key rejected by the curve")]
    KeyRejected,

    /// The signature bytes are not a parseable SEQUENCE(INTEGER, INTEGER).
    #[error("malformed signature encoding")]
    MalformedSignature,

    /// Well-formed inputs, but the signature does not verify over the
    /// message with this key.
    #[error("signature does not verify")]
    Invalid,
}
