//! # ECDSA Verification (P-256)
//!
//! Composes the key and signature codecs into the actual cryptographic
//! check: ECDSA-with-SHA-256 over the raw message bytes.
//!
//! ## Security Notes
//!
//! - Verification never panics. Every internal failure maps to an explicit
//!   [`VerifyError`] variant; [`verify_ok`] folds them all into `false`.
//! - The signature encoding is selected once, by length, in the codec. There
//!   is no trial-and-error between the fixed-width and DER paths.
//! - Uses the p256 crate for curve operations.

use super::der::normalize_signature;
use super::errors::VerifyError;
use super::key::{parse_public_key_hex, subject_public_key_info};
use p256::ecdsa::signature::Verifier;
use p256::ecdsa::{Signature, VerifyingKey};
use p256::pkcs8::DecodePublicKey;

/// Verify `signature` over `message` with the hex-encoded public key.
///
/// `signature` may be either the fixed-width 64-byte `r || s` form or ASN.1
/// DER; both are normalized before the curve sees them. The message is the
/// canonical request string, hashed with SHA-256 as part of verification.
pub fn verify(message: &[u8], signature: &[u8], key_hex: &str) -> Result<(), VerifyError> {
    let key = parse_public_key_hex(key_hex)?;

    let spki = subject_public_key_info(&key);
    let verifying_key =
        VerifyingKey::from_public_key_der(&spki).map_err(|_| VerifyError::KeyRejected)?;

    let der = normalize_signature(signature);
    let sig = Signature::from_der(&der).map_err(|_| VerifyError::MalformedSignature)?;

    verifying_key
        .verify(message, &sig)
        .map_err(|_| VerifyError::Invalid)
}

/// Boolean convenience wrapper: any failure, malformed or cryptographic,
/// is a plain `false`. Callers that need the distinction use [`verify`].
pub fn verify_ok(message: &[u8], signature: &[u8], key_hex: &str) -> bool {
    match verify(message, signature, key_hex) {
        Ok(()) => true,
        Err(reason) => {
            tracing::debug!(%reason, "signature verification failed");
            false
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


// =============================================================================
// UNIT TESTS
// =============================================================================
