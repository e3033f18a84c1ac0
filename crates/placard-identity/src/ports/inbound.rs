//! # Inbound Ports (Driving Ports / API)
//!
//! Traits that define the public API of this subsystem.

use crate::domain::errors::VerifyError;

/// Primary identity API consumed by the admission gate.
///
/// Implementations must be thread-safe (`Send + Sync`). The gate depends on
/// this trait rather than the concrete service so tests can substitute an
/// always-accepting or always-rejecting verifier.
pub trait IdentityApi: Send + Sync {
    /// Verify a signature over the canonical request message.
    ///
    /// `signature` is either the fixed-width 64-byte `r || s` form or ASN.1
    /// DER; `key_hex` is the 130-char external key encoding.
    fn verify_signature(
        &self,
        message: &[u8],
        signature: &[u8],
        key_hex: &str,
    ) -> Result<(), VerifyError>;

    /// Short display handle for a public key.
    fn display_handle(&self, key_hex: &str) -> String;

    /// Log-safe digest for a raw network address, salted for today.
    fn anonymize_address(&self, address: &str) -> String;
}
