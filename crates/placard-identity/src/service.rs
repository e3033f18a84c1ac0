//! # Identity Service
//!
//! Application service layer that implements the `IdentityApi` trait by
//! delegating to the pure domain functions. Stateless; the daily address
//! salt is derived from the wall clock at call time.

use crate::domain::errors::VerifyError;
use crate::domain::{handle, verify};
use crate::ports::inbound::IdentityApi;
use chrono::Utc;

/// Identity verification service.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityService;

impl IdentityService {
    /// Create a new identity service.
    pub fn new() -> Self {
        Self
    }
}

impl IdentityApi for IdentityService {
    fn verify_signature(
        &self,
        message: &[u8],
        signature: &[u8],
        key_hex: &str,
    ) -> Result<(), VerifyError> {
        verify::verify(message, signature, key_hex)
    }

    fn display_handle(&self, key_hex: &str) -> String {
        handle::display_handle(key_hex)
    }

    fn anonymize_address(&self, address: &str) -> String {
        handle::anonymize_address(address, Utc::now().date_naive())
    }
}
