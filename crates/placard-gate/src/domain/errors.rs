//! # Admission Errors
//!
//! The full rejection taxonomy a write request can hit, with the HTTP-level
//! status each maps to at the API boundary.

use placard_identity::{KeyFormatError, SignatureFormatError, VerifyError};
use shared_types::EndpointClass;
use thiserror::Error;

/// Authentication-stage rejections, carried as reason codes.
///
/// Every variant is terminal: once a request is rejected here, no further
/// processing occurs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Request timestamp is older than the acceptance window allows.
    #[error("timestamp {age_ms} ms old exceeds the {max_age_ms} ms window")]
    StaleTimestamp { age_ms: u64, max_age_ms: u64 },

    /// Request timestamp is further in the future than tolerated skew.
    #[error("timestamp {ahead_ms} ms ahead exceeds the {clock_skew_ms} ms skew allowance")]
    FutureTimestamp { ahead_ms: u64, clock_skew_ms: u64 },

    /// The signature did not verify over the reconstructed message.
    #[error("signature rejected: {0}")]
    Signature(VerifyError),
}

/// Everything the admission pipeline can reject a request with.
///
/// All variants are detected before any side effect and returned to the
/// caller immediately; none are retried automatically.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdmissionError {
    /// The public key failed shape validation.
    #[error("malformed public key: {0}")]
    KeyFormat(#[from] KeyFormatError),

    /// The signature hex could not be decoded.
    #[error("malformed signature: {0}")]
    SignatureFormat(#[from] SignatureFormatError),

    /// Timestamp window or signature verification failed.
    #[error("authentication failed: {0}")]
    Authentication(#[from] AuthError),

    /// The identity exceeded its rate window for this endpoint class.
    #[error("rate limit exceeded for {class:?} requests")]
    RateLimited { class: EndpointClass },

    /// The identity re-posted identical content within the suppression
    /// window.
    #[error("duplicate content within the suppression window")]
    DuplicateContent,

    /// The reply references a thread that does not exist (or has already
    /// been swept).
    #[error("parent thread not found")]
    ParentNotFound,

    /// Unexpected storage or codec failure. Surfaced to callers as a
    /// generic failure; details go to the log, never to the response.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AdmissionError {
    /// HTTP status surfaced at the API boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            AdmissionError::KeyFormat(_) | AdmissionError::SignatureFormat(_) => 400,
            AdmissionError::Authentication(_) => 401,
            AdmissionError::RateLimited { .. } | AdmissionError::DuplicateContent => 429,
            AdmissionError::ParentNotFound => 404,
            AdmissionError::Internal(_) => 500,
        }
    }
}
