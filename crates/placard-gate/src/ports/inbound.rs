//! # Inbound Ports (Driving Ports / API)
//!
//! The admission API consumed by the request-handling layer.

use crate::domain::auth::Authenticated;
use crate::domain::errors::AdmissionError;
use shared_types::{ReplySubmission, ThreadSubmission, TimestampMs};

/// Primary admission API.
///
/// A successful call means the request was authenticated and cleared both
/// abuse checks; the returned [`Authenticated`] carries the identity and
/// timestamp forward to storage. Rejections are terminal and side-effect
/// free with respect to stored content.
pub trait AdmissionApi: Send + Sync {
    /// Admit a thread-creation request observed at instant `now`.
    fn admit_thread(
        &self,
        submission: &ThreadSubmission,
        now: TimestampMs,
    ) -> Result<Authenticated, AdmissionError>;

    /// Admit a reply request observed at instant `now`.
    ///
    /// Parent existence is storage's concern; this gate only authenticates
    /// and applies abuse policy.
    fn admit_reply(
        &self,
        submission: &ReplySubmission,
        now: TimestampMs,
    ) -> Result<Authenticated, AdmissionError>;
}
