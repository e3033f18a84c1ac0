//! # Gate Service
//!
//! Application service that implements [`AdmissionApi`]: key-shape
//! validation, canonical-message reconstruction, the timestamp window,
//! signature verification, then the abuse guard, in that order. The first
//! failing stage rejects the request and nothing later runs.

use crate::domain::auth::{
    canonical_reply_message, canonical_thread_message, check_timestamp, Authenticated,
};
use crate::domain::config::AdmissionConfig;
use crate::domain::errors::{AdmissionError, AuthError};
use crate::domain::guard::{content_digest, AbuseGuard, ContentDigest};
use crate::ports::inbound::AdmissionApi;
use placard_identity::{parse_public_key_hex, IdentityApi, SignatureFormatError};
use shared_types::{EndpointClass, ReplySubmission, ThreadSubmission, TimestampMs};
use tracing::debug;

/// Request admission service.
///
/// Generic over the identity port so tests can substitute a stub verifier;
/// production wiring passes `placard_identity::IdentityService`.
pub struct GateService<I: IdentityApi> {
    identity: I,
    /// One guard per endpoint class: the classes have independent windows,
    /// so their instants must not share state.
    thread_guard: AbuseGuard,
    reply_guard: AbuseGuard,
    config: AdmissionConfig,
}

impl<I: IdentityApi> GateService<I> {
    /// Create a gate service over an identity port.
    pub fn new(identity: I, config: AdmissionConfig) -> Self {
        let thread_guard = AbuseGuard::new(config.guard.high_water_mark);
        let reply_guard = AbuseGuard::new(config.guard.high_water_mark);
        Self {
            identity,
            thread_guard,
            reply_guard,
            config,
        }
    }

    /// Shared admission pipeline for both endpoint classes.
    fn admit(
        &self,
        class: EndpointClass,
        public_key: &str,
        signature_hex: &str,
        message: &str,
        digest: ContentDigest,
        timestamp: TimestampMs,
        now: TimestampMs,
    ) -> Result<Authenticated, AdmissionError> {
        // Key shape first; nothing cryptographic runs on a rejected key.
        parse_public_key_hex(public_key)?;

        let signature =
            hex::decode(signature_hex).map_err(|_| SignatureFormatError::NotHex)?;

        check_timestamp(timestamp, now, &self.config.gate)?;

        self.identity
            .verify_signature(message.as_bytes(), &signature, public_key)
            .map_err(|e| AdmissionError::Authentication(AuthError::Signature(e)))?;

        // Abuse checks only after the request is proven authentic, so an
        // attacker cannot burn a victim's budget with forged requests.
        let identity_key = public_key.to_ascii_lowercase();
        let limits = self.config.guard.limits(class);
        let guard = self.guard(class);

        if !guard.allow(&identity_key, now, limits.window_ms, limits.max_requests) {
            return Err(AdmissionError::RateLimited { class });
        }

        if !guard.allow_content(&identity_key, digest, now, limits.duplicate_window_ms) {
            return Err(AdmissionError::DuplicateContent);
        }

        let handle = self.identity.display_handle(&identity_key);
        debug!(identity = %handle, ?class, "request admitted");

        Ok(Authenticated {
            identity: identity_key,
            handle,
            timestamp,
        })
    }

    /// The abuse guard for an endpoint class, also used for runtime
    /// introspection.
    pub fn guard(&self, class: EndpointClass) -> &AbuseGuard {
        match class {
            EndpointClass::Thread => &self.thread_guard,
            EndpointClass::Reply => &self.reply_guard,
        }
    }
}

impl<I: IdentityApi> AdmissionApi for GateService<I> {
    fn admit_thread(
        &self,
        submission: &ThreadSubmission,
        now: TimestampMs,
    ) -> Result<Authenticated, AdmissionError> {
        let message = canonical_thread_message(
            &submission.title,
            &submission.content,
            submission.timestamp,
        );
        let digest = content_digest(&[&submission.title, &submission.content]);
        self.admit(
            EndpointClass::Thread,
            &submission.public_key,
            &submission.signature,
            &message,
            digest,
            submission.timestamp,
            now,
        )
    }

    fn admit_reply(
        &self,
        submission: &ReplySubmission,
        now: TimestampMs,
    ) -> Result<Authenticated, AdmissionError> {
        let message = canonical_reply_message(
            &submission.content,
            &submission.parent_id,
            submission.timestamp,
        );
        let digest = content_digest(&[&submission.content]);
        self.admit(
            EndpointClass::Reply,
            &submission.public_key,
            &submission.signature,
            &message,
            digest,
            submission.timestamp,
            now,
        )
    }
}
