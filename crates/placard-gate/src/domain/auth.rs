//! # Authentication Gate
//!
//! Reconstructs the canonical signed message for each request kind and
//! enforces the timestamp acceptance window.
//!
//! The request never declares what it signed. The server rebuilds the
//! message from the submitted semantic fields plus the timestamp, so the
//! signature can only ever attest to exactly those fields. The pipe
//! delimiter is not escaped: an embedded `|` shifts field boundaries the
//! same way on both sides of the wire, and equality is tested on the exact
//! joined string.

use super::config::GateConfig;
use super::errors::AuthError;
use shared_types::{ThreadId, TimestampMs};

/// Outcome of a successful authentication: the identity (lowercased public
/// key hex) and the request timestamp travel onward to the abuse guard and
/// storage; everything else about the request is already consumed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Authenticated {
    /// Lowercased 130-char public key hex; the identity key for abuse maps.
    pub identity: String,
    /// Short display handle derived from the key.
    pub handle: String,
    /// Client-supplied timestamp, already window-checked.
    pub timestamp: TimestampMs,
}

/// Canonical message for a new top-level thread:
/// `"{title}|{content}|{timestamp}"`.
pub fn canonical_thread_message(title: &str, content: &str, timestamp: TimestampMs) -> String {
    format!("{title}|{content}|{timestamp}")
}

/// Canonical message for a reply: `"{content}|{parent_id}|{timestamp}"`.
///
/// `parent_id` renders in its canonical hyphenated lowercase form; clients
/// sign the same rendering.
pub fn canonical_reply_message(
    content: &str,
    parent_id: &ThreadId,
    timestamp: TimestampMs,
) -> String {
    format!("{content}|{parent_id}|{timestamp}")
}

/// Enforce the timestamp acceptance window.
///
/// A request exactly `max_age_ms` old passes; one millisecond older fails.
/// Same at the future edge: exactly `clock_skew_ms` ahead passes, one more
/// fails. Stale requests are the replay concern; future-dated ones are
/// clock abuse.
pub fn check_timestamp(
    timestamp: TimestampMs,
    now: TimestampMs,
    config: &GateConfig,
) -> Result<(), AuthError> {
    let age_ms = now.saturating_sub(timestamp);
    if age_ms > config.max_age_ms {
        return Err(AuthError::StaleTimestamp {
            age_ms,
            max_age_ms: config.max_age_ms,
        });
    }

    if timestamp > now.saturating_add(config.clock_skew_ms) {
        return Err(AuthError::FutureTimestamp {
            ahead_ms: timestamp - now,
            clock_skew_ms: config.clock_skew_ms,
        });
    }

    Ok(())
}
