//! # Abuse Guard
//!
//! Stateful per-identity abuse controls, applied after authentication:
//! a sliding-window rate limiter and a duplicate-content suppressor. The
//! two checks are independent; either one failing blocks the request.
//!
//! State is process-lifetime memory only. A restart clears all history,
//! which is the documented tradeoff, not a bug.

use dashmap::DashMap;
use sha2::{Digest, Sha256};
use shared_types::TimestampMs;
use std::collections::HashMap;
use tracing::{debug, warn};

/// SHA-256 digest of a piece of semantic content.
pub type ContentDigest = [u8; 32];

/// Digest the semantic content of a submission: title + content for
/// threads, content alone for replies. Parts are fed in order into one
/// hash.
pub fn content_digest(parts: &[&str]) -> ContentDigest {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part.as_bytes());
    }
    hasher.finalize().into()
}

/// Per-identity abuse-control state.
///
/// Identities are keyed by their lowercased public key hex. Instants older
/// than the relevant window are pruned lazily on each check; once the
/// number of tracked identities in a map exceeds the high-water mark,
/// identities with no activity inside the triggering window are collected
/// to bound memory.
pub struct AbuseGuard {
    /// Per-identity instants of accepted requests.
    requests: DashMap<String, Vec<TimestampMs>>,
    /// Per-identity content digest -> last-seen instant.
    fingerprints: DashMap<String, HashMap<ContentDigest, TimestampMs>>,
    high_water_mark: usize,
}

impl AbuseGuard {
    /// Create a guard with the given tracked-identity high-water mark.
    pub fn new(high_water_mark: usize) -> Self {
        Self {
            requests: DashMap::new(),
            fingerprints: DashMap::new(),
            high_water_mark,
        }
    }

    /// Rate check: allow iff fewer than `max_requests` accepted instants
    /// remain within `window_ms` of `now`; on allow, `now` is recorded.
    pub fn allow(
        &self,
        identity: &str,
        now: TimestampMs,
        window_ms: u64,
        max_requests: usize,
    ) -> bool {
        let allowed = {
            let mut instants = self.requests.entry(identity.to_string()).or_default();
            instants.retain(|&t| now.saturating_sub(t) < window_ms);

            if instants.len() >= max_requests {
                let handle = &identity[..identity.len().min(8)];
                warn!(
                    identity = %handle,
                    recent = instants.len(),
                    max_requests,
                    window_ms,
                    "rate limit exceeded"
                );
                false
            } else {
                instants.push(now);
                true
            }
        };

        self.collect_idle(now, window_ms);
        allowed
    }

    /// Duplicate check: allow iff no identical digest from this identity
    /// was recorded within `window_ms` of `now`; on allow, the digest is
    /// recorded.
    pub fn allow_content(
        &self,
        identity: &str,
        digest: ContentDigest,
        now: TimestampMs,
        window_ms: u64,
    ) -> bool {
        let allowed = {
            let mut seen = self.fingerprints.entry(identity.to_string()).or_default();
            seen.retain(|_, &mut last| now.saturating_sub(last) < window_ms);

            if seen.contains_key(&digest) {
                let handle = &identity[..identity.len().min(8)];
                warn!(identity = %handle, window_ms, "duplicate content suppressed");
                false
            } else {
                seen.insert(digest, now);
                true
            }
        };

        self.collect_idle(now, window_ms);
        allowed
    }

    /// Collect idle identities once either map crosses the high-water
    /// mark. An identity survives only if it has activity inside the
    /// window that triggered the collection.
    fn collect_idle(&self, now: TimestampMs, window_ms: u64) {
        if self.requests.len() > self.high_water_mark {
            let before = self.requests.len();
            self.requests.retain(|_, instants| {
                instants.retain(|&t| now.saturating_sub(t) < window_ms);
                !instants.is_empty()
            });
            debug!(
                removed = before - self.requests.len(),
                remaining = self.requests.len(),
                "collected idle rate-window identities"
            );
        }

        if self.fingerprints.len() > self.high_water_mark {
            let before = self.fingerprints.len();
            self.fingerprints.retain(|_, seen| {
                seen.retain(|_, &mut last| now.saturating_sub(last) < window_ms);
                !seen.is_empty()
            });
            debug!(
                removed = before - self.fingerprints.len(),
                remaining = self.fingerprints.len(),
                "collected idle fingerprint identities"
            );
        }
    }

    /// Number of identities currently tracked by the rate limiter.
    pub fn tracked_rate_identities(&self) -> usize {
        self.requests.len()
    }

    /// Number of identities currently tracked by the duplicate suppressor.
    pub fn tracked_fingerprint_identities(&self) -> usize {
        self.fingerprints.len()
    }
}
