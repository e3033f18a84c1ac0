//! Epoch-millisecond timestamps.
//!
//! All request timestamps, abuse windows, and expiry instants in the system
//! are unsigned milliseconds since the Unix epoch, matching what clients
//! submit over the wire.

use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch.
pub type TimestampMs = u64;

/// Milliseconds in one minute, for TTL arithmetic.
pub const MS_PER_MINUTE: u64 = 60_000;

/// Current wall-clock time in epoch milliseconds.
///
/// # Panics
///
/// This function will NOT panic. If the system clock is before UNIX_EPOCH
/// (which should never happen on any sane system), it returns 0.
pub fn now_ms() -> TimestampMs {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
