//! # Expiry Computation
//!
//! The expiry instant is computed exactly once, at creation. Content with
//! no TTL never expires and is never touched by the sweep.

use super::errors::LifecycleError;
use shared_types::time::MS_PER_MINUTE;
use shared_types::TimestampMs;

/// TTL choices the presentation layer offers, in minutes: 1 hour, 6 hours,
/// 12 hours, 1 day, 3 days, 7 days. The core accepts any positive integer;
/// this list is advisory.
pub const TTL_CHOICES_MINUTES: [i64; 6] = [60, 360, 720, 1440, 4320, 10080];

/// Compute the absolute expiry instant for content created at `created_at`.
///
/// Absent or zero `ttl_minutes` means the content never expires. Negative
/// values (and values that would overflow the millisecond clock) are a
/// validation error. When present, `expiry > created_at` always holds.
pub fn compute_expiry(
    created_at: TimestampMs,
    ttl_minutes: Option<i64>,
) -> Result<Option<TimestampMs>, LifecycleError> {
    let minutes = match ttl_minutes {
        None | Some(0) => return Ok(None),
        Some(m) if m < 0 => return Err(LifecycleError::InvalidTtl(m)),
        Some(m) => m,
    };

    (minutes as u64)
        .checked_mul(MS_PER_MINUTE)
        .and_then(|ttl_ms| created_at.checked_add(ttl_ms))
        .map(Some)
        .ok_or(LifecycleError::InvalidTtl(minutes))
}
