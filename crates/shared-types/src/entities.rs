//! # Domain Entities
//!
//! Core data structures shared across the admission gate, identity
//! verification, and content lifecycle subsystems.

use crate::time::TimestampMs;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a top-level thread.
pub type ThreadId = Uuid;

/// Identifier of a reply within a thread.
pub type ReplyId = Uuid;

// =============================================================================
// ENDPOINT CLASSES
// =============================================================================

/// Write-endpoint classes with independent abuse-control parameters.
///
/// Thread creation and replies carry different rate and duplicate windows;
/// everything else about admission is identical between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointClass {
    /// Creating a new top-level thread.
    Thread,
    /// Replying to an existing thread.
    Reply,
}

// =============================================================================
// SUBMISSIONS (raw request field sets, pre-authentication)
// =============================================================================

/// Raw fields of a thread-creation request as received at the API boundary.
///
/// `signature` is hex: 128 chars for the fixed-width `r || s` form or variable
/// length for DER. `public_key` is 130 hex chars (`04 || X || Y` uncompressed).
/// Nothing in this struct has been validated yet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadSubmission {
    pub title: String,
    pub content: String,
    /// Client-supplied epoch milliseconds.
    pub timestamp: TimestampMs,
    pub signature: String,
    pub public_key: String,
    /// Minutes until self-destruction; absent or zero means never.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl_minutes: Option<i64>,
}

/// Raw fields of a reply request as received at the API boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplySubmission {
    pub content: String,
    pub parent_id: ThreadId,
    /// Client-supplied epoch milliseconds.
    pub timestamp: TimestampMs,
    pub signature: String,
    pub public_key: String,
}

// =============================================================================
// STORED RECORDS (post-admission, storage collaborator rows)
// =============================================================================

/// A stored top-level thread.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadRecord {
    pub id: ThreadId,
    pub title: String,
    pub content: String,
    /// Short display handle derived from the author's public key.
    pub author_handle: String,
    pub created_at: TimestampMs,
    /// Absolute expiry instant; `None` means the thread never expires.
    pub expires_at: Option<TimestampMs>,
}

/// A stored reply. Replies share their parent's lifecycle: deleting the
/// parent removes all replies in the same sweep step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyRecord {
    pub id: ReplyId,
    pub parent_id: ThreadId,
    pub content: String,
    pub author_handle: String,
    pub created_at: TimestampMs,
}

/// A thread together with its replies, as returned by storage reads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadView {
    pub thread: ThreadRecord,
    pub replies: Vec<ReplyRecord>,
}
