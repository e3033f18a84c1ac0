//! # Outbound Ports (Driven Ports)
//!
//! The storage interface this subsystem requires the host application to
//! implement, and the in-memory adapter used in tests and default wiring.
//!
//! The lifecycle core only ever hands storage validated, already
//! authenticated field sets, and only reads back what the sweep and the
//! parent-existence check need.

use async_trait::async_trait;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use shared_types::{ReplyId, ReplyRecord, ThreadId, ThreadRecord, ThreadView, TimestampMs};
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

/// Storage collaborator failures.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Backend failure with operator-facing detail. Callers surface a
    /// generic failure; the detail goes to the log.
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Validated, authenticated fields of a thread about to be stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewThread {
    pub title: String,
    pub content: String,
    pub author_handle: String,
    pub created_at: TimestampMs,
    /// Computed once by the lifecycle; `None` means the thread never
    /// expires.
    pub expires_at: Option<TimestampMs>,
}

/// Validated, authenticated fields of a reply about to be stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReply {
    pub parent_id: ThreadId,
    pub content: String,
    pub author_handle: String,
    pub created_at: TimestampMs,
}

/// Abstract interface for the relational storage collaborator.
///
/// Production: a database-backed adapter in the host application.
/// Testing: [`InMemoryContentStore`] (below).
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Persist a new thread, returning its id.
    async fn create_thread(&self, thread: NewThread) -> Result<ThreadId, StoreError>;

    /// Persist a new reply under an existing parent.
    ///
    /// Returns `Ok(None)` when the parent does not exist; the caller turns
    /// that into its not-found rejection.
    async fn create_reply(&self, reply: NewReply) -> Result<Option<ReplyId>, StoreError>;

    /// Read a thread and its replies.
    async fn get_thread(&self, id: ThreadId) -> Result<Option<ThreadView>, StoreError>;

    /// Delete every thread whose expiry is non-null and `<= now`, cascading
    /// to its replies atomically per parent. Returns the number of threads
    /// deleted.
    ///
    /// Adapters log per-item delete failures and keep going; only a failure
    /// of the pass as a whole surfaces as an error, and the caller retries
    /// it at the next tick.
    async fn delete_expired(&self, now: TimestampMs) -> Result<u64, StoreError>;
}

// =============================================================================
// IN-MEMORY ADAPTER
// =============================================================================

#[derive(Default)]
struct Tables {
    threads: HashMap<ThreadId, ThreadRecord>,
    replies: HashMap<ThreadId, Vec<ReplyRecord>>,
}

/// In-memory `ContentStore` used by tests and the default node wiring.
///
/// A thread and its replies live and die under one write lock, so each
/// delete is atomic per parent exactly like the relational adapter's
/// transaction.
#[derive(Default)]
pub struct InMemoryContentStore {
    tables: RwLock<Tables>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of threads currently stored.
    pub fn thread_count(&self) -> usize {
        self.tables.read().threads.len()
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn create_thread(&self, thread: NewThread) -> Result<ThreadId, StoreError> {
        let id = Uuid::new_v4();
        let record = ThreadRecord {
            id,
            title: thread.title,
            content: thread.content,
            author_handle: thread.author_handle,
            created_at: thread.created_at,
            expires_at: thread.expires_at,
        };
        self.tables.write().threads.insert(id, record);
        Ok(id)
    }

    async fn create_reply(&self, reply: NewReply) -> Result<Option<ReplyId>, StoreError> {
        let mut tables = self.tables.write();
        if !tables.threads.contains_key(&reply.parent_id) {
            return Ok(None);
        }

        let id = Uuid::new_v4();
        let record = ReplyRecord {
            id,
            parent_id: reply.parent_id,
            content: reply.content,
            author_handle: reply.author_handle,
            created_at: reply.created_at,
        };
        tables.replies.entry(reply.parent_id).or_default().push(record);
        Ok(Some(id))
    }

    async fn get_thread(&self, id: ThreadId) -> Result<Option<ThreadView>, StoreError> {
        let tables = self.tables.read();
        Ok(tables.threads.get(&id).map(|thread| ThreadView {
            thread: thread.clone(),
            replies: tables.replies.get(&id).cloned().unwrap_or_default(),
        }))
    }

    async fn delete_expired(&self, now: TimestampMs) -> Result<u64, StoreError> {
        let mut tables = self.tables.write();
        let expired: Vec<ThreadId> = tables
            .threads
            .values()
            .filter(|t| matches!(t.expires_at, Some(expiry) if expiry <= now))
            .map(|t| t.id)
            .collect();

        for id in &expired {
            tables.threads.remove(id);
            tables.replies.remove(id);
        }
        Ok(expired.len() as u64)
    }
}
