//! # Lifecycle Service
//!
//! Creation with lifecycle metadata and the periodic sweep. The sweep runs
//! on a fixed interval regardless of request traffic; each pass is awaited
//! before the next tick fires, so at most one sweep is ever in flight.

use crate::domain::errors::LifecycleError;
use crate::domain::expiry::compute_expiry;
use crate::ports::outbound::{ContentStore, NewReply, NewThread};
use serde::{Deserialize, Serialize};
use shared_types::{now_ms, ReplyId, ThreadId, ThreadView, TimestampMs};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

/// Lifecycle configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Interval between sweep passes.
    pub sweep_interval: Duration,
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            sweep_interval: Duration::from_secs(5 * 60),
        }
    }
}

/// Fields of an admitted thread, as handed over by the gate.
#[derive(Clone, Debug)]
pub struct AdmittedThread {
    pub title: String,
    pub content: String,
    pub author_handle: String,
    pub ttl_minutes: Option<i64>,
}

/// Fields of an admitted reply, as handed over by the gate.
#[derive(Clone, Debug)]
pub struct AdmittedReply {
    pub parent_id: ThreadId,
    pub content: String,
    pub author_handle: String,
}

/// Content lifecycle service over a storage port.
pub struct LifecycleService<S: ContentStore> {
    store: S,
}

impl<S: ContentStore> LifecycleService<S> {
    /// Create a lifecycle service over a storage collaborator.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Store an admitted thread, stamping its expiry exactly once.
    pub async fn create_thread(
        &self,
        thread: AdmittedThread,
        created_at: TimestampMs,
    ) -> Result<ThreadId, LifecycleError> {
        let expires_at = compute_expiry(created_at, thread.ttl_minutes)?;

        let id = self
            .store
            .create_thread(NewThread {
                title: thread.title,
                content: thread.content,
                author_handle: thread.author_handle,
                created_at,
                expires_at,
            })
            .await?;

        debug!(thread_id = %id, ?expires_at, "thread stored");
        Ok(id)
    }

    /// Store an admitted reply under an existing parent.
    pub async fn create_reply(
        &self,
        reply: AdmittedReply,
        created_at: TimestampMs,
    ) -> Result<ReplyId, LifecycleError> {
        let id = self
            .store
            .create_reply(NewReply {
                parent_id: reply.parent_id,
                content: reply.content,
                author_handle: reply.author_handle,
                created_at,
            })
            .await?
            .ok_or(LifecycleError::ParentNotFound)?;

        debug!(reply_id = %id, "reply stored");
        Ok(id)
    }

    /// Read a thread with its replies.
    pub async fn get_thread(&self, id: ThreadId) -> Result<Option<ThreadView>, LifecycleError> {
        Ok(self.store.get_thread(id).await?)
    }

    /// One sweep pass: delete everything due at `now`. Idempotent; a second
    /// pass with no new expirations deletes nothing.
    pub async fn sweep(&self, now: TimestampMs) -> Result<u64, LifecycleError> {
        let deleted = self.store.delete_expired(now).await?;
        if deleted > 0 {
            info!(deleted, "sweep removed expired content");
        }
        Ok(deleted)
    }
}

/// Background task driving the sweep on a fixed interval.
///
/// A pass that fails is logged and retried at the next tick; missed ticks
/// are skipped rather than bursted.
pub async fn run_sweeper<S: ContentStore>(service: Arc<LifecycleService<S>>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        if let Err(e) = service.sweep(now_ms()).await {
            error!(error = %e, "sweep pass failed; retrying at next tick");
        }
    }
}
