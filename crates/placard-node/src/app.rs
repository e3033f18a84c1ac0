//! # Board Application
//!
//! The boundary the (external) HTTP layer calls into: admission followed by
//! storage, with one error type carrying the response status. Rejections
//! happen before any side effect; only a fully admitted request reaches the
//! lifecycle.

use placard_gate::{AdmissionApi, AdmissionError, GateService};
use placard_identity::{IdentityApi, IdentityService};
use placard_lifecycle::{
    AdmittedReply, AdmittedThread, ContentStore, LifecycleError, LifecycleService,
};
use shared_types::{now_ms, ReplyId, ReplySubmission, ThreadId, ThreadSubmission, ThreadView};
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

/// Everything a write request can fail with, across both stages.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    #[error(transparent)]
    Admission(#[from] AdmissionError),

    /// TTL validation failure: a 400 like the other malformed-field cases.
    #[error("invalid ttl_minutes: {0}")]
    InvalidTtl(i64),

    #[error("parent thread not found")]
    ParentNotFound,

    /// Storage failure, surfaced generically. Details are logged, not
    /// returned.
    #[error("internal error")]
    Internal,
}

impl AppError {
    /// HTTP status surfaced at the API boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            AppError::Admission(e) => e.status_code(),
            AppError::InvalidTtl(_) => 400,
            AppError::ParentNotFound => 404,
            AppError::Internal => 500,
        }
    }
}

impl From<LifecycleError> for AppError {
    fn from(e: LifecycleError) -> Self {
        match e {
            LifecycleError::InvalidTtl(minutes) => AppError::InvalidTtl(minutes),
            LifecycleError::ParentNotFound => AppError::ParentNotFound,
            LifecycleError::Store(store) => {
                error!(error = %store, "storage failure");
                AppError::Internal
            }
        }
    }
}

/// The composed application: gate in front, lifecycle behind.
pub struct BoardApp<I: IdentityApi, S: ContentStore> {
    gate: GateService<I>,
    lifecycle: Arc<LifecycleService<S>>,
}

impl<S: ContentStore> BoardApp<IdentityService, S> {
    /// Production wiring: real cryptography over the given store.
    pub fn new(config: placard_gate::AdmissionConfig, store: S) -> Self {
        Self::with_identity(IdentityService::new(), config, store)
    }
}

impl<I: IdentityApi, S: ContentStore> BoardApp<I, S> {
    /// Wiring with an explicit identity port, for tests.
    pub fn with_identity(
        identity: I,
        config: placard_gate::AdmissionConfig,
        store: S,
    ) -> Self {
        Self {
            gate: GateService::new(identity, config),
            lifecycle: Arc::new(LifecycleService::new(store)),
        }
    }

    /// Admit and store a new thread.
    pub async fn submit_thread(
        &self,
        submission: ThreadSubmission,
    ) -> Result<ThreadId, AppError> {
        let now = now_ms();
        let auth = self.gate.admit_thread(&submission, now)?;

        let id = self
            .lifecycle
            .create_thread(
                AdmittedThread {
                    title: submission.title,
                    content: submission.content,
                    author_handle: auth.handle,
                    ttl_minutes: submission.ttl_minutes,
                },
                now,
            )
            .await?;
        Ok(id)
    }

    /// Admit and store a reply.
    pub async fn submit_reply(&self, submission: ReplySubmission) -> Result<ReplyId, AppError> {
        let now = now_ms();
        let auth = self.gate.admit_reply(&submission, now)?;

        let id = self
            .lifecycle
            .create_reply(
                AdmittedReply {
                    parent_id: submission.parent_id,
                    content: submission.content,
                    author_handle: auth.handle,
                },
                now,
            )
            .await?;
        Ok(id)
    }

    /// Read a thread with its replies.
    pub async fn view_thread(&self, id: ThreadId) -> Result<Option<ThreadView>, AppError> {
        Ok(self.lifecycle.get_thread(id).await?)
    }

    /// The lifecycle service, shared with the sweeper task.
    pub fn lifecycle(&self) -> Arc<LifecycleService<S>> {
        Arc::clone(&self.lifecycle)
    }
}
