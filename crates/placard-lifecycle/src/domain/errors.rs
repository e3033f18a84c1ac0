//! # Lifecycle Errors

use crate::ports::outbound::StoreError;
use thiserror::Error;

/// Failures in content creation or the sweep.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LifecycleError {
    /// `ttl_minutes` was negative or large enough to overflow the clock.
    #[error("ttl_minutes must be a positive integer, got {0}")]
    InvalidTtl(i64),

    /// A reply referenced a thread that does not exist or was already
    /// swept.
    #[error("parent thread not found")]
    ParentNotFound,

    /// The storage collaborator failed.
    #[error("storage failure: {0}")]
    Store(#[from] StoreError),
}
