//! # Content Lifecycle Subsystem
//!
//! Computes expiry instants at creation time and runs the periodic sweep
//! that permanently deletes expired content. Deletion is terminal: a swept
//! thread and all its replies are removed together and never resurrected.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): expiry arithmetic, no I/O
//! - **Ports Layer** (`ports/`): the `ContentStore` driven port plus an
//!   in-memory adapter used by tests and the default node wiring
//! - **Service Layer** (`service.rs`): creation with lifecycle metadata,
//!   the sweep, and the tokio task driving it on a fixed interval

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::errors::LifecycleError;
pub use domain::expiry::{compute_expiry, TTL_CHOICES_MINUTES};
pub use ports::outbound::{ContentStore, InMemoryContentStore, NewReply, NewThread, StoreError};
pub use service::{run_sweeper, AdmittedReply, AdmittedThread, LifecycleConfig, LifecycleService};
