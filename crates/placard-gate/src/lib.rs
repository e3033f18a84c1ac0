//! # Admission Gate Subsystem
//!
//! Decides whether a write request reaches storage. Two layers run in
//! order, both side-effect-free until the request is fully admitted:
//!
//! 1. **AuthenticationGate**: rebuilds the canonical signed message from
//!    the submitted fields, enforces the timestamp window, and verifies the
//!    ECDSA signature against the submitted public key.
//! 2. **AbuseGuard**: per-identity sliding-window rate limiting and
//!    duplicate-content suppression, applied only after authentication
//!    succeeds.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): canonical messages, timestamp window,
//!   guard state. The guard owns its maps; nothing here touches storage.
//! - **Ports Layer** (`ports/`): the `AdmissionApi` inbound trait.
//! - **Service Layer** (`service.rs`): `GateService` wires the identity
//!   port, the guard, and the configuration together.

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::auth::{canonical_reply_message, canonical_thread_message, Authenticated};
pub use domain::config::{AdmissionConfig, ClassLimits, ConfigError, GateConfig, GuardConfig};
pub use domain::errors::{AdmissionError, AuthError};
pub use domain::guard::{content_digest, AbuseGuard};
pub use ports::inbound::AdmissionApi;
pub use service::GateService;
