//! # Identity Verification Subsystem
//!
//! Public-key identity handling for Placard: parsing and validating the
//! external key encoding, normalizing signatures between their two accepted
//! encodings, ECDSA P-256 verification, and the derived anonymized handles.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): Pure cryptographic logic, no I/O
//! - **Ports Layer** (`ports/`): Trait definitions for inbound interfaces
//! - **Service Layer** (`service.rs`): Wires domain logic to ports
//!
//! ## Security Notes
//!
//! - Verification never panics: every internal failure maps to an explicit
//!   `VerifyError` variant, and the boolean convenience wrapper folds all of
//!   them into a rejection.
//! - The only key material this subsystem ever sees is public.

pub mod domain;
pub mod ports;
pub mod service;

// Re-export public API
pub use domain::der::normalize_signature;
pub use domain::entities::{PublicKey, FIXED_WIDTH_SIGNATURE_LEN, PUBLIC_KEY_HEX_LEN};
pub use domain::errors::{KeyFormatError, SignatureFormatError, VerifyError};
pub use domain::handle::{anonymize_address, display_handle};
pub use domain::key::{parse_public_key_hex, subject_public_key_info};
pub use domain::verify::{verify, verify_ok};
pub use ports::inbound::IdentityApi;
pub use service::IdentityService;
