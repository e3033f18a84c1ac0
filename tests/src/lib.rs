//! # Placard Test Suite
//!
//! Unified test crate for cross-subsystem flows:
//!
//! ```text
//! tests/src/
//! ├── support.rs        # Client-side fixtures (keygen, signing)
//! └── integration/      # Admission → storage → sweep flows
//!     ├── admission.rs  # Full authentication pipeline
//!     ├── abuse.rs      # Rate limiting and duplicate suppression
//!     ├── codecs.rs     # Key/signature encodings end to end
//!     └── lifecycle.rs  # TTL expiry and the sweep
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p placard-tests
//! cargo test -p placard-tests integration::admission
//! ```

pub mod support;
