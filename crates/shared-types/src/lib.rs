//! # Shared Types Crate
//!
//! This crate contains the domain entities shared across the Placard
//! subsystems: content identifiers, epoch-millisecond timestamps, and the
//! submission field sets that travel from the network boundary through the
//! admission gate into storage.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **No Behavior**: This crate holds data and trivial accessors only; the
//!   identity, gate, and lifecycle crates own all logic.

pub mod entities;
pub mod time;

pub use entities::*;
pub use time::{now_ms, TimestampMs};
