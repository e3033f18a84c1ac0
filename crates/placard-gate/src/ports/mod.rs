//! Port definitions for the admission gate.

pub mod inbound;
