//! Port definitions for the identity subsystem.

pub mod inbound;
