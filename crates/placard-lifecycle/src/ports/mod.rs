//! Port definitions for the content lifecycle.

pub mod outbound;
