//! # Placard Node Runtime
//!
//! Wires the subsystems into a running node: identity verification feeds
//! the admission gate, admitted requests flow into the content lifecycle,
//! and the sweeper runs on its own timer. The HTTP surface is a thin
//! external collaborator and lives outside this workspace; [`app::BoardApp`]
//! is the boundary it calls into.

pub mod app;
pub mod config;

pub use app::{AppError, BoardApp};
pub use config::NodeConfig;
