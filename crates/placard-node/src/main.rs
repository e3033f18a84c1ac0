//! # Placard Node
//!
//! Entry point: configuration, logging, service wiring, and the sweep
//! scheduler. The HTTP surface is an external collaborator that calls into
//! [`placard_node::BoardApp`]; this binary brings up everything behind it.

use anyhow::{Context, Result};
use placard_lifecycle::{run_sweeper, InMemoryContentStore};
use placard_node::{BoardApp, NodeConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = NodeConfig::from_env().context("invalid configuration")?;
    info!(
        max_age_ms = config.admission.gate.max_age_ms,
        sweep_interval_secs = config.lifecycle.sweep_interval.as_secs(),
        "starting placard node"
    );

    // Default wiring runs on the in-memory store; a deployment with a
    // relational backend swaps its own ContentStore in here. The HTTP
    // collaborator takes `app` from here.
    let app = BoardApp::new(config.admission.clone(), InMemoryContentStore::new());

    let sweeper = tokio::spawn(run_sweeper(
        app.lifecycle(),
        config.lifecycle.sweep_interval,
    ));
    info!("sweep scheduler running");

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    info!("shutdown signal received");
    sweeper.abort();

    Ok(())
}
