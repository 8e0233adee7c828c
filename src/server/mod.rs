//! HTTP generation service.
//!
//! Serves a single route, `GET /generate`, which re-renders a fixed input
//! document with the flags the server was started with. Requests that
//! target the shared output path are serialized by a mutex held for the
//! whole render, so the artifact on disk always comes from exactly one
//! completed run.

mod app;
mod handlers;
mod state;

use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info};
use tokio::sync::Mutex;

use crate::executor::DiagramEngine;
use crate::model::{GenerationFlags, PipelineMode};
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Document rendered on every request.
    pub input: String,
    /// Artifact path written by every request.
    pub output: PathBuf,
    pub mode: PipelineMode,
    pub flags: GenerationFlags,
}

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {0}: {1}")]
    Bind(String, std::io::Error),

    #[error("HTTP server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Bind and serve until Ctrl-C.
pub async fn run_server(
    config: ServerConfig,
    engine: Arc<dyn DiagramEngine>,
) -> Result<(), ServerError> {
    let address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|e| ServerError::Bind(address.clone(), e))?;

    let state = Arc::new(AppState {
        engine,
        input: config.input,
        output: config.output,
        mode: config.mode,
        flags: config.flags,
        output_lock: Arc::new(Mutex::new(())),
    });
    let router = app::create_router(state);

    println!("Starting HTTP server on port {}...", config.port);
    println!("Generate diagram: GET /generate");
    info!("Listening on {}", address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, stopping server");
}
