//! `/generate` endpoint.
//!
//! Re-renders the configured input on every GET and reports the outcome as
//! a plain-text status. The artifact itself stays on disk.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{error, info, warn};

use crate::executor::EngineError;
use crate::model::{GenerationOptions, InputSource};
use crate::orchestrator::{run_pipeline, write_artifact};
use crate::server::state::AppState;

pub(crate) async fn generate(State(state): State<Arc<AppState>>) -> Response {
    let source = InputSource::classify(&state.input);
    if !source.exists() {
        warn!("Input file '{}' does not exist", state.input);
        return (
            StatusCode::NOT_FOUND,
            format!("Input file '{}' does not exist", state.input),
        )
            .into_response();
    }

    let options = GenerationOptions::assemble(&state.flags);

    // The guard moves into the blocking task so a dropped request cannot
    // release the output path while its render is still running.
    let guard = Arc::clone(&state.output_lock).lock_owned().await;
    let task_state = Arc::clone(&state);
    let result = tokio::task::spawn_blocking(move || {
        let _guard = guard;
        write_artifact(&task_state.output, |staging| {
            run_pipeline(
                task_state.engine.as_ref(),
                &source,
                staging,
                task_state.mode,
                &options,
            )
        })
    })
    .await;

    match result {
        Ok(Ok(())) => {
            info!("Generated {}", state.output.display());
            (StatusCode::OK, "OK").into_response()
        }
        Ok(Err(e)) => {
            error!("Diagram generation failed: {}", e);
            let status = match &e {
                EngineError::TimedOut(_) => StatusCode::GATEWAY_TIMEOUT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, format!("Diagram generation failed: {e}")).into_response()
        }
        Err(e) => {
            error!("Generation task panicked: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Diagram generation failed".to_string(),
            )
                .into_response()
        }
    }
}

pub(crate) async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
