//! Per-server state shared by request handlers.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::executor::DiagramEngine;
use crate::model::{GenerationFlags, PipelineMode};

/// Immutable for the lifetime of the server, apart from the output lock.
pub(crate) struct AppState {
    /// Renderer invoked for each request.
    pub(crate) engine: Arc<dyn DiagramEngine>,
    /// Fixed document rendered on every request.
    pub(crate) input: String,
    /// Artifact path shared by all requests.
    pub(crate) output: PathBuf,
    pub(crate) mode: PipelineMode,
    pub(crate) flags: GenerationFlags,
    /// Serializes writers of `output`; held until the render finishes.
    pub(crate) output_lock: Arc<Mutex<()>>,
}
