use crate::model::{GenerationOptions, InputSource};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Failed to start renderer '{0}': {1}")]
    Spawn(String, std::io::Error),

    #[error("Renderer exited with {status}: {stderr}")]
    Failed { status: String, stderr: String },

    #[error("Renderer did not finish within {0:?}")]
    TimedOut(Duration),

    #[error("Renderer I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses, lays out and renders a diagram. Implementations write the
/// artifact to `output` and may also write a DAC document next to it.
pub trait DiagramEngine: Send + Sync {
    fn generate_from_cfn_template(
        &self,
        input: &InputSource,
        output: &Path,
        emit_dac_document: bool,
        options: &GenerationOptions,
    ) -> Result<(), EngineError>;

    fn generate_from_dac_document(
        &self,
        input: &InputSource,
        output: &Path,
        options: &GenerationOptions,
    ) -> Result<(), EngineError>;
}
