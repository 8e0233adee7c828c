use crate::executor::{DiagramEngine, EngineError};
use crate::model::{GenerationFlags, GenerationOptions, InputSource, PipelineMode};
use crate::orchestrator::{run_pipeline, write_artifact};
use log::{debug, info};
use std::path::Path;

/// One-shot generation: locate the input, assemble options, dispatch.
pub fn run_generate(
    engine: &dyn DiagramEngine,
    input: &str,
    output: &Path,
    mode: PipelineMode,
    flags: &GenerationFlags,
) -> Result<(), GenerateError> {
    let source = InputSource::classify(input);
    if !source.exists() {
        return Err(GenerateError::InputNotFound(input.to_string()));
    }

    let options = GenerationOptions::assemble(flags);
    debug!("Output path: {}", output.display());

    write_artifact(output, |staging| run_pipeline(engine, &source, staging, mode, &options))?;

    info!("Diagram written to {}", output.display());
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Input file '{0}' does not exist.")]
    InputNotFound(String),

    #[error("Diagram generation failed: {0}")]
    Generation(#[from] EngineError),
}
