use crate::executor::{DiagramEngine, EngineError};
use crate::model::{GenerationOptions, InputSource, PipelineMode};
use log::{debug, info};
use std::path::Path;

/// Routes one invocation to the matching engine entry point. Engine errors
/// are returned untouched.
pub fn run_pipeline(
    engine: &dyn DiagramEngine,
    input: &InputSource,
    output: &Path,
    mode: PipelineMode,
    options: &GenerationOptions,
) -> Result<(), EngineError> {
    info!("Generating {} from {} ({})", output.display(), input, mode);
    debug!("Generation options: {:?}", options);

    match mode {
        PipelineMode::CloudFormationTemplate { emit_dac_document } => {
            engine.generate_from_cfn_template(input, output, emit_dac_document, options)
        }
        PipelineMode::DacDocument => engine.generate_from_dac_document(input, output, options),
    }
}
