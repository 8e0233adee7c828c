use crate::model::GenerationFlags;
use std::fmt;

/// Which end-to-end conversion a run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineMode {
    DacDocument,
    CloudFormationTemplate { emit_dac_document: bool },
}

impl PipelineMode {
    pub fn select(flags: &GenerationFlags) -> Result<Self, ModeError> {
        match (flags.cfn_template, flags.dac_file, flags.template) {
            (true, _, true) => Err(ModeError::TemplateWithCfn),
            (false, true, _) => Err(ModeError::DacFileWithoutCfn),
            (true, emit_dac_document, false) => {
                Ok(PipelineMode::CloudFormationTemplate { emit_dac_document })
            }
            (false, false, _) => Ok(PipelineMode::DacDocument),
        }
    }
}

impl fmt::Display for PipelineMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineMode::DacDocument => f.write_str("dac-document"),
            PipelineMode::CloudFormationTemplate {
                emit_dac_document: false,
            } => f.write_str("cfn-template"),
            PipelineMode::CloudFormationTemplate {
                emit_dac_document: true,
            } => f.write_str("cfn-template+dac-file"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ModeError {
    #[error("--template applies to DAC documents only and cannot be combined with --cfn-template")]
    TemplateWithCfn,

    #[error("--dac-file requires --cfn-template")]
    DacFileWithoutCfn,
}
