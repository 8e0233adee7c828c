use log::debug;

/// The generation switches as they arrive from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationFlags {
    pub cfn_template: bool,
    pub dac_file: bool,
    pub template: bool,
    pub override_def_file: Option<String>,
}

/// Options threaded into a single pipeline invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    pub use_template_engine: bool,
    pub override_definition_path: Option<String>,
}

impl GenerationOptions {
    /// The templating pass only exists for DAC documents, so it is never
    /// carried into a CloudFormation run.
    pub fn assemble(flags: &GenerationFlags) -> Self {
        let options = Self {
            use_template_engine: flags.template && !flags.cfn_template,
            override_definition_path: flags
                .override_def_file
                .as_deref()
                .filter(|path| !path.is_empty())
                .map(str::to_string),
        };
        debug!("Assembled generation options: {:?}", options);
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_produce_plain_options() {
        let options = GenerationOptions::assemble(&GenerationFlags::default());
        assert_eq!(options, GenerationOptions::default());
    }

    #[test]
    fn test_template_is_carried_for_dac_documents() {
        let flags = GenerationFlags {
            template: true,
            ..GenerationFlags::default()
        };
        assert!(GenerationOptions::assemble(&flags).use_template_engine);
    }

    #[test]
    fn test_template_is_dropped_for_cfn_templates() {
        let flags = GenerationFlags {
            cfn_template: true,
            template: true,
            ..GenerationFlags::default()
        };
        assert!(!GenerationOptions::assemble(&flags).use_template_engine);
    }

    #[test]
    fn test_override_definition_path() {
        let flags = GenerationFlags {
            override_def_file: Some("definitions/test.yaml".to_string()),
            ..GenerationFlags::default()
        };
        assert_eq!(
            GenerationOptions::assemble(&flags).override_definition_path,
            Some("definitions/test.yaml".to_string())
        );

        let empty = GenerationFlags {
            override_def_file: Some(String::new()),
            ..GenerationFlags::default()
        };
        assert_eq!(GenerationOptions::assemble(&empty).override_definition_path, None);
    }
}
