use crate::executor::{DiagramEngine, EngineError};
use crate::model::config::EngineConfig;
use crate::model::{GenerationOptions, InputSource};
use log::{debug, error, info};
use std::io::Read;
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(25);

/// How long to wait for stderr EOF after the renderer has exited. Anything it
/// spawned in the background may hold the pipe open indefinitely.
const STDERR_GRACE: Duration = Duration::from_secs(1);

/// Runs the external renderer executable once per invocation.
pub struct CommandEngine {
    command: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandEngine {
    pub fn new(command: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            command: command.into(),
            args,
            timeout,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.command.clone(), config.args.clone(), config.timeout())
    }

    fn pipeline_args(
        pipeline: &str,
        input: &InputSource,
        output: &Path,
        options: &GenerationOptions,
    ) -> Vec<String> {
        let mut args = vec![
            pipeline.to_string(),
            input.to_string(),
            "--output".to_string(),
            output.display().to_string(),
        ];
        if let Some(definitions) = &options.override_definition_path {
            args.push("--override-def-file".to_string());
            args.push(definitions.clone());
        }
        args
    }

    fn run(&self, pipeline_args: Vec<String>) -> Result<(), EngineError> {
        debug!(
            "Invoking renderer: {} {} {}",
            self.command,
            self.args.join(" "),
            pipeline_args.join(" ")
        );

        let start_time = Instant::now();
        let mut child = Command::new(&self.command)
            .args(&self.args)
            .args(&pipeline_args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| EngineError::Spawn(self.command.clone(), e))?;

        // Drain stderr concurrently so a chatty renderer cannot block on a full pipe.
        let stderr_reader = child.stderr.take().map(|mut stderr| {
            let (sender, receiver) = mpsc::channel();
            thread::spawn(move || {
                let mut buffer = String::new();
                let _ = stderr.read_to_string(&mut buffer);
                let _ = sender.send(buffer);
            });
            receiver
        });

        let status = match self.wait_with_deadline(&mut child) {
            Ok(status) => status,
            Err(e) => {
                error!("Renderer aborted: {}", e);
                return Err(e);
            }
        };
        let stderr = stderr_reader
            .and_then(|receiver| receiver.recv_timeout(STDERR_GRACE).ok())
            .unwrap_or_default();

        if status.success() {
            info!("Renderer finished in {}ms", start_time.elapsed().as_millis());
            Ok(())
        } else {
            Err(EngineError::Failed {
                status: status.to_string(),
                stderr: stderr.trim().to_string(),
            })
        }
    }

    fn wait_with_deadline(&self, child: &mut Child) -> Result<std::process::ExitStatus, EngineError> {
        let deadline = Instant::now() + self.timeout;
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status);
            }
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                return Err(EngineError::TimedOut(self.timeout));
            }
            thread::sleep(POLL_INTERVAL);
        }
    }
}

impl DiagramEngine for CommandEngine {
    fn generate_from_cfn_template(
        &self,
        input: &InputSource,
        output: &Path,
        emit_dac_document: bool,
        options: &GenerationOptions,
    ) -> Result<(), EngineError> {
        let mut args = Self::pipeline_args("cfn", input, output, options);
        if emit_dac_document {
            args.push("--dac-file".to_string());
        }
        self.run(args)
    }

    fn generate_from_dac_document(
        &self,
        input: &InputSource,
        output: &Path,
        options: &GenerationOptions,
    ) -> Result<(), EngineError> {
        let mut args = Self::pipeline_args("dac", input, output, options);
        if options.use_template_engine {
            args.push("--template".to_string());
        }
        self.run(args)
    }
}
