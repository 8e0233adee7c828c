use crate::cli::args::Cli;
use crate::executor::{CommandEngine, DiagramEngine};
use crate::logger::setup_logger;
use crate::model::{Config, PipelineMode};
use crate::orchestrator::run_generate;
use crate::server::{run_server, ServerConfig};
use log::{debug, error, info};
use std::path::PathBuf;
use std::sync::Arc;

pub fn handle(cli: Cli) {
    let config = match Config::load(cli.config.as_deref(), cli.env.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            setup_logger(&Default::default(), cli.verbose);
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    setup_logger(&config.logging, cli.verbose);
    debug!("Loaded configuration: {:?}", config);

    let flags = cli.generation_flags();
    let mode = match PipelineMode::select(&flags) {
        Ok(mode) => mode,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let output = PathBuf::from(cli.output.as_deref().unwrap_or(&config.output.path));
    let engine: Arc<dyn DiagramEngine> = Arc::new(CommandEngine::from_config(&config.engine));

    if cli.server {
        info!("Running in server mode");
        let server_config = ServerConfig {
            host: config.server.host.clone(),
            port: cli.port.unwrap_or(config.server.port),
            input: config.server.input.clone(),
            output,
            mode,
            flags,
        };
        debug!("Server configuration: {:?}", server_config);

        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                error!("Failed to start async runtime: {}", e);
                std::process::exit(1);
            }
        };
        if let Err(e) = runtime.block_on(run_server(server_config, engine)) {
            error!("{}", e);
            std::process::exit(1);
        }
        return;
    }

    // clap guarantees an input outside server mode
    let Some(input) = cli.input.as_deref() else {
        error!("This tool requires an input file to run. Please provide a file path.");
        std::process::exit(1);
    };

    if let Err(e) = run_generate(engine.as_ref(), input, &output, mode, &flags) {
        error!("{}", e);
        std::process::exit(1);
    }
}
