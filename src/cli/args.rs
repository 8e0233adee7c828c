use crate::model::GenerationFlags;
use clap::error::ErrorKind;
use clap::Parser;

/// CLI entry point for awsdac
#[derive(Parser, Debug)]
#[command(
    name = "awsdac",
    version,
    about = "Diagram-as-code for AWS architecture.",
    long_about = "This command line interface (CLI) tool enables drawing infrastructure diagrams for Amazon Web Services through YAML code."
)]
pub struct Cli {
    /// Input file path or http(s) URL
    #[arg(
        value_name = "INPUT",
        required_unless_present = "server",
        conflicts_with = "server"
    )]
    pub input: Option<String>,

    /// Output file name [default: output.png]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// [beta] Create diagram from CloudFormation template
    #[arg(short = 'c', long)]
    pub cfn_template: bool,

    /// [beta] Generate YAML file in dac (diagram-as-code) format from CloudFormation template
    #[arg(short = 'd', long, requires = "cfn_template")]
    pub dac_file: bool,

    /// For testing purpose, override DefinitionFiles to another url/local file
    #[arg(long, value_name = "FILE")]
    pub override_def_file: Option<String>,

    /// Processes the input file as a template before reading it as a DAC document
    #[arg(short = 't', long, conflicts_with = "cfn_template")]
    pub template: bool,

    /// Run as HTTP server
    #[arg(short, long)]
    pub server: bool,

    /// Port for HTTP server [default: 8080]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<String>,

    /// Environment (loads config/{env}.toml)
    #[arg(long)]
    pub env: Option<String>,
}

impl Cli {
    /// Parse `std::env::args`, exiting with status 1 on any usage error.
    /// Help and version output still exit 0.
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(e) => match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
                _ => {
                    let _ = e.print();
                    std::process::exit(1);
                }
            },
        }
    }

    pub fn generation_flags(&self) -> GenerationFlags {
        GenerationFlags {
            cfn_template: self.cfn_template,
            dac_file: self.dac_file,
            template: self.template,
            override_def_file: self.override_def_file.clone(),
        }
    }
}
