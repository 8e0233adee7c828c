use log::{debug, warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use toml::{Table, Value};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub engine: EngineConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Document rendered on every `GET /generate`.
    #[serde(default = "default_server_input")]
    pub input: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_engine_command")]
    pub command: String,

    /// Extra arguments placed before the pipeline arguments.
    #[serde(default)]
    pub args: Vec<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default values
fn default_output_path() -> String {
    "output.png".to_string()
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_server_input() -> String {
    "examples/alb-ec2.yaml".to_string()
}
fn default_engine_command() -> String {
    "awsdac-engine".to_string()
}
fn default_timeout_secs() -> u64 {
    300
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            input: default_server_input(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            command: default_engine_command(),
            args: Vec::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl EngineConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl LoggingConfig {
    /// Threshold after applying `--verbose`. Verbose never lowers a level
    /// that is already more detailed than `info`.
    pub fn effective_level(&self, verbose: bool) -> LevelFilter {
        let configured = LevelFilter::from_str(&self.level).unwrap_or(LevelFilter::Warn);
        if verbose && configured < LevelFilter::Info {
            LevelFilter::Info
        } else {
            configured
        }
    }
}

impl Config {
    /// Load the layered configuration relative to the working directory.
    pub fn load(config_path: Option<&str>, environment: Option<&str>) -> Result<Self, ConfigError> {
        Self::load_in(Path::new("."), config_path, environment)
    }

    /// Layers, lowest precedence first: the explicit `--config` file (or the
    /// first of `config.toml`, `config/default.toml`), `config/<env>.toml`,
    /// then `config/local.toml`. A layer only replaces the keys it sets.
    pub fn load_in(
        root: &Path,
        config_path: Option<&str>,
        environment: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let mut merged = Table::new();
        for layer in Self::layer_paths(root, config_path, environment) {
            debug!("Applying config layer: {}", layer.display());
            overlay(&mut merged, read_layer(&layer)?);
        }

        Value::Table(merged)
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::Parse("merged configuration".to_string(), e.to_string()))
    }

    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        Value::Table(read_layer(Path::new(path))?)
            .try_into()
            .map_err(|e: toml::de::Error| ConfigError::Parse(path.to_string(), e.to_string()))
    }

    fn layer_paths(root: &Path, config_path: Option<&str>, environment: Option<&str>) -> Vec<PathBuf> {
        let mut layers = Vec::new();

        // An explicit file must be readable; the defaults are optional.
        match config_path {
            Some(path) => layers.push(root.join(path)),
            None => layers.extend(
                ["config.toml", "config/default.toml"]
                    .into_iter()
                    .map(|candidate| root.join(candidate))
                    .find(|candidate| candidate.is_file()),
            ),
        }

        if let Some(env) = environment {
            let env_path = root.join("config").join(format!("{env}.toml"));
            if env_path.is_file() {
                layers.push(env_path);
            } else {
                warn!("No configuration for environment '{}' at {}", env, env_path.display());
            }
        }

        let local = root.join("config").join("local.toml");
        if local.is_file() {
            layers.push(local);
        }

        layers
    }
}

/// Read one layer, rejecting it if it would not deserialize on its own so
/// errors point at the offending file.
fn read_layer(path: &Path) -> Result<Table, ConfigError> {
    let name = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| ConfigError::FileRead(name.clone(), e.to_string()))?;
    let table: Table = toml::from_str(&content).map_err(|e| ConfigError::Parse(name.clone(), e.to_string()))?;
    Value::Table(table.clone())
        .try_into::<Config>()
        .map_err(|e| ConfigError::Parse(name, e.to_string()))?;
    Ok(table)
}

fn overlay(base: &mut Table, layer: Table) {
    for (key, value) in layer {
        match value {
            Value::Table(nested) => {
                if let Some(Value::Table(existing)) = base.get_mut(&key) {
                    overlay(existing, nested);
                } else {
                    base.insert(key, Value::Table(nested));
                }
            }
            value => {
                base.insert(key, value);
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{0}': {1}")]
    FileRead(String, String),

    #[error("Failed to parse config file '{0}': {1}")]
    Parse(String, String),
}
