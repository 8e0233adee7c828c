pub mod config;
pub mod mode;
pub mod options;
pub mod source;

pub use config::{Config, ConfigError};
pub use mode::{ModeError, PipelineMode};
pub use options::{GenerationFlags, GenerationOptions};
pub use source::InputSource;
