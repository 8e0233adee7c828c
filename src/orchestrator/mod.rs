pub mod artifact;
pub mod generate;
pub mod pipeline;

pub use artifact::write_artifact;
pub use generate::{run_generate, GenerateError};
pub use pipeline::run_pipeline;
