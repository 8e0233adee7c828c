pub mod command;
pub mod engine;

pub use command::CommandEngine;
pub use engine::{DiagramEngine, EngineError};
