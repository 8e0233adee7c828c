//! Diagram-as-code for AWS architecture.
//!
//! Decides, from command-line flags or an HTTP request, which rendering
//! pipeline to run against which input, hands the work to the external
//! renderer and reports the outcome as an exit status or HTTP status.

pub mod cli;
pub mod executor;
pub mod logger;
pub mod model;
pub mod orchestrator;
pub mod server;
