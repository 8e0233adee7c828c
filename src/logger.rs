use crate::model::config::LoggingConfig;
use env_logger::{Builder, Target};
use log::Level;
use std::env;
use std::io::Write;

/// Install the log backend. `RUST_LOG`, when set, wins over the
/// configured level.
pub fn setup_logger(config: &LoggingConfig, verbose: bool) {
    let mut builder = Builder::new();
    builder.filter(None, config.effective_level(verbose));
    builder.target(Target::Stderr);

    builder.format(|buf, record| {
        let prefix = match record.level() {
            Level::Error => "error: ",
            Level::Warn => "warning: ",
            Level::Info | Level::Debug | Level::Trace => "",
        };
        writeln!(buf, "{}{}", prefix, record.args())
    });

    if env::var("RUST_LOG").is_ok() {
        builder.parse_default_env();
    }

    // A second initialisation (e.g. from tests) keeps the first logger.
    let _ = builder.try_init();
}
