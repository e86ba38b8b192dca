use log::{LevelFilter, SetLoggerError};

/// Install the process logger writing to stderr
/// `RUST_LOG` directives are read first, `level` then sets the global filter.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .format_timestamp_millis()
        .try_init()
}
