//! Subscriber setup for command-line front ends

use crate::reload::{LoggingError, ReloadHandle};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, reload};

/// Parse a level name (`trace`, `debug`, `info`, `warn`, `error`, `off`)
///
/// Case-insensitive. Returns `None` for anything else.
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(LevelFilter::TRACE),
        "debug" => Some(LevelFilter::DEBUG),
        "info" => Some(LevelFilter::INFO),
        "warn" | "warning" => Some(LevelFilter::WARN),
        "error" => Some(LevelFilter::ERROR),
        "off" => Some(LevelFilter::OFF),
        _ => None,
    }
}

/// Initialize logging to stderr at the given level
///
/// The level can be changed later through [`ReloadHandle::global`]. Calling
/// this again after a subscriber is installed only updates the level.
pub fn init_logging(level: LevelFilter) -> Result<(), LoggingError> {
    use tracing_subscriber::prelude::*;

    let handle = ReloadHandle::global();
    if handle.is_installed() {
        return handle.set_level(level);
    }

    let (filter, filter_handle) = reload::Layer::new(level);
    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false),
    );

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|_| LoggingError::ForeignSubscriber)?;
    handle.install(filter_handle);
    Ok(())
}
