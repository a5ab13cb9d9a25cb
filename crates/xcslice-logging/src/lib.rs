//! xcslice-logging - Tracing integration for resolver diagnostics
//!
//! This crate provides:
//! - [`TracingSink`] forwarding resolver warnings to `tracing`
//! - [`init_logging`] installing a stderr subscriber for command-line use
//! - [`ReloadHandle`] for changing the log level after initialization

mod layer;
mod reload;
mod sink;

pub use layer::{init_logging, parse_level};
pub use reload::{LoggingError, ReloadHandle};
pub use sink::TracingSink;
pub use tracing_subscriber::filter::LevelFilter;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        LevelFilter, LoggingError, ReloadHandle, TracingSink, init_logging, parse_level,
    };
}
