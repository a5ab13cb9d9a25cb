//! Process-wide control over the installed log level

use once_cell::sync::OnceCell;
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{Registry, reload};

type FilterHandle = reload::Handle<LevelFilter, Registry>;

/// Failure to install or adjust the stderr subscriber
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LoggingError {
    /// [`init_logging`](crate::init_logging) has not installed a subscriber
    #[error("logging is not initialized")]
    NotInitialized,

    /// Another global subscriber was installed first
    #[error("a different global subscriber is already installed")]
    ForeignSubscriber,

    /// The subscriber owning the filter has been dropped
    #[error("failed to change log level: {0}")]
    Reload(String),
}

/// Level filter of the subscriber installed by [`init_logging`](crate::init_logging)
///
/// Filled at most once. Front ends start logging before their configuration
/// is read and use [`set_level`](Self::set_level) once it is.
pub struct ReloadHandle {
    slot: OnceCell<FilterHandle>,
}

impl ReloadHandle {
    pub const fn new() -> Self {
        Self {
            slot: OnceCell::new(),
        }
    }

    /// Handle used by [`init_logging`](crate::init_logging)
    pub fn global() -> &'static ReloadHandle {
        static GLOBAL: ReloadHandle = ReloadHandle::new();
        &GLOBAL
    }

    /// Store the filter handle; `false` if one was already stored
    pub fn install(&self, handle: FilterHandle) -> bool {
        self.slot.set(handle).is_ok()
    }

    pub fn is_installed(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Level currently applied, if a filter is installed and still alive
    pub fn current_level(&self) -> Option<LevelFilter> {
        self.slot.get()?.clone_current()
    }

    /// Replace the level of the installed filter
    pub fn set_level(&self, level: LevelFilter) -> Result<(), LoggingError> {
        let handle = self.slot.get().ok_or(LoggingError::NotInitialized)?;
        handle
            .reload(level)
            .map_err(|e| LoggingError::Reload(e.to_string()))?;
        tracing::debug!("Log level set to {}", level);
        Ok(())
    }
}

impl Default for ReloadHandle {
    fn default() -> Self {
        Self::new()
    }
}
