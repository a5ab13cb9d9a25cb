//! Configuration loading for the CLI

use anyhow::{Context, Result};
use std::path::Path;
use xcslice_core::ResolverConfig;
use xcslice_logging::{LevelFilter, ReloadHandle};

/// Load resolver configuration
///
/// `.json` files are decoded as JSON, anything else as TOML. Without a path
/// the defaults are used.
pub fn load(path: Option<&Path>) -> Result<ResolverConfig> {
    let Some(path) = path else {
        return Ok(ResolverConfig::default());
    };

    let content =
        std::fs::read(path).with_context(|| format!("Failed to read config: {:?}", path))?;

    let config = if path.extension().is_some_and(|ext| ext == "json") {
        ResolverConfig::from_json(&content)
    } else {
        let text = String::from_utf8(content).context("Config file is not valid UTF-8")?;
        ResolverConfig::from_toml(&text)
    };

    let config = config.with_context(|| format!("Invalid config: {:?}", path))?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Level requested by `-v` flags, `None` without any
pub fn verbosity_level(verbose: u8) -> Option<LevelFilter> {
    match verbose {
        0 => None,
        1 => Some(LevelFilter::INFO),
        2 => Some(LevelFilter::DEBUG),
        _ => Some(LevelFilter::TRACE),
    }
}

/// Effective log level: `-v` flags override the configured level
pub fn log_level(config: &ResolverConfig, verbose: u8) -> Result<LevelFilter> {
    match verbosity_level(verbose) {
        Some(level) => Ok(level),
        None => xcslice_logging::parse_level(&config.log_level)
            .with_context(|| format!("Unknown log level: {:?}", config.log_level)),
    }
}

/// Install the stderr subscriber before the config is read
///
/// Uses the `-v` level, or `warn` until the configured level is known.
pub fn init_logging(verbose: u8) -> Result<()> {
    let level = verbosity_level(verbose).unwrap_or(LevelFilter::WARN);
    xcslice_logging::init_logging(level).context("Failed to initialize logging")
}

/// Switch the installed subscriber to the effective level for `config`
pub fn apply_log_level(config: &ResolverConfig, verbose: u8) -> Result<()> {
    let level = log_level(config, verbose)?;
    ReloadHandle::global()
        .set_level(level)
        .context("Failed to apply log level")
}
