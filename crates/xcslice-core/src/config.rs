//! Resolver configuration types

use crate::{Architecture, ResolveError, ResolveResult};
use serde::{Deserialize, Serialize};

/// Resolver configuration
///
/// Every field has a default, so an empty JSON object or TOML document
/// yields the stock behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Manifest file name inside the bundle root
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,

    /// Directory, relative to a slice directory, holding macro binaries
    #[serde(default = "default_macros_dir")]
    pub macros_dir: String,

    /// Architectures eligible for primary selection
    ///
    /// A slice must declare at least one of these to be a candidate.
    /// An empty list disables the filter.
    #[serde(default = "default_supported_architectures")]
    pub supported_architectures: Vec<Architecture>,

    /// Simulator architecture preferred when the caller gives no selection context
    ///
    /// `None` disables the preference so the first declared slice wins.
    #[serde(default = "default_preferred_simulator_architecture")]
    pub preferred_simulator_architecture: Option<Architecture>,

    /// Log level used by command-line front ends
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_manifest_file() -> String {
    "Info.plist".to_string()
}

fn default_macros_dir() -> String {
    "Macros".to_string()
}

fn default_supported_architectures() -> Vec<Architecture> {
    vec![Architecture::Arm64, Architecture::X86_64]
}

fn default_preferred_simulator_architecture() -> Option<Architecture> {
    Some(Architecture::X86_64)
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            manifest_file: default_manifest_file(),
            macros_dir: default_macros_dir(),
            supported_architectures: default_supported_architectures(),
            preferred_simulator_architecture: default_preferred_simulator_architecture(),
            log_level: default_log_level(),
        }
    }
}

impl ResolverConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> ResolveResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Create configuration from a TOML document
    pub fn from_toml(text: &str) -> ResolveResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configured file names are usable
    pub fn validate(&self) -> ResolveResult<()> {
        if self.manifest_file.trim().is_empty() {
            return Err(ResolveError::InvalidConfig(
                "manifest_file must not be empty".to_string(),
            ));
        }

        if self.macros_dir.trim().is_empty() {
            return Err(ResolveError::InvalidConfig(
                "macros_dir must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Check whether an architecture set passes the `supported_architectures` filter
    pub fn supports_any(&self, architectures: &[Architecture]) -> bool {
        self.supported_architectures.is_empty()
            || architectures
                .iter()
                .any(|arch| self.supported_architectures.contains(arch))
    }

    /// Set the preferred simulator architecture
    pub fn with_preferred_simulator_architecture(mut self, arch: Option<Architecture>) -> Self {
        self.preferred_simulator_architecture = arch;
        self
    }

    /// Set the supported architectures
    pub fn with_supported_architectures(mut self, architectures: Vec<Architecture>) -> Self {
        self.supported_architectures = architectures;
        self
    }
}


#[cfg(test)]
#[path = "config/config_parameterized_tests.rs"]
mod config_parameterized_tests;
