//! Error types for bundle resolution

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for resolution operations
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Error type for bundle resolution
///
/// Every variant is fatal for the bundle being resolved only. Callers decide
/// whether that aborts anything larger.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The manifest is missing, unreadable, or does not match the schema
    ///
    /// Also covers a bundle directory that does not exist, since its
    /// manifest cannot be read.
    #[error("failed to parse manifest {path}: {reason}")]
    ManifestParse { path: PathBuf, reason: String },

    /// None of the candidate slices has a binary on disk
    #[error("couldn't find any supported architecture references in {bundle}")]
    ArchitectureNotFound { bundle: PathBuf },

    /// Resolver configuration is unusable
    #[error("configuration error: {0}")]
    InvalidConfig(String),
}

impl ResolveError {
    /// Returns a stable numeric code for the error kind
    pub fn error_code(&self) -> u32 {
        match self {
            ResolveError::ManifestParse { .. } => 1,
            ResolveError::ArchitectureNotFound { .. } => 2,
            ResolveError::InvalidConfig(_) => 3,
        }
    }

    /// Create a manifest parse error for the given manifest path
    pub fn manifest_parse(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        ResolveError::ManifestParse {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Manifest or bundle path the error refers to, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ResolveError::ManifestParse { path, .. } => Some(path),
            ResolveError::ArchitectureNotFound { bundle } => Some(bundle),
            ResolveError::InvalidConfig(_) => None,
        }
    }
}

impl From<serde_json::Error> for ResolveError {
    fn from(err: serde_json::Error) -> Self {
        ResolveError::InvalidConfig(err.to_string())
    }
}

impl From<toml::de::Error> for ResolveError {
    fn from(err: toml::de::Error) -> Self {
        ResolveError::InvalidConfig(err.to_string())
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
