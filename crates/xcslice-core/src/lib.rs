//! xcslice-core - Core types, errors, and configuration
//!
//! This crate provides the foundational types shared by the xcslice crates:
//! - [`Platform`], [`PlatformVariant`], and [`Architecture`] for slice identification
//! - [`LinkingKind`] and [`Status`] carried in resolved metadata
//! - [`ResolveError`] for error handling
//! - [`ResolverConfig`] for resolver configuration
//! - [`DiagnosticSink`] for warnings emitted during resolution

mod config;
mod diagnostics;
mod error;
mod platform;

pub use config::ResolverConfig;
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, NullSink};
pub use error::{ResolveError, ResolveResult};
pub use platform::{Architecture, Platform, PlatformVariant};

use serde::{Deserialize, Serialize};

/// How a consumer links against a slice's binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkingKind {
    Static,
    Dynamic,
}

impl std::fmt::Display for LinkingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkingKind::Static => write!(f, "static"),
            LinkingKind::Dynamic => write!(f, "dynamic"),
        }
    }
}

/// Whether the caller requires the bundle or can build without it
///
/// Echoed unchanged into the resolved metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Required,
    Optional,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Required => write!(f, "required"),
            Status::Optional => write!(f, "optional"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Architecture, CollectingSink, DiagnosticSink, LinkingKind, NullSink, Platform,
        PlatformVariant, ResolveError, ResolveResult, ResolverConfig, Status,
    };
}
