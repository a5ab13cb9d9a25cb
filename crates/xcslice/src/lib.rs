//! # xcslice
//!
//! Resolves prebuilt multi-platform XCFramework bundles for build systems.
//!
//! Given a bundle directory, xcslice reads its `Info.plist`, picks the slice
//! whose binary is actually on disk, and reports:
//! - the primary binary path and whether it links statically or dynamically
//! - whether the slice is mergeable
//! - the macro binary shipped alongside any slice, if there is one
//!
//! A declared slice whose binary is missing is not an error: it produces a
//! warning and the next candidate is tried.
//!
//! ## Quick Start
//!
//! ```no_run
//! use xcslice::prelude::*;
//!
//! let metadata = xcslice::resolve("Frameworks/MyFramework.xcframework", Status::Required, None)?;
//! println!("{} ({})", metadata.primary_binary_path.display(), metadata.linking);
//! # Ok::<(), ResolveError>(())
//! ```
//!
//! For custom configuration or to capture warnings, build a
//! [`BundleResolver`] with your own [`DiagnosticSink`].
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`xcslice_core`] - Enums, errors, configuration, and diagnostic sinks
//! - [`xcslice_bundle`] - Manifest decoding, slice selection, and macro discovery
//! - [`xcslice_logging`] - `tracing` integration

use std::path::Path;
use std::sync::Arc;

// Re-export core types
pub use xcslice_core::{
    Architecture, CollectingSink, Diagnostic, DiagnosticSink, LinkingKind, NullSink, Platform,
    PlatformVariant, ResolveError, ResolveResult, ResolverConfig, Status,
};

// Re-export bundle types
pub use xcslice_bundle::{
    AvailableLibrary, BUNDLE_EXTENSION, BundleManifest, BundleResolver, FileSystem, LibraryKind,
    LocalFileSystem, MemoryFileSystem, ResolvedMetadata, SelectionContext,
};

// Re-export logging
pub use xcslice_logging::{TracingSink, init_logging};

/// Resolve a bundle on the local disk with the default configuration
///
/// Warnings about missing slices are emitted as `tracing` events through
/// [`TracingSink`].
pub fn resolve(
    bundle_path: impl AsRef<Path>,
    status: Status,
    context: Option<&SelectionContext>,
) -> ResolveResult<ResolvedMetadata> {
    BundleResolver::new(Arc::new(TracingSink)).resolve(bundle_path, status, context)
}

/// Prelude module for convenient imports.
///
/// Use `use xcslice::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        BundleResolver, DiagnosticSink, LinkingKind, Platform, ResolveError, ResolveResult,
        ResolvedMetadata, ResolverConfig, SelectionContext, Status,
    };
}
