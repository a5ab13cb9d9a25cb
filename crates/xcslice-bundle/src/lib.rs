//! Resolver for prebuilt multi-platform XCFramework bundles
//!
//! A bundle holds several platform/architecture slices of one library plus
//! an `Info.plist` manifest declaring them. [`BundleResolver`] reconciles
//! that manifest with what is actually on disk and produces
//! [`ResolvedMetadata`]: the primary binary, its linking kind, whether it is
//! mergeable, and the optional macro binary.
//!
//! # Bundle Structure
//!
//! ```text
//! MyFramework.xcframework
//! ├── Info.plist
//! ├── ios-arm64/
//! │   └── MyFramework.framework/
//! │       ├── MyFramework
//! │       └── Macros/
//! │           └── MyFramework          # optional
//! ├── ios-x86_64-simulator/
//! │   └── MyFramework.framework/
//! │       └── MyFramework
//! └── macos-arm64_x86_64/
//!     └── libMyFramework.a
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use xcslice_bundle::BundleResolver;
//! use xcslice_core::{NullSink, Status};
//!
//! let resolver = BundleResolver::new(Arc::new(NullSink));
//! let metadata = resolver.resolve("MyFramework.xcframework", Status::Required, None)?;
//!
//! println!("{} ({})", metadata.primary_binary_path.display(), metadata.linking);
//! # Ok::<(), xcslice_core::ResolveError>(())
//! ```

pub mod fs;
pub mod library;
pub mod macros;
pub mod manifest;
pub mod matcher;
pub mod metadata;
pub mod resolver;

pub use fs::{FileSystem, LocalFileSystem, MemoryFileSystem};
pub use library::{LibraryKind, LibraryPathResolver};
pub use macros::MacroLocator;
pub use manifest::{AvailableLibrary, BundleManifest, ManifestParser};
pub use matcher::{ArchitectureMatcher, SelectedSlice, SelectionContext};
pub use metadata::{MetadataAssembler, ResolvedMetadata};
pub use resolver::BundleResolver;

/// Bundle directory extension.
pub const BUNDLE_EXTENSION: &str = "xcframework";
