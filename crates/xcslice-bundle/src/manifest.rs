//! Manifest schema for XCFramework bundles.
//!
//! The manifest is the `Info.plist` property list at the bundle root. Its
//! `AvailableLibraries` array declares one entry per slice:
//!
//! ```text
//! AvailableLibraries
//! ├── LibraryIdentifier          ios-x86_64-simulator
//! ├── LibraryPath                MyFramework.framework
//! ├── SupportedPlatform          ios                (optional)
//! ├── SupportedPlatformVariant   simulator          (optional)
//! ├── SupportedArchitectures     [x86_64]
//! └── MergeableMetadata          false              (optional)
//! ```
//!
//! Keys not listed above are ignored.

use crate::fs::FileSystem;
use crate::library::{self, LibraryKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use xcslice_core::{
    Architecture, LinkingKind, Platform, PlatformVariant, ResolveError, ResolveResult,
};

/// Decoded bundle manifest.
///
/// Libraries keep the order the manifest declares them in, and identifiers
/// are unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleManifest {
    /// `XCFrameworkFormatVersion`, when declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_version: Option<String>,

    /// Declared slices in manifest order.
    pub libraries: Vec<AvailableLibrary>,
}

/// One declared slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailableLibrary {
    /// Slice identifier, also the slice's directory name (e.g., "ios-arm64").
    pub identifier: String,

    /// Path of the framework, dylib, or archive inside the slice directory.
    pub relative_path: PathBuf,

    /// Binary shape derived from `relative_path`.
    pub kind: LibraryKind,

    /// Declared platform. Bare dylib slices often omit it.
    pub platform: Option<Platform>,

    /// Declared platform variant; absent for device slices.
    pub variant: Option<PlatformVariant>,

    /// Declared architectures, never empty.
    pub architectures: Vec<Architecture>,

    /// Whether the slice supports being merged into the consumer at link time.
    pub mergeable: bool,
}

impl AvailableLibrary {
    /// Binary name (see [`library::binary_name`]).
    #[must_use]
    pub fn binary_name(&self) -> String {
        library::binary_name(self)
    }

    /// Linking kind implied by the slice's [`LibraryKind`].
    #[must_use]
    pub fn linking(&self) -> LinkingKind {
        self.kind.linking()
    }

    /// Whether this is a simulator slice.
    ///
    /// Uses the declared variant, falling back to the `-simulator`
    /// identifier suffix for slices that declare none.
    #[must_use]
    pub fn is_simulator(&self) -> bool {
        match self.variant {
            Some(PlatformVariant::Simulator) => true,
            Some(PlatformVariant::MacCatalyst) => false,
            None => self.identifier.ends_with("-simulator"),
        }
    }
}

impl BundleManifest {
    /// Decode a manifest from property list bytes (XML or binary).
    ///
    /// `path` is only used for error messages.
    pub fn from_bytes(bytes: &[u8], path: &Path) -> ResolveResult<Self> {
        let raw: RawManifest = plist::from_bytes(bytes)
            .map_err(|e| ResolveError::manifest_parse(path, e.to_string()))?;

        let mut seen = HashSet::new();
        let mut libraries = Vec::with_capacity(raw.available_libraries.len());
        for (index, entry) in raw.available_libraries.into_iter().enumerate() {
            let library = entry
                .into_library()
                .map_err(|reason| {
                    ResolveError::manifest_parse(path, format!("library #{index}: {reason}"))
                })?;
            if !seen.insert(library.identifier.clone()) {
                return Err(ResolveError::manifest_parse(
                    path,
                    format!("duplicate library identifier: {}", library.identifier),
                ));
            }
            libraries.push(library);
        }

        Ok(Self {
            format_version: raw.format_version,
            libraries,
        })
    }

    /// Look up a slice by identifier.
    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&AvailableLibrary> {
        self.libraries
            .iter()
            .find(|library| library.identifier == identifier)
    }

    /// Slice identifiers in manifest order.
    #[must_use]
    pub fn identifiers(&self) -> Vec<&str> {
        self.libraries
            .iter()
            .map(|library| library.identifier.as_str())
            .collect()
    }
}

/// Reads and decodes a bundle's manifest.
pub struct ManifestParser<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    manifest_file: &'a str,
}

impl<'a, F: FileSystem + ?Sized> ManifestParser<'a, F> {
    #[must_use]
    pub fn new(fs: &'a F, manifest_file: &'a str) -> Self {
        Self { fs, manifest_file }
    }

    /// Read `<bundle_root>/<manifest_file>` and decode it.
    pub fn parse(&self, bundle_root: &Path) -> ResolveResult<BundleManifest> {
        let path = bundle_root.join(self.manifest_file);
        let bytes = self
            .fs
            .read(&path)
            .map_err(|e| ResolveError::manifest_parse(&path, e.to_string()))?;

        let manifest = BundleManifest::from_bytes(&bytes, &path)?;
        tracing::debug!(
            "Decoded {} with {} libraries",
            path.display(),
            manifest.libraries.len()
        );
        Ok(manifest)
    }
}

#[derive(Debug, Deserialize)]
struct RawManifest {
    #[serde(rename = "AvailableLibraries")]
    available_libraries: Vec<RawLibrary>,

    #[serde(rename = "XCFrameworkFormatVersion", default)]
    format_version: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawLibrary {
    #[serde(rename = "LibraryIdentifier")]
    identifier: String,

    #[serde(rename = "LibraryPath")]
    path: String,

    #[serde(rename = "SupportedPlatform", default)]
    platform: Option<String>,

    #[serde(rename = "SupportedPlatformVariant", default)]
    variant: Option<String>,

    #[serde(rename = "SupportedArchitectures")]
    architectures: Vec<String>,

    #[serde(rename = "MergeableMetadata", default)]
    mergeable: bool,
}

impl RawLibrary {
    fn into_library(self) -> Result<AvailableLibrary, String> {
        if self.identifier.is_empty() {
            return Err("LibraryIdentifier is empty".to_string());
        }
        if self.path.is_empty() {
            return Err(format!("{}: LibraryPath is empty", self.identifier));
        }

        let relative_path = PathBuf::from(&self.path);
        let kind = LibraryKind::from_path(&relative_path).ok_or_else(|| {
            format!(
                "{}: file type of {} not recognised",
                self.identifier, self.path
            )
        })?;

        let platform = self
            .platform
            .as_deref()
            .map(|s| {
                Platform::parse(s)
                    .ok_or_else(|| format!("{}: unknown platform {s}", self.identifier))
            })
            .transpose()?;

        let variant = self
            .variant
            .as_deref()
            .map(|s| {
                PlatformVariant::parse(s)
                    .ok_or_else(|| format!("{}: unknown platform variant {s}", self.identifier))
            })
            .transpose()?;

        if self.architectures.is_empty() {
            return Err(format!(
                "{}: SupportedArchitectures is empty",
                self.identifier
            ));
        }
        let architectures = self
            .architectures
            .iter()
            .map(|token| {
                Architecture::parse(token)
                    .ok_or_else(|| format!("{}: unknown architecture {token}", self.identifier))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AvailableLibrary {
            identifier: self.identifier,
            relative_path,
            kind,
            platform,
            variant,
            architectures,
            mergeable: self.mergeable,
        })
    }
}
