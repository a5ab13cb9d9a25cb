//! Binary location and naming for a single slice.

use crate::manifest::AvailableLibrary;
use serde::Serialize;
use std::path::{Path, PathBuf};
use xcslice_core::LinkingKind;

/// Shape of the binary a slice ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LibraryKind {
    /// A `.framework` bundle directory holding the binary.
    Framework,
    /// A `.dylib` file.
    DynamicLibrary,
    /// A `.a` static archive.
    StaticArchive,
}

impl LibraryKind {
    /// Derive the kind from a slice's relative path.
    ///
    /// Returns `None` for any suffix other than `.framework`, `.dylib`, or `.a`.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("framework") => Some(Self::Framework),
            Some("dylib") => Some(Self::DynamicLibrary),
            Some("a") => Some(Self::StaticArchive),
            _ => None,
        }
    }

    /// How consumers link against this kind of binary.
    #[must_use]
    pub fn linking(&self) -> LinkingKind {
        match self {
            Self::Framework | Self::DynamicLibrary => LinkingKind::Dynamic,
            Self::StaticArchive => LinkingKind::Static,
        }
    }
}

/// Computes on-disk locations for slices of one bundle.
///
/// Pure path composition; existence is checked by the caller.
#[derive(Debug, Clone, Copy)]
pub struct LibraryPathResolver<'a> {
    bundle_root: &'a Path,
}

impl<'a> LibraryPathResolver<'a> {
    #[must_use]
    pub fn new(bundle_root: &'a Path) -> Self {
        Self { bundle_root }
    }

    /// Path to the slice's binary.
    ///
    /// Frameworks keep the binary inside the bundle directory
    /// (`<root>/<id>/<Name>.framework/<Name>`); archives and dylibs are the
    /// binary themselves (`<root>/<id>/libName.a`).
    #[must_use]
    pub fn binary_path(&self, library: &AvailableLibrary) -> PathBuf {
        let path = self
            .bundle_root
            .join(&library.identifier)
            .join(&library.relative_path);
        match library.kind {
            LibraryKind::Framework => path.join(binary_name(library)),
            LibraryKind::DynamicLibrary | LibraryKind::StaticArchive => path,
        }
    }

    /// The slice directory, `<root>/<id>`.
    #[must_use]
    pub fn slice_dir(&self, library: &AvailableLibrary) -> PathBuf {
        self.bundle_root.join(&library.identifier)
    }

    /// Directories scanned for the slice's macro binary.
    ///
    /// The slice directory, then for frameworks the framework directory
    /// inside it.
    #[must_use]
    pub fn macro_search_dirs(&self, library: &AvailableLibrary) -> Vec<PathBuf> {
        let slice = self.slice_dir(library);
        match library.kind {
            LibraryKind::Framework => {
                let framework = slice.join(&library.relative_path);
                vec![slice, framework]
            }
            LibraryKind::DynamicLibrary | LibraryKind::StaticArchive => vec![slice],
        }
    }

    /// The binary path relative to the bundle root, for messages.
    #[must_use]
    pub fn relative_binary_path(&self, library: &AvailableLibrary) -> PathBuf {
        let path = self.binary_path(library);
        match path.strip_prefix(self.bundle_root) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => path.clone(),
        }
    }
}

/// Binary name of a slice.
///
/// The file stem of the relative path, with a leading `lib` dropped for
/// archives and dylibs: `libMyMath.a` gives `MyMath`, `MyFramework.framework`
/// gives `MyFramework`. A bare `lib.a` keeps its stem.
#[must_use]
pub fn binary_name(library: &AvailableLibrary) -> String {
    let stem = library
        .relative_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    match library.kind {
        LibraryKind::Framework => stem,
        LibraryKind::DynamicLibrary | LibraryKind::StaticArchive => {
            match stem.strip_prefix("lib") {
                Some(rest) if !rest.is_empty() => rest.to_string(),
                _ => stem,
            }
        }
    }
}
