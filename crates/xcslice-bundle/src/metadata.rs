//! Resolution result.

use crate::manifest::BundleManifest;
use crate::matcher::SelectedSlice;
use serde::Serialize;
use std::path::PathBuf;
use xcslice_core::{LinkingKind, Status};

/// Everything a build system needs to consume one bundle.
///
/// Produced fresh by every resolution; holds no references back into the
/// resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedMetadata {
    /// Bundle root.
    pub path: PathBuf,

    /// Decoded manifest.
    pub manifest: BundleManifest,

    /// Binary of the selected slice; existed when resolved.
    pub primary_binary_path: PathBuf,

    /// Linking kind of the selected slice.
    pub linking: LinkingKind,

    /// Mergeable flag of the selected slice.
    pub mergeable: bool,

    /// Caller-supplied status, echoed unchanged.
    pub status: Status,

    /// Byte-wise smallest macro binary across all slices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macro_path: Option<PathBuf>,
}

/// Combines the outputs of one resolution into [`ResolvedMetadata`].
#[derive(Debug, Default, Clone, Copy)]
pub struct MetadataAssembler;

impl MetadataAssembler {
    #[must_use]
    pub fn assemble(
        path: PathBuf,
        manifest: BundleManifest,
        selected: SelectedSlice,
        macro_path: Option<PathBuf>,
        status: Status,
    ) -> ResolvedMetadata {
        ResolvedMetadata {
            path,
            manifest,
            primary_binary_path: selected.binary_path,
            linking: selected.linking,
            mergeable: selected.mergeable,
            status,
            macro_path,
        }
    }
}
