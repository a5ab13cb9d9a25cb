//! Primary slice selection.
//!
//! Candidates are the declared slices that pass the configured architecture
//! filter and the caller's [`SelectionContext`]. Without a context, the
//! simulator slice built only for the preferred simulator architecture
//! (x86_64 by default) moves to the front; otherwise manifest order is kept.
//! The first candidate whose binary exists wins, and every missing
//! candidate tried before it is reported to the diagnostic sink.

use crate::fs::FileSystem;
use crate::library::LibraryPathResolver;
use crate::manifest::AvailableLibrary;
use std::path::{Path, PathBuf};
use xcslice_core::{
    Diagnostic, DiagnosticSink, LinkingKind, Platform, ResolveError, ResolveResult,
    ResolverConfig,
};

/// Caller-supplied narrowing of the candidate slices.
///
/// Every populated field must match for a slice to remain a candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionContext {
    /// Target platform. Slices without a declared platform match on their
    /// identifier prefix instead.
    pub platform: Option<Platform>,

    /// Required identifier prefix (e.g., "macos" or "ios-arm64").
    pub identifier_prefix: Option<String>,

    /// `Some(true)` keeps only simulator slices, `Some(false)` only the rest.
    pub simulator: Option<bool>,
}

impl SelectionContext {
    /// Context selecting a platform.
    #[must_use]
    pub fn platform(platform: Platform) -> Self {
        Self {
            platform: Some(platform),
            ..Self::default()
        }
    }

    /// Context selecting an identifier prefix.
    #[must_use]
    pub fn identifier_prefix(prefix: impl Into<String>) -> Self {
        Self {
            identifier_prefix: Some(prefix.into()),
            ..Self::default()
        }
    }

    /// Also require the simulator (or device) variant.
    #[must_use]
    pub fn with_simulator(mut self, simulator: bool) -> Self {
        self.simulator = Some(simulator);
        self
    }

    /// Whether no field is populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.platform.is_none() && self.identifier_prefix.is_none() && self.simulator.is_none()
    }

    /// Whether a slice satisfies every populated field.
    #[must_use]
    pub fn matches(&self, library: &AvailableLibrary) -> bool {
        let platform_ok = match (self.platform, library.platform) {
            (None, _) => true,
            (Some(wanted), Some(declared)) => wanted == declared,
            (Some(wanted), None) => wanted.matches_identifier(&library.identifier),
        };
        let prefix_ok = self
            .identifier_prefix
            .as_deref()
            .is_none_or(|prefix| library.identifier.starts_with(prefix));
        let simulator_ok = self
            .simulator
            .is_none_or(|simulator| library.is_simulator() == simulator);

        platform_ok && prefix_ok && simulator_ok
    }
}

/// The slice chosen as primary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedSlice {
    pub identifier: String,
    /// Binary path, known to exist when selected.
    pub binary_path: PathBuf,
    pub linking: LinkingKind,
    pub mergeable: bool,
}

/// Picks the primary slice of a bundle.
pub struct ArchitectureMatcher<'a, F: FileSystem + ?Sized> {
    fs: &'a F,
    config: &'a ResolverConfig,
    sink: &'a dyn DiagnosticSink,
}

impl<'a, F: FileSystem + ?Sized> ArchitectureMatcher<'a, F> {
    pub fn new(fs: &'a F, config: &'a ResolverConfig, sink: &'a dyn DiagnosticSink) -> Self {
        Self { fs, config, sink }
    }

    /// Candidate slices in the order they will be checked.
    pub fn candidates<'m>(
        &self,
        libraries: &'m [AvailableLibrary],
        context: Option<&SelectionContext>,
    ) -> Vec<&'m AvailableLibrary> {
        let mut candidates: Vec<&AvailableLibrary> = libraries
            .iter()
            .filter(|library| self.config.supports_any(&library.architectures))
            .filter(|library| context.is_none_or(|ctx| ctx.matches(library)))
            .collect();

        let narrowed = context.is_some_and(|ctx| !ctx.is_empty());
        if !narrowed && let Some(arch) = self.config.preferred_simulator_architecture {
            // Stable: ties keep manifest order.
            candidates.sort_by_key(|library| {
                !(library.is_simulator() && library.architectures.as_slice() == [arch])
            });
        }

        candidates
    }

    /// Select the first candidate whose binary exists.
    ///
    /// Fails with [`ResolveError::ArchitectureNotFound`] when none does.
    pub fn select(
        &self,
        bundle_root: &Path,
        libraries: &[AvailableLibrary],
        context: Option<&SelectionContext>,
    ) -> ResolveResult<SelectedSlice> {
        let paths = LibraryPathResolver::new(bundle_root);
        let bundle_name = bundle_name(bundle_root);

        for library in self.candidates(libraries, context) {
            let binary_path = paths.binary_path(library);
            tracing::trace!("Probing {}", binary_path.display());

            if self.fs.exists(&binary_path) {
                tracing::debug!(
                    "Selected {} as primary slice of {}",
                    library.identifier,
                    bundle_name
                );
                return Ok(SelectedSlice {
                    identifier: library.identifier.clone(),
                    binary_path,
                    linking: library.linking(),
                    mergeable: library.mergeable,
                });
            }

            self.sink.warn(Diagnostic::for_slice(
                bundle_name.clone(),
                library.identifier.clone(),
                format!(
                    "{} is missing architecture {} defined in the {}",
                    bundle_name,
                    paths.relative_binary_path(library).display(),
                    self.config.manifest_file
                ),
            ));
        }

        Err(ResolveError::ArchitectureNotFound {
            bundle: bundle_root.to_path_buf(),
        })
    }
}

/// File name of the bundle, used to label diagnostics.
pub(crate) fn bundle_name(bundle_root: &Path) -> String {
    bundle_root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| bundle_root.display().to_string())
}
