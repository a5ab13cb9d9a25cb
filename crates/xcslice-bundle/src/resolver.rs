//! Bundle resolution entry point.

use crate::fs::{FileSystem, LocalFileSystem};
use crate::macros::MacroLocator;
use crate::manifest::{BundleManifest, ManifestParser};
use crate::matcher::{ArchitectureMatcher, SelectionContext};
use crate::metadata::{MetadataAssembler, ResolvedMetadata};
use std::path::Path;
use std::sync::Arc;
use xcslice_core::{DiagnosticSink, ResolveResult, ResolverConfig, Status};

/// Resolves bundles into [`ResolvedMetadata`].
///
/// Stateless across calls: every [`resolve`](Self::resolve) rereads the
/// manifest and rechecks the disk. One resolver can serve many threads as
/// long as its diagnostic sink can.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use xcslice_bundle::{BundleResolver, SelectionContext};
/// use xcslice_core::{CollectingSink, Platform, Status};
///
/// let sink = Arc::new(CollectingSink::new());
/// let resolver = BundleResolver::new(sink.clone());
///
/// let metadata = resolver.resolve(
///     "Frameworks/MyMath.xcframework",
///     Status::Required,
///     Some(&SelectionContext::platform(Platform::MacOS)),
/// )?;
/// println!("{}", metadata.primary_binary_path.display());
/// # Ok::<(), xcslice_core::ResolveError>(())
/// ```
pub struct BundleResolver<F: FileSystem = LocalFileSystem> {
    fs: F,
    config: ResolverConfig,
    sink: Arc<dyn DiagnosticSink>,
}

impl BundleResolver<LocalFileSystem> {
    /// Create a resolver reading the local disk with the default configuration.
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self::with_file_system(LocalFileSystem, sink)
    }
}

impl<F: FileSystem> BundleResolver<F> {
    /// Create a resolver over a specific file system.
    pub fn with_file_system(fs: F, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            fs,
            config: ResolverConfig::default(),
            sink,
        }
    }

    /// Replace the configuration, validating it first.
    pub fn with_config(mut self, config: ResolverConfig) -> ResolveResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Current configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Decode a bundle's manifest without selecting a slice.
    pub fn parse_manifest(&self, bundle_path: impl AsRef<Path>) -> ResolveResult<BundleManifest> {
        ManifestParser::new(&self.fs, &self.config.manifest_file).parse(bundle_path.as_ref())
    }

    /// Resolve a bundle.
    ///
    /// Decodes the manifest, selects the primary slice (see
    /// [`ArchitectureMatcher`]), and scans every slice for a macro binary.
    /// Fails with [`ManifestParse`](xcslice_core::ResolveError::ManifestParse) (including when the bundle
    /// directory is absent) or [`ArchitectureNotFound`](xcslice_core::ResolveError::ArchitectureNotFound); a
    /// missing preferred slice only produces a warning.
    ///
    /// `bundle_path` is used as given: paths in the result and in errors
    /// are built from it without canonicalization.
    pub fn resolve(
        &self,
        bundle_path: impl AsRef<Path>,
        status: Status,
        context: Option<&SelectionContext>,
    ) -> ResolveResult<ResolvedMetadata> {
        let bundle = bundle_path.as_ref();
        tracing::debug!("Resolving {}", bundle.display());

        let manifest = ManifestParser::new(&self.fs, &self.config.manifest_file).parse(bundle)?;

        let selected = ArchitectureMatcher::new(&self.fs, &self.config, self.sink.as_ref())
            .select(bundle, &manifest.libraries, context)?;

        let macro_path =
            MacroLocator::new(&self.fs, &self.config.macros_dir).locate(bundle, &manifest.libraries);

        Ok(MetadataAssembler::assemble(
            bundle.to_path_buf(),
            manifest,
            selected,
            macro_path,
            status,
        ))
    }
}
