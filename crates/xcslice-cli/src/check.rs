//! Manifest validation command

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use xcslice_bundle::{BUNDLE_EXTENSION, BundleResolver};
use xcslice_core::{NullSink, ResolverConfig};

/// Decode a bundle manifest and list its slices
///
/// Only the manifest is read; slice binaries are not checked.
pub fn run(bundle: &Path, config: ResolverConfig) -> Result<()> {
    if bundle.extension().is_none_or(|ext| ext != BUNDLE_EXTENSION) {
        eprintln!(
            "Warning: {} does not have a .{} extension",
            bundle.display(),
            BUNDLE_EXTENSION
        );
    }

    let resolver = BundleResolver::new(Arc::new(NullSink))
        .with_config(config)
        .context("Invalid resolver configuration")?;

    let manifest = resolver
        .parse_manifest(bundle)
        .with_context(|| format!("Failed to check {}", bundle.display()))?;

    println!("Manifest is valid!");
    if let Some(version) = &manifest.format_version {
        println!("  Format version: {version}");
    }
    println!("  Slices: {}", manifest.libraries.len());
    for library in &manifest.libraries {
        let architectures = library
            .architectures
            .iter()
            .map(|arch| arch.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "    - {}: {} ({}, {}) [{}]",
            library.identifier,
            library.relative_path.display(),
            library.binary_name(),
            library.linking(),
            architectures
        );
    }

    Ok(())
}
