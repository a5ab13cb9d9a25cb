//! Bundle resolution command

use anyhow::{Context, Result};
use std::fmt::Write;
use std::path::Path;
use std::sync::Arc;
use xcslice_bundle::{BundleResolver, ResolvedMetadata, SelectionContext};
use xcslice_core::{Platform, ResolverConfig, Status};
use xcslice_logging::TracingSink;

/// Options for `xcslice inspect`
#[derive(Debug, Default)]
pub struct InspectOptions {
    pub platform: Option<String>,
    pub prefix: Option<String>,
    pub simulator: Option<bool>,
    pub optional: bool,
    pub json: bool,
}

impl InspectOptions {
    /// Build the selection context, `None` when no filter was given
    pub fn context(&self) -> Result<Option<SelectionContext>> {
        let mut context = SelectionContext::default();

        if let Some(name) = &self.platform {
            let platform = Platform::parse(name).with_context(|| {
                format!(
                    "Unknown platform: {name} (expected one of: {})",
                    Platform::all()
                        .iter()
                        .map(Platform::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })?;
            context.platform = Some(platform);
        }
        context.identifier_prefix = self.prefix.clone();
        context.simulator = self.simulator;

        Ok((!context.is_empty()).then_some(context))
    }

    fn status(&self) -> Status {
        if self.optional {
            Status::Optional
        } else {
            Status::Required
        }
    }
}

/// Resolve a bundle and print its metadata to stdout
pub fn run(bundle: &Path, config: ResolverConfig, options: &InspectOptions) -> Result<()> {
    let context = options.context()?;

    let resolver = BundleResolver::new(Arc::new(TracingSink))
        .with_config(config)
        .context("Invalid resolver configuration")?;

    let metadata = resolver
        .resolve(bundle, options.status(), context.as_ref())
        .with_context(|| format!("Failed to resolve {}", bundle.display()))?;

    if options.json {
        let json =
            serde_json::to_string_pretty(&metadata).context("Failed to serialize metadata")?;
        println!("{json}");
    } else {
        print!("{}", render(&metadata));
    }

    Ok(())
}

/// Plain-text rendering of resolved metadata
pub fn render(metadata: &ResolvedMetadata) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Bundle:    {}", metadata.path.display());
    let _ = writeln!(out, "Binary:    {}", metadata.primary_binary_path.display());
    let _ = writeln!(out, "Linking:   {}", metadata.linking);
    let _ = writeln!(out, "Mergeable: {}", metadata.mergeable);
    let _ = writeln!(out, "Status:    {}", metadata.status);
    match &metadata.macro_path {
        Some(path) => {
            let _ = writeln!(out, "Macro:     {}", path.display());
        }
        None => {
            let _ = writeln!(out, "Macro:     -");
        }
    }
    let _ = writeln!(out, "Slices:");
    for library in &metadata.manifest.libraries {
        let selected = metadata
            .primary_binary_path
            .strip_prefix(&metadata.path)
            .is_ok_and(|relative| relative.starts_with(&library.identifier));
        let architectures = library
            .architectures
            .iter()
            .map(|arch| arch.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(
            out,
            "  {} {} ({}) [{}]",
            if selected { "*" } else { " " },
            library.identifier,
            library.relative_path.display(),
            architectures
        );
    }
    out
}
