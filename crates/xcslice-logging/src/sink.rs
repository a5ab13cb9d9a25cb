//! Diagnostic sink backed by `tracing`

use xcslice_core::{Diagnostic, DiagnosticSink};

/// Emits every diagnostic as a `WARN` event
///
/// The bundle name and slice identifier are recorded as structured fields
/// so subscribers can filter on them.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingSink {
    fn warn(&self, diagnostic: Diagnostic) {
        match diagnostic.identifier.as_deref() {
            Some(identifier) => tracing::warn!(
                target: "xcslice",
                bundle = %diagnostic.bundle,
                identifier = %identifier,
                "{}",
                diagnostic.message
            ),
            None => tracing::warn!(
                target: "xcslice",
                bundle = %diagnostic.bundle,
                "{}",
                diagnostic.message
            ),
        }
    }
}
