//! Diagnostic sinks for warnings raised while resolving a bundle

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// A warning raised while resolving one bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// File name of the bundle (e.g., "MyFramework.xcframework")
    pub bundle: String,

    /// Slice identifier the warning is about, when there is one
    pub identifier: Option<String>,

    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    /// Create a diagnostic about a specific slice
    pub fn for_slice(
        bundle: impl Into<String>,
        identifier: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            bundle: bundle.into(),
            identifier: Some(identifier.into()),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Receiver for warnings emitted during resolution
///
/// Implementations must not block and must not panic. Resolution never
/// waits on or inspects the outcome of a warning.
pub trait DiagnosticSink: Send + Sync {
    /// Report a warning
    fn warn(&self, diagnostic: Diagnostic);
}

/// Sink that discards every diagnostic
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn warn(&self, _diagnostic: Diagnostic) {}
}

/// Sink that keeps every diagnostic in memory, in emission order
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }

    /// Number of diagnostics reported so far
    pub fn len(&self) -> usize {
        self.diagnostics.lock().len()
    }

    /// Whether nothing has been reported
    pub fn is_empty(&self) -> bool {
        self.diagnostics.lock().is_empty()
    }

    /// Remove and return everything reported so far
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.lock())
    }
}

impl DiagnosticSink for CollectingSink {
    fn warn(&self, diagnostic: Diagnostic) {
        self.diagnostics.lock().push(diagnostic);
    }
}
