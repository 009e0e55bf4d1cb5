use std::fmt;
use std::sync::Mutex;

use tracing::warn;

/// A recoverable anomaly found in an inbound message.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The correlation id was neither a string nor a UUID and was dropped.
    UnexpectedCorrelationId { found: &'static str },
    /// The auth-method annotation could not be decoded; the raw value went to
    /// the property map instead.
    AuthMethodUndecodable { reason: String },
    /// A reserved annotation had the wrong type and was passed through as a
    /// plain property (non-strict mode only).
    MalformedAnnotation {
        key: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCorrelationId { found } => {
                write!(f, "unexpected type for correlation id: {found}")
            }
            Self::AuthMethodUndecodable { reason } => {
                write!(f, "cannot decode connection auth method: {reason}")
            }
            Self::MalformedAnnotation { key, found } => {
                write!(f, "annotation '{key}' has unexpected type {found}")
            }
        }
    }
}

/// Destination for diagnostics. Shared between threads, so implementations
/// must be safe to call concurrently.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing` at WARN level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        warn!(%diagnostic, "message mapping anomaly");
    }
}

/// Keeps every diagnostic in memory, in emission order.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn entries(&self) -> Vec<Diagnostic> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, diagnostic: Diagnostic) {
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.push(diagnostic);
    }
}
