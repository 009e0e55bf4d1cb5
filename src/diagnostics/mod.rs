//! The `diagnostics` module carries the non-fatal anomalies the mapper notices
//! while translating a message.
//!
//! The mapper never writes to a log directly. It reports a [`Diagnostic`] to a
//! [`DiagnosticSink`] chosen by the caller: [`TracingSink`] forwards to
//! `tracing`, [`MemorySink`] keeps everything in memory so tests and embedding
//! callers can inspect what happened.

pub mod sink;

pub use sink::{Diagnostic, DiagnosticSink, MemorySink, TracingSink};
