//! The `mapper` module translates between `WireMessage` and `DomainMessage`.
//!
//! - `inbound`: wire -> domain, run once per received message.
//! - `outbound`: domain -> wire, run once per message to send.
//! - `coerce`: type coercions shared by both directions.
//! - `annotation`: the reserved IoT Hub annotation keys.
//!
//! The two directions are not inverses. Hub-stamped fields never go back out,
//! and a UUID correlation id comes back as a string.

pub mod annotation;
pub mod coerce;
mod inbound;
mod outbound;

use std::fmt;
use std::sync::Arc;

use crate::config::MapperSettings;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::domain::DomainMessage;
use crate::utils::error::Result;
use crate::wire::WireMessage;

pub use annotation::ReservedAnnotation;

/// Stateless translator. Holds only immutable settings and the diagnostic sink,
/// so one instance can be shared across threads behind an `Arc`.
#[derive(Clone)]
pub struct Mapper {
    settings: MapperSettings,
    sink: Arc<dyn DiagnosticSink>,
}

impl Mapper {
    pub fn new(settings: MapperSettings, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { settings, sink }
    }

    pub fn settings(&self) -> &MapperSettings {
        &self.settings
    }
}

impl Default for Mapper {
    fn default() -> Self {
        Self::new(MapperSettings::default(), Arc::new(TracingSink))
    }
}

impl fmt::Debug for Mapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapper")
            .field("settings", &self.settings)
            .field("sink", &"dyn DiagnosticSink")
            .finish()
    }
}

/// Converts a received message with default settings, logging through `tracing`.
pub fn map_from_wire(wire: &WireMessage) -> Result<DomainMessage> {
    Mapper::default().from_wire(wire)
}

/// Converts a message to send with default settings.
pub fn map_to_wire(msg: &DomainMessage) -> WireMessage {
    Mapper::default().to_wire(msg)
}
