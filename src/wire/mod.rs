//! The `wire` module models the AMQP message as the transport hands it over.
//!
//! Everything here is protocol-native: the payload is a list of body chunks,
//! header identifiers are AMQP message-id variants, and both metadata bags hold
//! loosely typed values. Nothing in this module interprets IoT Hub semantics;
//! that is the job of the `mapper` module.

pub mod message;
pub mod value;

pub use message::{HeaderProperties, MessageId, WireMessage};
pub use value::{AnnotationKey, WireValue};

#[cfg(test)]
mod tests;
