//! The `domain` module defines the typed IoT Hub message handed to, and
//! accepted from, application code.

pub mod message;

pub use message::{ConnectionAuthMethod, DomainMessage};
