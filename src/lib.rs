//! # iothub-amqp
//!
//! `iothub-amqp` translates between raw AMQP messages, as a transport hands
//! them over, and the typed IoT Hub message model used by device and service
//! code. Both directions are pure functions: no I/O, no state between calls.
//!
//! ## Core Modules
//!
//! - `wire`: the protocol-native AMQP message and its loosely typed values.
//! - `domain`: the typed IoT Hub message and the connection auth record.
//! - `mapper`: inbound (wire -> domain) and outbound (domain -> wire) translation.
//! - `diagnostics`: pluggable sink for recoverable anomalies.
//! - `config`: loading settings from files and environment variables.
//! - `utils`: error type and logging bootstrap.

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod mapper;
pub mod utils;
pub mod wire;

pub use domain::DomainMessage;
pub use mapper::{Mapper, map_from_wire, map_to_wire};
pub use utils::error::MappingError;
pub use wire::WireMessage;

#[cfg(test)]
mod tests;
