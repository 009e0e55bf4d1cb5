//! Errors reported by the message mapper.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MappingError {
    /// A reserved IoT Hub annotation carried a value of the wrong type.
    #[error("malformed annotation '{key}': expected {expected}, found {found}")]
    MalformedAnnotation {
        key: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, MappingError>;
