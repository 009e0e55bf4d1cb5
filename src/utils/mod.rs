//! The `utils` module holds the pieces shared by the rest of the crate:
//! the error type returned by the mapper and the logging bootstrap.

pub mod error;
pub mod logging;

#[cfg(test)]
mod tests;
