//! Unified error types for the HMI core.
//!
//! A single `Error` enum that every fallible path funnels into, keeping
//! error handling at the call sites uniform. All variants are `Copy` so
//! they can be passed around freely without allocation.

use std::fmt;

/// Every fallible operation in the crate funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An inbound request was missing an expected nested field, or could
    /// not be parsed at all. The payload names the offending field.
    InvalidRequestShape(&'static str),
    /// A configuration field failed range validation.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRequestShape(field) => write!(f, "invalid request shape: {field}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, Error>;
