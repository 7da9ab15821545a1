//! Error types for xmlcheck
//!
//! Only I/O failures while feeding the parser are surfaced to callers;
//! structural and configuration failures inside the parser are absorbed by
//! the validator (see [`crate::validator`]).

use thiserror::Error;

/// Result type alias using xmlcheck Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for validation operations
#[derive(Error, Debug)]
pub enum Error {
    /// I/O failure while reading or transmitting document bytes
    ///
    /// Validation did not complete; the caller decides whether partial
    /// diagnostics are usable.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource loading error
    #[error("resource error: {0}")]
    Resource(String),
}
