//! Framing error types
//!
//! Malformed log data is never an error here: unrecognized or truncated
//! segments are reported through [`SegmentOutcome`](super::SegmentOutcome).

use thiserror::Error;

/// Framing errors
#[derive(Error, Debug)]
pub enum Error {
    /// Byte source failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Filter configuration names a type the registry does not know
    #[error("unknown type name: {name}")]
    UnknownTypeName {
        /// Offending name
        name: String,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
