//! Parse error types (deterministic only, no I/O)

use std::num::ParseIntError;
use thiserror::Error;

/// Fatal parse errors for a single document
#[derive(Error, Debug)]
pub enum ParseError {
    /// A local address line arrived before any municipality was known
    #[error("no municipality established before address line: {line}")]
    MunicipalityMissing {
        /// The offending line
        line: String,
    },

    /// A group marker whose digits do not form an integer
    #[error("malformed group number in marker line: {line}")]
    InvalidGroupNumber {
        /// The offending line
        line: String,
        /// The underlying integer parse failure
        #[source]
        source: ParseIntError,
    },
}

/// Result type for parse operations
pub type Result<T> = std::result::Result<T, ParseError>;
