//! Error types for undelta library.

use std::io;
use thiserror::Error;

/// Result type alias for undelta operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, parsing or rendering a delta.
///
/// Attribute problems (unknown names, disabled attributes, out-of-range
/// values) never surface here; they are dropped during parsing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input or option files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not JSON, or is JSON of the wrong shape.
    #[error("Invalid delta JSON: {0}")]
    InvalidJson(String),

    /// The delta decoded to null or contains no operations.
    #[error("Delta contains no operations")]
    EmptyDocument,

    /// The requested output format is not known.
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    /// A single operation could not be interpreted.
    ///
    /// Only returned in strict mode; lenient parsing skips the op.
    #[error("Malformed op at index {index}: {reason}")]
    MalformedOp {
        /// Position of the op in the `ops` array
        index: usize,
        /// What was wrong with it
        reason: String,
    },

    /// `parse` was called before a delta was loaded.
    #[error("No delta loaded")]
    NotLoaded,
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidJson(err.to_string())
    }
}

impl Error {
    /// Whether the error only affects a single op and parsing could continue.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::MalformedOp { .. })
    }
}
