//! Error types for gbstrim

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for gbstrim operations
pub type Result<T> = std::result::Result<T, GbsTrimError>;

/// Errors that stop a run
#[derive(Debug, Error)]
pub enum GbsTrimError {
    /// Missing or malformed configuration (restriction site etc.)
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Input or output file could not be opened
    #[error("Cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O error while reading or writing records
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// FASTQ record breaks the 4-line layout or the length invariant
    #[error("Malformed FASTQ record #{record}: {msg}")]
    MalformedRecord { record: usize, msg: String },
}

/// Why an alignment produced no usable result.
///
/// These never abort a run; the classifier treats them as "pattern not found".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlignmentError {
    #[error("sequence of length {len} is shorter than the {needed} bases to skip")]
    TooShort { len: usize, needed: usize },

    #[error("pattern not found")]
    NoHit,
}
