//! Error types for bindata.

use thiserror::Error;

/// Errors that can occur when working with fields, streams, and files.
#[derive(Debug, Error)]
pub enum Error {
    /// A field was constructed with zero size, or an operation was attempted
    /// on a field whose buffer has been taken.
    #[error("invalid field: {0}")]
    InvalidField(&'static str),

    /// A rendering format unsupported by the field variant was requested.
    #[error("invalid format: {0}")]
    InvalidFormat(&'static str),

    /// A file was constructed without a usable underlying storage resource.
    #[error("invalid file: {0}")]
    InvalidFile(&'static str),

    /// A file state or bounds precondition was violated.
    #[error("invalid file operation: {0}")]
    InvalidFileOperation(&'static str),

    /// I/O error from the underlying storage resource.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the bindata Error type.
pub type Result<T> = std::result::Result<T, Error>;
