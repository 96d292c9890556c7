//! Error types for the shelfdb catalog.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The result type used throughout shelfdb.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for catalog operations.
///
/// A lookup or update that targets an absent id is not an error; those
/// operations report the negative result through `Option` or `bool`.
#[derive(Debug, Error)]
pub enum Error {
    /// The load source could not be opened or read.
    ///
    /// Callers usually recover from this by starting with an empty catalog.
    #[error("Source unavailable: {path:?}: {source}")]
    SourceUnavailable {
        /// The path that was being loaded.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Persisted data did not have the expected record layout.
    #[error("Data corruption: {0}")]
    Corruption(String),

    /// Encoding the catalog failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// An invalid argument was provided.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Creates a new source unavailable error.
    pub fn source_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::SourceUnavailable { path: path.into(), source }
    }

    /// Creates a new corruption error.
    pub fn corruption(msg: impl Into<String>) -> Self {
        Error::Corruption(msg.into())
    }

    /// Creates a new invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Returns true if this error means the load source was missing or unreadable.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Error::SourceUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = Error::corruption("expected an array");
        assert_eq!(err.to_string(), "Data corruption: expected an array");

        let err = Error::invalid_argument("indent must be between 1 and 8");
        assert_eq!(err.to_string(), "Invalid argument: indent must be between 1 and 8");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "read only");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(!err.is_source_unavailable());
    }

    #[test]
    fn test_source_unavailable() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = Error::source_unavailable("books.json", io_err);

        assert!(err.is_source_unavailable());
        assert!(err.to_string().contains("books.json"));
        assert!(err.source().is_some());
    }
}
