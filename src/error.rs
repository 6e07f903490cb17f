//! Error types for loading documents and locating reader data

use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop the reader before a session can start
#[derive(Debug, Error)]
pub enum ReaderError {
    /// The document path does not exist
    #[error("file not found: {}", .0.display())]
    DocumentNotFound(PathBuf),

    /// The document exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    DocumentUnreadable {
        /// Path of the document
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// No home directory to derive the data directory from
    #[error("could not determine a data directory for txtread")]
    NoDataDirectory,
}
