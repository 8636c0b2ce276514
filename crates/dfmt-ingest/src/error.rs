//! Error types for source discovery and rewriting.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while walking and rewriting a source tree.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Root directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Content Errors ===
    /// File contents are not valid UTF-8.
    #[error("file is not valid UTF-8: {path}")]
    NotUtf8 { path: PathBuf },
}

/// Convenience result alias for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;
