//! Error types for roster file loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a roster file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Roster file not found.
    #[error("roster file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// Malformed CSV record.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Malformed JSON, or a JSON value a row cannot hold.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // === Shape Errors ===
    /// A JSON roster must be an array of row objects.
    #[error("expected a JSON array of rows in {path}")]
    NotAnArray { path: PathBuf },

    /// An element of a JSON roster is not an object.
    #[error("row {index} of {path} is not a JSON object")]
    NotAnObject { path: PathBuf, index: usize },

    /// File extension is neither `.csv` nor `.json`.
    #[error("unsupported roster format '{extension}' for {path} (expected .csv or .json)")]
    UnsupportedFormat { path: PathBuf, extension: String },
}

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, IngestError>;

impl IngestError {
    /// Map an I/O error on `path`, singling out a missing file.
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}
