use std::path::PathBuf;
use thiserror::Error;

/// Store error types for Ticklist
///
/// None of these reach callers of the task list operations themselves; they
/// come out of the fallible adapter methods and out of opening a store file.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Error creating the directory that holds the store file
    #[error("Failed to create store directory at {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error with the store path (points at a directory, has no file name, ...)
    #[error("Invalid store path: {path} - {reason}")]
    InvalidPath { path: PathBuf, reason: String },

    /// Error reading the store file
    #[error("Failed to read task list from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error writing the store file
    #[error("Failed to write task list to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stored document is not a valid task list
    #[error("Malformed task list: {0}")]
    Decode(#[source] serde_json::Error),

    /// Task list could not be serialized
    #[error("Failed to serialize task list: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
