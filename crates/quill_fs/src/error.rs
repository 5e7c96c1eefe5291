use std::path::PathBuf;

use thiserror::Error;

/// Error type for file operations.
///
/// I/O variants keep the path that failed so callers can report it without
/// threading extra context around.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to open file {}: {source}", .path.display())]
    Open { path: PathBuf, source: std::io::Error },

    #[error("Failed to write file {}: {source}", .path.display())]
    Write { path: PathBuf, source: std::io::Error },

    #[error("Failed to read file {}: {source}", .path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("Failed to check file info {}: {source}", .path.display())]
    Metadata { path: PathBuf, source: std::io::Error },

    #[error("Failed to close file {}: {source}", .path.display())]
    Close { path: PathBuf, source: std::io::Error },

    #[error("Failed to remove file {}: {source}", .path.display())]
    Remove { path: PathBuf, source: std::io::Error },

    #[error("Failed to add directive '{content}': {source}")]
    Directive { content: String, source: Box<Error> },

    #[error("Failed to serialize JSON: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to deserialize JSON from {}: {source}", .path.display())]
    Deserialize { path: PathBuf, source: serde_json::Error },
}

pub type Result<A> = std::result::Result<A, Error>;
