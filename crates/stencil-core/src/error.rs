//! Error types for reading and writing documents.

use std::io;

use thiserror::Error;

/// Errors raised by the document codec.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported file type: {0}")]
    FileType(String),
}
