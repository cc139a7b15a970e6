//! Error types for symbol imports.
//!
//! This module provides the main error type [`ImportError`]. Every failure is
//! terminal for the run; nothing is retried.

use std::{io, path::PathBuf};

use thiserror::Error;

use stencil_core::DocumentError;

/// The main error type for import operations.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The chosen file is not a readable document of the expected type.
    #[error("Could not open file. Is it a Stencil document?")]
    Open { path: PathBuf },

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    /// Symbols contain each other, so no insertion order exists.
    #[error("Symbol nesting cycle: {}", keys.join(" -> "))]
    Cycle { keys: Vec<String> },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ImportError {
    /// Create a new `Open` error for the given path.
    pub fn new_open_error(path: impl Into<PathBuf>) -> Self {
        Self::Open { path: path.into() }
    }
}
