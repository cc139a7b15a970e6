//! Opening, closing and saving documents.
//!
//! [`DocumentStore`] is the seam between the import pipeline and the on-disk
//! format. [`JsonDocumentStore`] is the bundled implementation: documents are
//! JSON encodings of [`Document`], restricted to a set of file extensions.

use std::{fs, path::Path};

use log::{debug, trace};

use crate::{document::Document, error::DocumentError};

/// Default extensions accepted by [`JsonDocumentStore`].
pub const DEFAULT_EXTENSIONS: &[&str] = &["stencil", "json"];

/// Access to persisted documents.
pub trait DocumentStore {
    /// Opens the document at `path`.
    ///
    /// Returns `None` if the path is not a readable document of the expected
    /// type. The reason is logged, not returned.
    fn open(&self, path: &Path) -> Option<Document>;

    /// Closes a document previously returned by [`DocumentStore::open`].
    fn close(&self, document: Document) {
        drop(document);
    }

    /// Writes `document` to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError`] if encoding or writing fails.
    fn save(&self, document: &Document, path: &Path) -> Result<(), DocumentError>;
}

/// JSON-backed [`DocumentStore`].
#[derive(Debug, Clone)]
pub struct JsonDocumentStore {
    extensions: Vec<String>,
}

impl Default for JsonDocumentStore {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()))
    }
}

impl JsonDocumentStore {
    /// Creates a store accepting files with the given extensions.
    ///
    /// Extensions are matched case-insensitively and without the leading dot.
    pub fn new(extensions: impl IntoIterator<Item = String>) -> Self {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Returns whether `path` has one of the accepted extensions.
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .is_some_and(|ext| self.extensions.contains(&ext))
    }

    /// Reads and decodes the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::FileType`] for unaccepted extensions,
    /// [`DocumentError::Io`] if the file cannot be read and
    /// [`DocumentError::Json`] if it does not decode to a document.
    pub fn read(&self, path: &Path) -> Result<Document, DocumentError> {
        if !self.accepts(path) {
            return Err(DocumentError::FileType(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        let document = serde_json::from_str(&content)?;
        Ok(document)
    }
}

impl DocumentStore for JsonDocumentStore {
    fn open(&self, path: &Path) -> Option<Document> {
        match self.read(path) {
            Ok(document) => {
                debug!(path = path.display().to_string(); "Opened document");
                Some(document)
            }
            Err(err) => {
                debug!(path = path.display().to_string(), err:% = err; "Could not open document");
                None
            }
        }
    }

    fn close(&self, document: Document) {
        trace!(pages = document.pages().len(); "Closing document");
        drop(document);
    }

    fn save(&self, document: &Document, path: &Path) -> Result<(), DocumentError> {
        let content = serde_json::to_string_pretty(document)?;
        fs::write(path, content)?;
        debug!(path = path.display().to_string(); "Saved document");
        Ok(())
    }
}
