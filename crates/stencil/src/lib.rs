//! Stencil - Symbol imports between design documents.
//!
//! Reads the symbol masters of a source document and merges them into a
//! target document. Symbols are recognized by identity (identifier or name),
//! so a symbol imported before is replaced in place and every instance of it
//! is relinked, while new symbols are added. Symbols nested inside other
//! symbols are always merged before the symbols that contain them.
//!
//! The pipeline:
//!
//! 1. [`tree::map_document`] resolves keys and discovers nested symbols.
//! 2. [`sort::sort_symbols`] orders the symbols so contained ones go first.
//! 3. [`merge::add_symbols`] moves each symbol into the target, adding or
//!    replacing it.

pub mod config;
pub mod discover;
pub mod key;
pub mod merge;
pub mod placement;
pub mod relink;
pub mod sort;
pub mod tree;

mod error;

pub use stencil_core::{document, geometry, identifier, layer, store};

pub use error::ImportError;
pub use key::MatchMode;
pub use merge::ImportSummary;

use std::path::Path;

use log::{debug, info, trace};

use stencil_core::{document::Document, store::DocumentStore};

use config::ImportConfig;

/// Runs symbol imports with a fixed configuration.
///
/// # Examples
///
/// ```rust
/// use stencil::{
///     ImportSummary, SymbolImporter,
///     config::ImportConfig,
///     document::{Document, Page},
///     geometry::Rect,
///     layer::SymbolMaster,
/// };
///
/// let mut target = Document::new();
/// let mut source = Document::new().with_page(Page::new("Symbols").with_layers(vec![
///     SymbolMaster::new("1", "Button", Rect::default()).into(),
/// ]));
///
/// let importer = SymbolImporter::new(ImportConfig::default());
/// let summary = importer
///     .import_document(&mut target, &mut source)
///     .expect("Failed to import");
///
/// assert_eq!(summary, ImportSummary::new(1, 0));
/// assert_eq!(summary.to_string(), "1 symbol added, 0 updated.");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SymbolImporter {
    config: ImportConfig,
}

impl SymbolImporter {
    /// Create a new importer with the given configuration.
    pub fn new(config: ImportConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration used for imports.
    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Moves the symbols of `source` into `target`.
    ///
    /// Symbols leave `source` as they are merged; once this returns, `source`
    /// holds no symbols that were merged and should only be closed. On
    /// success the target's symbols page becomes its current page.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::Cycle`] if the source's symbols contain each
    /// other. Neither document is modified in that case.
    pub fn import_document(
        &self,
        target: &mut Document,
        source: &mut Document,
    ) -> Result<ImportSummary, ImportError> {
        let mode = self.config.match_mode();
        info!(match_mode:% = mode; "Importing symbols");

        let nodes = tree::map_document(source, mode)?;
        debug!(count = nodes.len(); "Symbols mapped");

        let ordered = sort::sort_symbols(nodes)?;
        trace!(order:? = ordered.iter().map(|n| n.key().to_string()).collect::<Vec<_>>(); "Merge order");

        let summary = merge::add_symbols(target, source, &ordered, mode);

        let symbols_page = target.page_or_create(self.config.symbols_page());
        target.set_current_page(symbols_page);

        info!(added = summary.added(), updated = summary.updated(); "Symbols imported");
        Ok(summary)
    }

    /// Opens the document at `path`, imports its symbols into `target` and
    /// closes it again, whether or not the import succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::Open`] if `path` cannot be opened, before
    /// `target` is touched, and any error of [`SymbolImporter::import_document`].
    pub fn import_file(
        &self,
        store: &impl DocumentStore,
        target: &mut Document,
        path: &Path,
    ) -> Result<ImportSummary, ImportError> {
        info!(path = path.display().to_string(); "Opening source document");
        let mut source = store
            .open(path)
            .ok_or_else(|| ImportError::new_open_error(path))?;

        let result = self.import_document(target, &mut source);
        store.close(source);
        result
    }

    /// Imports by symbol identifier, whatever mode is configured.
    pub fn import_by_id(
        &self,
        store: &impl DocumentStore,
        target: &mut Document,
        path: &Path,
    ) -> Result<ImportSummary, ImportError> {
        self.with_mode(MatchMode::Id).import_file(store, target, path)
    }

    /// Imports by symbol name, whatever mode is configured.
    pub fn import_by_name(
        &self,
        store: &impl DocumentStore,
        target: &mut Document,
        path: &Path,
    ) -> Result<ImportSummary, ImportError> {
        self.with_mode(MatchMode::Name).import_file(store, target, path)
    }

    fn with_mode(&self, mode: MatchMode) -> Self {
        Self::new(self.config.clone().with_match_mode(mode))
    }
}
