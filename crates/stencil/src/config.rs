//! Configuration types for symbol imports.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file by the CLI.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining import and document settings.
//! - [`ImportConfig`] - Matching mode and the page shown after an import.
//! - [`DocumentConfig`] - File extensions accepted when opening documents.
//!
//! # Example
//!
//! ```
//! # use stencil::{MatchMode, config::AppConfig};
//! let config = AppConfig::default();
//! assert_eq!(config.import().match_mode(), MatchMode::Id);
//! assert_eq!(config.import().symbols_page(), "Symbols");
//! ```

use serde::Deserialize;

use stencil_core::store::{DEFAULT_EXTENSIONS, JsonDocumentStore};

use crate::key::MatchMode;

/// Name of the page switched to after an import, unless configured otherwise.
pub const DEFAULT_SYMBOLS_PAGE: &str = "Symbols";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Import configuration section.
    #[serde(default)]
    import: ImportConfig,

    /// Document configuration section.
    #[serde(default)]
    document: DocumentConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(import: ImportConfig, document: DocumentConfig) -> Self {
        Self { import, document }
    }

    /// Returns the import configuration.
    pub fn import(&self) -> &ImportConfig {
        &self.import
    }

    /// Returns the document configuration.
    pub fn document(&self) -> &DocumentConfig {
        &self.document
    }

    /// Overrides the matching mode (builder style).
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.import.match_mode = mode;
        self
    }
}

/// Settings for one import run.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportConfig {
    /// How incoming symbols are matched against the target's symbols.
    #[serde(default)]
    match_mode: MatchMode,

    /// Page made current in the target once the import completes.
    #[serde(default = "default_symbols_page")]
    symbols_page: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::default(),
            symbols_page: default_symbols_page(),
        }
    }
}

impl ImportConfig {
    /// Creates a new [`ImportConfig`].
    pub fn new(match_mode: MatchMode, symbols_page: impl Into<String>) -> Self {
        Self {
            match_mode,
            symbols_page: symbols_page.into(),
        }
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    pub fn symbols_page(&self) -> &str {
        &self.symbols_page
    }

    /// Returns a copy using `mode` instead of the configured mode.
    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }
}

fn default_symbols_page() -> String {
    DEFAULT_SYMBOLS_PAGE.to_string()
}

/// Settings for opening and saving documents.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    /// Extensions accepted by the document picker.
    #[serde(default = "default_extensions")]
    extensions: Vec<String>,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

impl DocumentConfig {
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Builds a [`JsonDocumentStore`] restricted to the configured extensions.
    pub fn store(&self) -> JsonDocumentStore {
        JsonDocumentStore::new(self.extensions.iter().cloned())
    }
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect()
}
