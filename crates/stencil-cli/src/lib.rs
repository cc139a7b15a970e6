//! CLI logic for the Stencil symbol importer.
//!
//! This module contains the core CLI logic: it opens the target document,
//! imports the symbols of the source document into it and saves the result.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, MatchModeArg};

use std::path::Path;

use log::info;

use stencil::{
    ImportError, ImportSummary, SymbolImporter,
    document::Document,
    store::DocumentStore,
};

/// Run the Stencil CLI application
///
/// Opens the target document, or starts a blank one if the target path does
/// not exist yet, imports every symbol of the source document into it and
/// writes the merged document to the output path.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `ImportError` for:
/// - Configuration loading errors
/// - Source or target documents that cannot be opened
/// - Symbol nesting cycles in the source
/// - Failures writing the merged document
pub fn run(args: &Args) -> Result<ImportSummary, ImportError> {
    info!(
        source_path = args.source,
        target_path = args.target,
        output_path = args.output_path();
        "Importing symbols"
    );

    // Load configuration, command line wins over file
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(mode) = args.requested_match_mode() {
        app_config = app_config.with_match_mode(mode);
    }

    let store = app_config.document().store();
    let mut target = open_target(&store, Path::new(&args.target))?;

    let importer = SymbolImporter::new(app_config.import().clone());
    let summary = importer.import_file(&store, &mut target, Path::new(&args.source))?;

    store.save(&target, Path::new(args.output_path()))?;
    store.close(target);

    info!(output_file = args.output_path(); "Document saved");

    Ok(summary)
}

fn open_target(store: &impl DocumentStore, path: &Path) -> Result<Document, ImportError> {
    if !path.exists() {
        info!(path = path.display().to_string(); "Target does not exist, starting a blank document");
        return Ok(Document::new());
    }
    store
        .open(path)
        .ok_or_else(|| ImportError::new_open_error(path))
}
