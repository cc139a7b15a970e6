//! Error adapter for converting ImportError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use stencil::ImportError;

/// Adapter rendering an [`ImportError`] as a miette diagnostic.
///
/// Import errors carry no source snippets, so only the code and a help line
/// are provided.
pub struct ErrorAdapter<'a>(pub &'a ImportError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ImportError::Io(_) => "stencil::io",
            ImportError::Open { .. } => "stencil::open",
            ImportError::Document(_) => "stencil::document",
            ImportError::Cycle { .. } => "stencil::cycle",
            ImportError::Config(_) => "stencil::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            ImportError::Open { path } => Some(Box::new(format!(
                "`{}` must be a Stencil document with an accepted extension",
                path.display()
            ))),
            ImportError::Cycle { .. } => Some(Box::new(
                "break the loop by removing one of the nested symbol instances",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
