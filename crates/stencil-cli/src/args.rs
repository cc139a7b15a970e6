//! Command-line argument definitions for the Stencil CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the source and target documents, the
//! matching mode, configuration file selection, and logging verbosity.

use clap::{Parser, ValueEnum};

use stencil::MatchMode;

/// Matching mode as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MatchModeArg {
    /// Match symbols by their unique identifier
    Id,
    /// Match symbols by their name
    Name,
}

impl From<MatchModeArg> for MatchMode {
    fn from(arg: MatchModeArg) -> Self {
        match arg {
            MatchModeArg::Id => MatchMode::Id,
            MatchModeArg::Name => MatchMode::Name,
        }
    }
}

/// Command-line arguments for the Stencil symbol importer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the document to import symbols from
    #[arg(help = "Select a Stencil document to import symbols from")]
    pub source: String,

    /// Path to the document receiving the symbols
    #[arg(help = "Document to import symbols into")]
    pub target: String,

    /// Where to write the merged document (defaults to overwriting the target)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Matching mode, overriding the configuration file
    #[arg(short, long, value_enum)]
    pub match_mode: Option<MatchModeArg>,

    /// Shorthand for `--match-mode name`
    #[arg(long, conflicts_with = "match_mode")]
    pub by_name: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Returns the matching mode requested on the command line, if any.
    pub fn requested_match_mode(&self) -> Option<MatchMode> {
        if self.by_name {
            Some(MatchMode::Name)
        } else {
            self.match_mode.map(MatchMode::from)
        }
    }

    /// Returns the path the merged document is written to.
    pub fn output_path(&self) -> &str {
        self.output.as_deref().unwrap_or(&self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["stencil", "lib.stencil", "app.stencil"]);

        assert_eq!(args.requested_match_mode(), None);
        assert_eq!(args.output_path(), "app.stencil");
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_by_name_flag() {
        let args = Args::parse_from(["stencil", "a.stencil", "b.stencil", "--by-name"]);
        assert_eq!(args.requested_match_mode(), Some(MatchMode::Name));
    }

    #[test]
    fn test_match_mode_and_output() {
        let args = Args::parse_from([
            "stencil",
            "a.stencil",
            "b.stencil",
            "--match-mode",
            "id",
            "-o",
            "merged.stencil",
        ]);

        assert_eq!(args.requested_match_mode(), Some(MatchMode::Id));
        assert_eq!(args.output_path(), "merged.stencil");
    }

    #[test]
    fn test_by_name_conflicts_with_match_mode() {
        let result = Args::try_parse_from([
            "stencil",
            "a.stencil",
            "b.stencil",
            "--by-name",
            "--match-mode",
            "id",
        ]);
        assert!(result.is_err());
    }
}
