//! Symbol identity under a matching mode.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use stencil_core::{identifier::Id, layer::SymbolMaster};

/// Metadata key recording the symbol identifier a symbol had when imported.
pub const IMPORT_ID: &str = "import_id";

/// Metadata key recording the name a symbol had when imported.
pub const IMPORT_NAME: &str = "import_name";

/// Strategy for recognizing "the same" symbol across documents.
///
/// Fixed for the duration of one import run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Match on the permanent symbol identifier.
    #[default]
    Id,
    /// Match on the display name, compared exactly.
    Name,
}

impl MatchMode {
    /// Returns the metadata key that holds this mode's import identity.
    pub fn metadata_key(self) -> &'static str {
        match self {
            Self::Id => IMPORT_ID,
            Self::Name => IMPORT_NAME,
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id => write!(f, "id"),
            Self::Name => write!(f, "name"),
        }
    }
}

impl FromStr for MatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            other => Err(format!("unknown match mode `{other}`, expected `id` or `name`")),
        }
    }
}

/// Resolves the identity of `master` under `mode`.
///
/// Names are opaque: no case folding or whitespace trimming is applied.
pub fn resolve_key(master: &SymbolMaster, mode: MatchMode) -> Id {
    match mode {
        MatchMode::Id => master.symbol_id(),
        MatchMode::Name => Id::new(master.name()),
    }
}
