//! Merging of ordered source symbols into a target document.
//!
//! Nodes are processed strictly in the given order. For each one the target
//! is searched for a symbol carrying the node's key as import identity:
//!
//! - found: the incoming symbol takes the existing symbol's position, its
//!   instances are relinked to the incoming symbol and the existing symbol
//!   is removed (`updated`)
//! - not found: the incoming symbol is placed at its own position (`added`)
//!
//! Nested symbols are not merged recursively; they are entries of the same
//! ordered list and are merged on their own turn.

use std::fmt;

use indexmap::IndexMap;
use log::{debug, warn};

use stencil_core::{
    document::{DetachedSymbol, Document, SymbolLocation},
    geometry::Point,
    identifier::Id,
    layer::SymbolMaster,
};

use crate::{
    key::{IMPORT_ID, IMPORT_NAME, MatchMode},
    placement::place,
    relink::relink,
    tree::SymbolNode,
};

/// Outcome counts of one merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    added: usize,
    updated: usize,
}

impl ImportSummary {
    pub fn new(added: usize, updated: usize) -> Self {
        Self { added, updated }
    }

    /// Symbols that had no match in the target.
    pub fn added(&self) -> usize {
        self.added
    }

    /// Symbols that replaced a matching target symbol.
    pub fn updated(&self) -> usize {
        self.updated
    }
}

impl fmt::Display for ImportSummary {
    /// Formats the end-of-run status message, e.g. `3 symbols added, 1 updated.`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.added == 1 { "symbol" } else { "symbols" };
        write!(f, "{} {noun} added, {} updated.", self.added, self.updated)
    }
}

/// Merges the symbols behind `nodes` into `target`, moving them out of
/// `source`.
///
/// `nodes` must come from the source document and should already be sorted.
/// Nodes whose symbol is no longer in `source` are skipped.
pub fn add_symbols(
    target: &mut Document,
    source: &mut Document,
    nodes: &[SymbolNode],
    mode: MatchMode,
) -> ImportSummary {
    let mut detached: IndexMap<SymbolLocation, DetachedSymbol> = source
        .take_symbols()
        .into_iter()
        .map(|symbol| (symbol.location(), symbol))
        .collect();

    let mut summary = ImportSummary::default();
    for node in nodes {
        let Some(incoming) = detached.shift_remove(&node.location()) else {
            warn!(key:% = node.key(); "Symbol missing from source, skipping");
            continue;
        };

        match find_existing(target, node.key(), mode) {
            Some((location, position)) => {
                update_symbol(target, location, position, incoming);
                summary.updated += 1;
            }
            None => {
                add_symbol(target, incoming);
                summary.added += 1;
            }
        }
    }

    // Anything not ordered for merging goes back where it came from.
    for (location, symbol) in detached {
        source.add_layer(location.page(), symbol.into_master());
    }

    summary
}

/// Finds the first target symbol whose import identity for `mode` equals
/// `key`, returning its location and position.
fn find_existing(target: &Document, key: Id, mode: MatchMode) -> Option<(SymbolLocation, Point)> {
    let metadata_key = mode.metadata_key();
    target
        .symbols()
        .find(|(_, master)| {
            master
                .user_info()
                .value(metadata_key)
                .is_some_and(|value| key == value)
        })
        .map(|(location, master)| (location, master.frame().origin()))
}

/// Records the symbol's identifier and name under both import keys.
fn stamp_import_identity(master: &mut SymbolMaster) {
    let symbol_id = master.symbol_id().to_string();
    let name = master.name().to_string();
    let user_info = master.user_info_mut();
    user_info.set_value(IMPORT_ID, symbol_id);
    user_info.set_value(IMPORT_NAME, name);
}

fn add_symbol(target: &mut Document, incoming: DetachedSymbol) {
    let page_name = incoming.page_name().to_string();
    let mut master = incoming.into_master();
    stamp_import_identity(&mut master);

    debug!(symbol = master.name(), page = page_name; "Adding symbol");
    let position = master.frame().origin();
    place(target, master, &page_name, position);
}

fn update_symbol(
    target: &mut Document,
    existing: SymbolLocation,
    position: Point,
    incoming: DetachedSymbol,
) {
    let page_name = incoming.page_name().to_string();
    let mut master = incoming.into_master();
    stamp_import_identity(&mut master);
    let new_symbol_id = master.symbol_id();

    debug!(symbol = master.name(), page = page_name; "Updating symbol");
    place(target, master, &page_name, position);
    relink(target, existing, new_symbol_id);
}
