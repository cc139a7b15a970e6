//! Discovery of symbols nested inside other symbols.
//!
//! A master depends on every master referenced by an instance somewhere in
//! its layer tree. Groups are transparent: their instances count as if they
//! were direct children. Any other layer kind is ignored.

use log::warn;

use stencil_core::{
    document::{Document, SymbolLocation},
    layer::{Layer, SymbolMaster},
};

/// A master found inside another layer, with its location in the document.
pub type NestedSymbol<'a> = (SymbolLocation, &'a SymbolMaster);

/// Finds the masters referenced inside `container`.
///
/// An instance container is resolved to its master first. The result is
/// flat, in depth-first pre-order by layer order, and may contain the same
/// master more than once. No cycle detection happens here.
pub fn find_nested_symbols<'a>(document: &'a Document, container: &'a Layer) -> Vec<NestedSymbol<'a>> {
    match container {
        Layer::SymbolInstance(instance) => match document.master(instance.symbol_id()) {
            Some((_, master)) => nested_in_master(document, master),
            None => {
                warn!(symbol_id:% = instance.symbol_id(); "Instance references a missing master");
                Vec::new()
            }
        },
        Layer::SymbolMaster(_) | Layer::Group(_) => {
            let mut found = Vec::new();
            scan_layers(document, container.layers(), &mut found);
            found
        }
        Layer::Shape(_) => Vec::new(),
    }
}

/// Finds the masters referenced inside the layer tree of `master`.
pub fn nested_in_master<'a>(document: &'a Document, master: &'a SymbolMaster) -> Vec<NestedSymbol<'a>> {
    let mut found = Vec::new();
    scan_layers(document, master.layers(), &mut found);
    found
}

fn scan_layers<'a>(document: &'a Document, layers: &'a [Layer], found: &mut Vec<NestedSymbol<'a>>) {
    for layer in layers {
        match layer {
            Layer::SymbolInstance(instance) => match document.master(instance.symbol_id()) {
                Some(nested) => found.push(nested),
                None => {
                    warn!(
                        symbol_id:% = instance.symbol_id(),
                        instance = instance.name();
                        "Skipping instance of a missing master"
                    );
                }
            },
            Layer::Group(group) => scan_layers(document, group.layers(), found),
            Layer::SymbolMaster(_) | Layer::Shape(_) => {}
        }
    }
}
