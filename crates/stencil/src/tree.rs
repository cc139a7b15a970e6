//! Mapping of a document's symbols into key-annotated trees.
//!
//! Each [`SymbolNode`] carries the resolved key of one master and, as
//! children, the nodes of every master nested inside it. The trees are built
//! fresh for each import and only live as long as that import.

use std::collections::HashSet;

use log::trace;

use stencil_core::{
    document::{Document, SymbolLocation},
    identifier::Id,
    layer::SymbolMaster,
};

use crate::{
    discover::nested_in_master,
    error::ImportError,
    key::{MatchMode, resolve_key},
};

/// One symbol of the source document plus its merge metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolNode {
    key: Id,
    location: SymbolLocation,
    nested: Vec<SymbolNode>,
}

impl SymbolNode {
    /// Creates a node. Mostly useful for building trees by hand.
    pub fn new(key: impl Into<Id>, location: SymbolLocation, nested: Vec<SymbolNode>) -> Self {
        Self {
            key: key.into(),
            location,
            nested,
        }
    }

    /// Resolved identity of the symbol under the active matching mode.
    pub fn key(&self) -> Id {
        self.key
    }

    /// Where the symbol lives in the source document.
    pub fn location(&self) -> SymbolLocation {
        self.location
    }

    /// Nodes of the symbols found inside this symbol, in discovery order.
    pub fn nested(&self) -> &[SymbolNode] {
        &self.nested
    }

    /// Returns whether a node keyed `key` appears anywhere below this node.
    ///
    /// The node's own key is not considered.
    pub fn contains_symbol(&self, key: Id) -> bool {
        self.nested
            .iter()
            .any(|child| child.key == key || child.contains_symbol(key))
    }

    /// Collects the keys of every node below this one.
    pub fn nested_keys(&self) -> HashSet<Id> {
        let mut keys = HashSet::new();
        self.collect_keys(&mut keys);
        keys
    }

    fn collect_keys(&self, keys: &mut HashSet<Id>) {
        for child in &self.nested {
            keys.insert(child.key);
            child.collect_keys(keys);
        }
    }
}

/// Maps `symbols` into nodes, one per input symbol, in input order.
///
/// Nested symbols are discovered and mapped recursively.
///
/// # Errors
///
/// Returns [`ImportError::Cycle`] if a master turns up inside its own layer
/// tree, directly or through other masters.
pub fn map_symbols<'a>(
    document: &'a Document,
    symbols: impl IntoIterator<Item = (SymbolLocation, &'a SymbolMaster)>,
    mode: MatchMode,
) -> Result<Vec<SymbolNode>, ImportError> {
    let mut path = Vec::new();
    let nodes = map_level(document, symbols, mode, &mut path)?;
    trace!(nodes:?; "Mapped symbol trees");
    Ok(nodes)
}

/// Maps every top-level symbol of `document`.
pub fn map_document(document: &Document, mode: MatchMode) -> Result<Vec<SymbolNode>, ImportError> {
    map_symbols(document, document.symbols(), mode)
}

fn map_level<'a>(
    document: &'a Document,
    symbols: impl IntoIterator<Item = (SymbolLocation, &'a SymbolMaster)>,
    mode: MatchMode,
    path: &mut Vec<(SymbolLocation, Id)>,
) -> Result<Vec<SymbolNode>, ImportError> {
    let mut nodes = Vec::new();
    for (location, master) in symbols {
        let key = resolve_key(master, mode);

        if let Some(start) = path.iter().position(|(seen, _)| *seen == location) {
            let mut keys: Vec<String> = path[start..].iter().map(|(_, k)| k.to_string()).collect();
            keys.push(key.to_string());
            return Err(ImportError::Cycle { keys });
        }

        path.push((location, key));
        let nested = map_level(document, nested_in_master(document, master), mode, path)?;
        path.pop();

        nodes.push(SymbolNode::new(key, location, nested));
    }
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use stencil_core::{
        document::Page,
        geometry::Rect,
        layer::{Group, Layer, SymbolInstance},
    };

    use super::*;

    fn instance(symbol_id: &str) -> Layer {
        SymbolInstance::new("instance", Rect::default(), symbol_id).into()
    }

    fn document(masters: Vec<SymbolMaster>) -> Document {
        Document::new().with_page(
            Page::new("Symbols").with_layers(masters.into_iter().map(Layer::from).collect()),
        )
    }

    fn keys(nodes: &[SymbolNode]) -> Vec<String> {
        nodes.iter().map(|n| n.key().to_string()).collect()
    }

    #[test]
    fn test_maps_in_input_order_with_nested_trees() {
        let doc = document(vec![
            SymbolMaster::new("2", "B", Rect::default()).with_layers(vec![instance("1")]),
            SymbolMaster::new("1", "A", Rect::default()),
            SymbolMaster::new("3", "C", Rect::default()).with_layers(vec![
                Group::new("g", Rect::default(), vec![instance("2")]).into(),
            ]),
        ]);

        let nodes = map_document(&doc, MatchMode::Id).unwrap();

        assert_eq!(keys(&nodes), vec!["2", "1", "3"]);
        assert_eq!(keys(nodes[0].nested()), vec!["1"]);
        assert!(nodes[1].nested().is_empty());
        assert_eq!(keys(nodes[2].nested()), vec!["2"]);
        assert_eq!(keys(nodes[2].nested()[0].nested()), vec!["1"]);
        assert_eq!(nodes[2].location(), SymbolLocation::new(0, 2));
    }

    #[test]
    fn test_maps_by_name() {
        let doc = document(vec![SymbolMaster::new("1", "Icon/Star", Rect::default())]);
        let nodes = map_document(&doc, MatchMode::Name).unwrap();

        assert_eq!(keys(&nodes), vec!["Icon/Star"]);
    }

    #[test]
    fn test_contains_symbol_is_transitive() {
        let doc = document(vec![
            SymbolMaster::new("1", "A", Rect::default()),
            SymbolMaster::new("2", "B", Rect::default()).with_layers(vec![instance("1")]),
            SymbolMaster::new("3", "C", Rect::default()).with_layers(vec![instance("2")]),
        ]);
        let nodes = map_document(&doc, MatchMode::Id).unwrap();
        let c = &nodes[2];

        assert!(c.contains_symbol(Id::new("2")));
        assert!(c.contains_symbol(Id::new("1")));
        assert!(!c.contains_symbol(Id::new("3")));
        assert_eq!(c.nested_keys().len(), 2);
    }

    #[test]
    fn test_cycle_is_reported() {
        let doc = document(vec![
            SymbolMaster::new("1", "A", Rect::default()).with_layers(vec![instance("2")]),
            SymbolMaster::new("2", "B", Rect::default()).with_layers(vec![instance("1")]),
        ]);

        let err = map_document(&doc, MatchMode::Id).unwrap_err();
        match err {
            ImportError::Cycle { keys } => assert_eq!(keys, vec!["1", "2", "1"]),
            other => panic!("Expected cycle, got {other:?}"),
        }
    }

    #[test]
    fn test_self_reference_is_a_cycle() {
        let doc = document(vec![
            SymbolMaster::new("1", "A", Rect::default()).with_layers(vec![instance("1")]),
        ]);

        assert!(matches!(
            map_document(&doc, MatchMode::Id),
            Err(ImportError::Cycle { .. })
        ));
    }

    #[test]
    fn test_shared_nested_symbol_is_not_a_cycle() {
        let doc = document(vec![
            SymbolMaster::new("1", "A", Rect::default()),
            SymbolMaster::new("2", "B", Rect::default())
                .with_layers(vec![instance("1"), instance("1")]),
        ]);

        let nodes = map_document(&doc, MatchMode::Id).unwrap();
        assert_eq!(keys(nodes[1].nested()), vec!["1", "1"]);
    }
}
