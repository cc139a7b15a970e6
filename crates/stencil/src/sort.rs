//! Dependency-safe ordering of symbol nodes.
//!
//! A symbol must be merged after every symbol it contains. The ordering is a
//! topological sort (Kahn's algorithm) over a graph with an edge from each
//! node to every node whose nested subtree holds its key. Among nodes that
//! are ready at the same time the one earliest in the input goes first, so
//! unrelated nodes keep their input order.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashSet},
};

use log::debug;
use petgraph::{
    Direction,
    graph::{DiGraph, NodeIndex},
};

use stencil_core::identifier::Id;

use crate::{error::ImportError, tree::SymbolNode};

/// Orders `nodes` so that no node precedes a node nested within it.
///
/// # Errors
///
/// Returns [`ImportError::Cycle`] listing the keys of the nodes that could
/// not be ordered, in input order.
pub fn sort_symbols(nodes: Vec<SymbolNode>) -> Result<Vec<SymbolNode>, ImportError> {
    let reachable: Vec<HashSet<Id>> = nodes.iter().map(SymbolNode::nested_keys).collect();

    // Node weights are input positions.
    let mut graph: DiGraph<usize, ()> = DiGraph::with_capacity(nodes.len(), 0);
    let indices: Vec<NodeIndex> = (0..nodes.len()).map(|pos| graph.add_node(pos)).collect();

    for (container, keys) in reachable.iter().enumerate() {
        for (contained, node) in nodes.iter().enumerate() {
            if container != contained && keys.contains(&node.key()) {
                graph.add_edge(indices[contained], indices[container], ());
            }
        }
    }

    let mut in_degree: Vec<usize> = indices
        .iter()
        .map(|&idx| graph.neighbors_directed(idx, Direction::Incoming).count())
        .collect();

    let mut ready: BinaryHeap<Reverse<usize>> = in_degree
        .iter()
        .enumerate()
        .filter(|&(_, &degree)| degree == 0)
        .map(|(pos, _)| Reverse(pos))
        .collect();

    let mut order = Vec::with_capacity(nodes.len());
    while let Some(Reverse(pos)) = ready.pop() {
        order.push(pos);
        for next in graph.neighbors_directed(indices[pos], Direction::Outgoing) {
            let next = graph[next];
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                ready.push(Reverse(next));
            }
        }
    }

    if order.len() < nodes.len() {
        let keys = in_degree
            .iter()
            .zip(&nodes)
            .filter(|&(&degree, _)| degree > 0)
            .map(|(_, node)| node.key().to_string())
            .collect();
        return Err(ImportError::Cycle { keys });
    }

    debug!(count = order.len(), edges = graph.edge_count(); "Sorted symbols");

    let mut slots: Vec<Option<SymbolNode>> = nodes.into_iter().map(Some).collect();
    Ok(order
        .into_iter()
        .filter_map(|pos| slots[pos].take())
        .collect())
}
