//! Adjacency-list directed graph.

use std::collections::HashMap;
use std::hash::Hash;

/// A directed graph over arbitrary hashable vertex labels.
///
/// Vertices come into existence the first time an edge mentions them;
/// asking for the successors of an unknown label yields an empty slice
/// rather than an error.
#[derive(Debug, Clone)]
pub struct DiGraph<V> {
    adjacency: HashMap<V, Vec<V>>,
}

impl<V: Eq + Hash> DiGraph<V> {
    pub fn new() -> Self {
        DiGraph {
            adjacency: HashMap::new(),
        }
    }

    /// Adds the directed edge `from -> to`.
    ///
    /// Parallel edges are kept as given, and successors preserve
    /// insertion order, which keeps traversal order deterministic.
    pub fn add_edge(&mut self, from: V, to: V) {
        self.adjacency.entry(from).or_default().push(to);
    }

    /// Successors of `v`, in insertion order.
    pub fn neighbors(&self, v: &V) -> &[V] {
        self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

impl<V: Eq + Hash> Default for DiGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}
