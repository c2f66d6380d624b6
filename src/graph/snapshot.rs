// src/graph/snapshot.rs
//! The weighted, undirected ingredient graph and its query interface.

use std::collections::HashMap;

use serde::Serialize;

/// One undirected edge, reported with `a < b`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub a: String,
    pub b: String,
    pub weight: u64,
}

/// An immutable simple graph over ingredient names.
///
/// Nodes are indexed in ascending lexical order of their names; adjacency
/// lists are sorted by neighbor index. There are no self-loops and at most one
/// edge per pair.
#[derive(Debug, Clone, Default)]
pub struct IngredientGraph {
    pub(crate) names: Vec<String>,
    pub(crate) index: HashMap<String, usize>,
    pub(crate) adjacency: Vec<Vec<(usize, u64)>>,
    pub(crate) edge_count: usize,
    pub(crate) min_weight: u64,
}

impl IngredientGraph {
    /// Node names in index order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn name(&self, node: usize) -> Option<&str> {
        self.names.get(node).map(String::as_str)
    }

    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The threshold this snapshot was built with.
    #[must_use]
    pub fn min_weight(&self) -> u64 {
        self.min_weight
    }

    /// `(neighbor, weight)` pairs of a node, sorted by neighbor index.
    #[must_use]
    pub fn neighbors(&self, node: usize) -> &[(usize, u64)] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or_default()
    }

    /// Unweighted degree.
    #[must_use]
    pub fn degree(&self, node: usize) -> usize {
        self.neighbors(node).len()
    }

    /// Sum of incident edge weights.
    #[must_use]
    pub fn weighted_degree(&self, node: usize) -> u64 {
        self.neighbors(node).iter().map(|&(_, w)| w).sum()
    }

    /// Sum of all edge weights, each edge counted once.
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.edges_by_index().map(|(_, _, w)| w).sum()
    }

    /// Weight of the edge between two named nodes, if present.
    #[must_use]
    pub fn weight(&self, a: &str, b: &str) -> Option<u64> {
        let (ia, ib) = (self.index_of(a)?, self.index_of(b)?);
        self.neighbors(ia)
            .binary_search_by_key(&ib, |&(n, _)| n)
            .ok()
            .and_then(|pos| self.neighbors(ia).get(pos))
            .map(|&(_, w)| w)
    }

    #[must_use]
    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        self.weight(a, b).is_some()
    }

    /// Each edge once as `(u, v, weight)` with `u < v`.
    pub fn edges_by_index(&self) -> impl Iterator<Item = (usize, usize, u64)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(u, list)| {
            list.iter()
                .filter(move |&&(v, _)| u < v)
                .map(move |&(v, w)| (u, v, w))
        })
    }

    /// Each edge once, by name, in index order.
    #[must_use]
    pub fn edges(&self) -> Vec<Edge> {
        self.edges_by_index()
            .filter_map(|(u, v, weight)| {
                Some(Edge {
                    a: self.name(u)?.to_string(),
                    b: self.name(v)?.to_string(),
                    weight,
                })
            })
            .collect()
    }
}
