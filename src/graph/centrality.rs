// src/graph/centrality.rs
//! Degree, closeness and betweenness centrality.
//!
//! Shortest paths count hops: edge weights measure co-occurrence strength,
//! not distance, so they play no part here.

use std::cmp::Ordering;
use std::collections::{BTreeMap, VecDeque};

use serde::Serialize;

use super::snapshot::IngredientGraph;

/// One centrality value per node, each in `[0, 1]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CentralityScores {
    values: BTreeMap<String, f64>,
}

impl CentralityScores {
    fn from_values(graph: &IngredientGraph, values: Vec<f64>) -> Self {
        Self {
            values: graph.names().iter().cloned().zip(values).collect(),
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Descending by value; ties broken by name.
    #[must_use]
    pub fn ranked(&self) -> Vec<(String, f64)> {
        let mut ranked: Vec<_> = self.values.iter().map(|(k, &v)| (k.clone(), v)).collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked
    }

    /// The first `k` entries of [`CentralityScores::ranked`].
    #[must_use]
    pub fn top(&self, k: usize) -> Vec<(String, f64)> {
        let mut ranked = self.ranked();
        ranked.truncate(k);
        ranked
    }
}

/// The three metrics for one graph snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CentralityReport {
    pub degree: CentralityScores,
    pub closeness: CentralityScores,
    pub betweenness: CentralityScores,
}

impl CentralityReport {
    /// Computes the metrics concurrently; they only share read access to `graph`.
    #[must_use]
    pub fn compute(graph: &IngredientGraph) -> Self {
        let (degree, (closeness, betweenness)) = rayon::join(
            || degree_centrality(graph),
            || rayon::join(|| closeness_centrality(graph), || betweenness_centrality(graph)),
        );
        Self {
            degree,
            closeness,
            betweenness,
        }
    }
}

/// `degree / (n - 1)`, or 0 for graphs with at most one node.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn degree_centrality(graph: &IngredientGraph) -> CentralityScores {
    let n = graph.node_count();
    let values = (0..n)
        .map(|v| {
            if n <= 1 {
                0.0
            } else {
                graph.degree(v) as f64 / (n - 1) as f64
            }
        })
        .collect();
    CentralityScores::from_values(graph, values)
}

/// Closeness with the Wasserman-Faust correction for disconnected graphs.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn closeness_centrality(graph: &IngredientGraph) -> CentralityScores {
    let n = graph.node_count();
    let values = (0..n)
        .map(|v| {
            let distances = bfs_distances(graph, v);
            let (reached, total) = distances
                .iter()
                .enumerate()
                .filter(|&(u, _)| u != v)
                .filter_map(|(_, d)| *d)
                .fold((0usize, 0usize), |(r, t), d| (r + 1, t + d));

            if reached == 0 || total == 0 || n <= 1 {
                return 0.0;
            }
            let r = reached as f64;
            (r / (n - 1) as f64) * (r / total as f64)
        })
        .collect();
    CentralityScores::from_values(graph, values)
}

/// Brandes' accumulation, normalized by `2 / ((n - 1)(n - 2))`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn betweenness_centrality(graph: &IngredientGraph) -> CentralityScores {
    let n = graph.node_count();
    if n <= 2 {
        return CentralityScores::from_values(graph, vec![0.0; n]);
    }

    let mut raw = vec![0.0_f64; n];
    for source in 0..n {
        accumulate_dependencies(graph, source, &mut raw);
    }

    // Every unordered pair was visited from both ends, so `raw` is twice the
    // pair count: raw / 2 * 2 / ((n-1)(n-2)).
    let scale = 1.0 / ((n - 1) as f64 * (n - 2) as f64);
    let values = raw.into_iter().map(|b| b * scale).collect();
    CentralityScores::from_values(graph, values)
}

#[allow(clippy::indexing_slicing)] // all indices are node ids < n
fn accumulate_dependencies(graph: &IngredientGraph, source: usize, raw: &mut [f64]) {
    let n = graph.node_count();
    let mut order = Vec::with_capacity(n);
    let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut sigma = vec![0.0_f64; n];
    let mut dist: Vec<Option<usize>> = vec![None; n];

    sigma[source] = 1.0;
    dist[source] = Some(0);
    let mut queue = VecDeque::from([source]);

    while let Some(v) = queue.pop_front() {
        order.push(v);
        let Some(dv) = dist[v] else { continue };
        for &(w, _) in graph.neighbors(v) {
            if dist[w].is_none() {
                dist[w] = Some(dv + 1);
                queue.push_back(w);
            }
            if dist[w] == Some(dv + 1) {
                sigma[w] += sigma[v];
                preds[w].push(v);
            }
        }
    }

    let mut delta = vec![0.0_f64; n];
    while let Some(w) = order.pop() {
        for &v in &preds[w] {
            delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
        }
        if w != source {
            raw[w] += delta[w];
        }
    }
}

/// Hop distances from `source`; `None` for unreachable nodes.
#[allow(clippy::indexing_slicing)]
fn bfs_distances(graph: &IngredientGraph, source: usize) -> Vec<Option<usize>> {
    let mut dist = vec![None; graph.node_count()];
    if source >= dist.len() {
        return dist;
    }
    dist[source] = Some(0);
    let mut queue = VecDeque::from([source]);

    while let Some(v) = queue.pop_front() {
        let Some(dv) = dist[v] else { continue };
        for &(w, _) in graph.neighbors(v) {
            if dist[w].is_none() {
                dist[w] = Some(dv + 1);
                queue.push_back(w);
            }
        }
    }
    dist
}
