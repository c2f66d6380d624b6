// src/graph/community.rs
//! Greedy modularity optimization (Louvain).
//!
//! Each round runs a local-move phase followed by aggregation of communities
//! into super-nodes. Visitation is deterministic:
//!
//! * nodes are visited in ascending index order (lexical order of names at the
//!   first level, community order on aggregated levels);
//! * the current community is evaluated first, then neighboring communities in
//!   ascending id; a node moves only when a candidate's gain is strictly
//!   greater than the best seen so far;
//! * community ids are renumbered by first appearance in node order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::snapshot::IngredientGraph;
use crate::error::ConfigError;

/// Bounds for the optimization loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LouvainConfig {
    /// Maximum local-move + aggregation rounds.
    pub max_rounds: usize,
    /// Maximum full passes inside one local-move phase.
    pub max_passes: usize,
    /// Modularity gains at or below this are treated as no gain.
    pub epsilon: f64,
}

impl Default for LouvainConfig {
    fn default() -> Self {
        Self {
            max_rounds: 32,
            max_passes: 128,
            epsilon: 1e-7,
        }
    }
}

impl LouvainConfig {
    /// # Errors
    /// Returns [`ConfigError::InvalidCommunitySettings`] for zero bounds or a
    /// negative or non-finite epsilon.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rounds == 0 {
            return Err(ConfigError::InvalidCommunitySettings(
                "max_rounds must be at least 1".into(),
            ));
        }
        if self.max_passes == 0 {
            return Err(ConfigError::InvalidCommunitySettings(
                "max_passes must be at least 1".into(),
            ));
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(ConfigError::InvalidCommunitySettings(format!(
                "epsilon must be a non-negative number (got {})",
                self.epsilon
            )));
        }
        Ok(())
    }
}

/// Community assignment for every node plus its modularity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunityPartition {
    pub assignments: BTreeMap<String, usize>,
    pub modularity: f64,
    /// False when a round or pass limit cut the optimization short.
    pub converged: bool,
    pub rounds: usize,
}

impl Default for CommunityPartition {
    fn default() -> Self {
        Self {
            assignments: BTreeMap::new(),
            modularity: 0.0,
            converged: true,
            rounds: 0,
        }
    }
}

impl CommunityPartition {
    #[must_use]
    pub fn community_of(&self, name: &str) -> Option<usize> {
        self.assignments.get(name).copied()
    }

    #[must_use]
    pub fn community_count(&self) -> usize {
        self.assignments.values().max().map_or(0, |&max| max + 1)
    }

    /// Members of each community, indexed by id, each list sorted by name.
    #[must_use]
    pub fn communities(&self) -> Vec<Vec<String>> {
        let mut groups = vec![Vec::new(); self.community_count()];
        for (name, &id) in &self.assignments {
            if let Some(group) = groups.get_mut(id) {
                group.push(name.clone());
            }
        }
        groups
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CommunityDetector {
    config: LouvainConfig,
}

impl CommunityDetector {
    /// # Errors
    /// Returns an error when `config` fails [`LouvainConfig::validate`].
    pub fn new(config: LouvainConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &LouvainConfig {
        &self.config
    }

    #[must_use]
    pub fn detect(&self, graph: &IngredientGraph) -> CommunityPartition {
        let mut level = Level::from_graph(graph);
        if level.total <= 0.0 {
            return CommunityPartition::default();
        }

        let mut membership: Vec<usize> = (0..graph.node_count()).collect();
        let mut best_q = level.modularity(&membership);
        let mut best = membership.clone();
        let mut converged = false;
        let mut hit_pass_limit = false;
        let mut rounds = 0;

        for _ in 0..self.config.max_rounds {
            rounds += 1;
            let outcome = local_move(&level, &self.config);
            hit_pass_limit |= outcome.pass_limit_reached;

            let candidate: Vec<usize> = membership
                .iter()
                .map(|&s| outcome.community.get(s).copied().unwrap_or(s))
                .collect();
            let q = level.modularity(&outcome.community);
            tracing::debug!(
                round = rounds,
                modularity = q,
                moved = outcome.moved,
                "local-move phase done"
            );

            if !outcome.moved || q - best_q <= self.config.epsilon {
                if q > best_q {
                    best_q = q;
                    best = candidate;
                }
                converged = true;
                break;
            }

            best_q = q;
            best.clone_from(&candidate);
            membership = candidate;
            level = level.aggregate(&outcome.community, outcome.count);
        }

        let converged = converged && !hit_pass_limit;
        if !converged {
            tracing::warn!(
                rounds,
                max_rounds = self.config.max_rounds,
                "community detection did not fully converge; returning best partition found"
            );
        }

        renumber(&mut best);
        CommunityPartition {
            assignments: graph.names().iter().cloned().zip(best).collect(),
            modularity: best_q,
            converged,
            rounds,
        }
    }
}

/// Modularity of an arbitrary assignment over `graph`. Nodes without an
/// assignment are treated as singletons.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn modularity(graph: &IngredientGraph, assignments: &BTreeMap<String, usize>) -> f64 {
    let mut next = assignments.values().max().map_or(0, |&m| m + 1);
    let mut community: Vec<usize> = graph
        .names()
        .iter()
        .map(|name| {
            assignments.get(name).copied().unwrap_or_else(|| {
                next += 1;
                next - 1
            })
        })
        .collect();
    renumber(&mut community);
    Level::from_graph(graph).modularity(&community)
}

/// A (possibly aggregated) weighted graph with tracked self-weights.
struct Level {
    adjacency: Vec<Vec<(usize, f64)>>,
    /// Intra-community weight folded into each super-node.
    self_loops: Vec<f64>,
    /// Weighted degree; a self-weight counts twice.
    degrees: Vec<f64>,
    /// Total edge weight `m`.
    total: f64,
}

// Indexing is safe here: every community id is < the number of communities the
// caller computed, and every node id is < adjacency.len().
#[allow(clippy::indexing_slicing, clippy::cast_precision_loss)]
impl Level {
    fn from_graph(graph: &IngredientGraph) -> Self {
        let n = graph.node_count();
        let adjacency: Vec<Vec<(usize, f64)>> = (0..n)
            .map(|u| {
                graph
                    .neighbors(u)
                    .iter()
                    .map(|&(v, w)| (v, w as f64))
                    .collect()
            })
            .collect();
        let degrees = adjacency
            .iter()
            .map(|list| list.iter().map(|&(_, w)| w).sum::<f64>())
            .collect();
        Self {
            adjacency,
            self_loops: vec![0.0; n],
            degrees,
            total: graph.total_weight() as f64,
        }
    }

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// `Q = sum_c [ in_c / m - (tot_c / 2m)^2 ]`.
    fn modularity(&self, community: &[usize]) -> f64 {
        if self.total <= 0.0 {
            return 0.0;
        }
        let k = community.iter().max().map_or(0, |&c| c + 1);
        let mut inside = vec![0.0; k];
        let mut tot = vec![0.0; k];

        for u in 0..self.node_count() {
            let c = community[u];
            tot[c] += self.degrees[u];
            inside[c] += self.self_loops[u];
            for &(v, w) in &self.adjacency[u] {
                if v > u && community[v] == c {
                    inside[c] += w;
                }
            }
        }

        let m = self.total;
        inside
            .iter()
            .zip(&tot)
            .map(|(&i, &t)| i / m - (t / (2.0 * m)).powi(2))
            .sum()
    }

    /// Collapses each community into one super-node.
    fn aggregate(&self, community: &[usize], count: usize) -> Self {
        let mut self_loops = vec![0.0; count];
        let mut links: Vec<BTreeMap<usize, f64>> = vec![BTreeMap::new(); count];

        for u in 0..self.node_count() {
            let cu = community[u];
            self_loops[cu] += self.self_loops[u];
            for &(v, w) in &self.adjacency[u] {
                if v <= u {
                    continue;
                }
                let cv = community[v];
                if cu == cv {
                    self_loops[cu] += w;
                } else {
                    *links[cu].entry(cv).or_default() += w;
                    *links[cv].entry(cu).or_default() += w;
                }
            }
        }

        let adjacency: Vec<Vec<(usize, f64)>> = links
            .into_iter()
            .map(|m| m.into_iter().collect())
            .collect();
        let degrees = adjacency
            .iter()
            .zip(&self_loops)
            .map(|(list, &s)| 2.0 * s + list.iter().map(|&(_, w)| w).sum::<f64>())
            .collect();

        Self {
            adjacency,
            self_loops,
            degrees,
            total: self.total,
        }
    }
}

struct LocalMoveOutcome {
    /// Renumbered community per node of the level.
    community: Vec<usize>,
    count: usize,
    moved: bool,
    pass_limit_reached: bool,
}

#[allow(clippy::indexing_slicing)] // ids are node ids of `level`
fn local_move(level: &Level, config: &LouvainConfig) -> LocalMoveOutcome {
    let n = level.node_count();
    let two_m = 2.0 * level.total;
    let mut community: Vec<usize> = (0..n).collect();
    let mut tot = level.degrees.clone();
    let mut current_q = level.modularity(&community);
    let mut moved = false;
    let mut pass_limit_reached = true;

    for _ in 0..config.max_passes {
        let mut moves = 0usize;

        for u in 0..n {
            let own = community[u];
            let ku = level.degrees[u];

            let mut links: BTreeMap<usize, f64> = BTreeMap::new();
            for &(v, w) in &level.adjacency[u] {
                *links.entry(community[v]).or_default() += w;
            }

            tot[own] -= ku;
            let own_link = links.get(&own).copied().unwrap_or(0.0);
            let mut best = own;
            let mut best_gain = own_link - tot[own] * ku / two_m;

            for (&c, &link) in &links {
                if c == own {
                    continue;
                }
                let gain = link - tot[c] * ku / two_m;
                if gain > best_gain {
                    best = c;
                    best_gain = gain;
                }
            }

            tot[best] += ku;
            if best != own {
                community[u] = best;
                moves += 1;
            }
        }

        if moves == 0 {
            pass_limit_reached = false;
            break;
        }
        moved = true;

        let q = level.modularity(&community);
        let gain = q - current_q;
        current_q = q;
        if gain < config.epsilon {
            pass_limit_reached = false;
            break;
        }
    }

    let count = renumber(&mut community);
    LocalMoveOutcome {
        community,
        count,
        moved,
        pass_limit_reached,
    }
}

/// Relabels ids 0.. by first appearance. Returns the number of distinct ids.
fn renumber(community: &mut [usize]) -> usize {
    let mut mapping: BTreeMap<usize, usize> = BTreeMap::new();
    for c in community.iter_mut() {
        let next = mapping.len();
        *c = *mapping.entry(*c).or_insert(next);
    }
    mapping.len()
}
