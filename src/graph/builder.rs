// src/graph/builder.rs
//! Graph construction from a co-occurrence table.

use std::collections::{BTreeSet, HashMap};

use super::cooccurrence::CooccurrenceTable;
use super::snapshot::IngredientGraph;
use crate::error::ConfigError;

/// Keeps the pairs whose count reaches a minimum weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphBuilder {
    min_weight: u64,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self { min_weight: 1 }
    }
}

impl GraphBuilder {
    /// # Errors
    /// Returns [`ConfigError::InvalidThreshold`] when `min_weight` is 0.
    pub fn new(min_weight: u64) -> Result<Self, ConfigError> {
        if min_weight == 0 {
            return Err(ConfigError::InvalidThreshold(min_weight));
        }
        Ok(Self { min_weight })
    }

    #[must_use]
    pub fn min_weight(&self) -> u64 {
        self.min_weight
    }

    /// Builds a snapshot. The table is only read, so any number of thresholds
    /// can be applied to the same table.
    #[must_use]
    pub fn build(&self, table: &CooccurrenceTable) -> IngredientGraph {
        let kept: Vec<(&str, &str, u64)> = table
            .pairs()
            .filter(|&(_, _, count)| count >= self.min_weight)
            .collect();

        let names: Vec<String> = kept
            .iter()
            .flat_map(|&(a, b, _)| [a, b])
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect();
        let index: HashMap<String, usize> = names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), i))
            .collect();

        let mut adjacency: Vec<Vec<(usize, u64)>> = vec![Vec::new(); names.len()];
        for &(a, b, weight) in &kept {
            let (Some(&ia), Some(&ib)) = (index.get(a), index.get(b)) else {
                continue;
            };
            if let Some(list) = adjacency.get_mut(ia) {
                list.push((ib, weight));
            }
            if let Some(list) = adjacency.get_mut(ib) {
                list.push((ia, weight));
            }
        }
        for list in &mut adjacency {
            list.sort_unstable_by_key(|&(n, _)| n);
        }

        tracing::debug!(
            min_weight = self.min_weight,
            nodes = names.len(),
            edges = kept.len(),
            "built ingredient graph"
        );

        IngredientGraph {
            names,
            index,
            adjacency,
            edge_count: kept.len(),
            min_weight: self.min_weight,
        }
    }
}
