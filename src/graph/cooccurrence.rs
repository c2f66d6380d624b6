// src/graph/cooccurrence.rs
//! Pairwise co-occurrence counts.
//!
//! The table is a monoid under pointwise addition: partial tables built from
//! disjoint slices of segments can be merged in any order and give the same
//! result as one sequential pass.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::RecetarioError;
use crate::types::IngredientSet;

/// The nested `ingredient -> neighbor -> count` mapping used for exchange.
pub type NestedCounts = BTreeMap<String, BTreeMap<String, u64>>;

/// Symmetric co-occurrence counts. `count(a, b) == count(b, a)` and there are
/// never self entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NestedCounts", into = "NestedCounts")]
pub struct CooccurrenceTable {
    counts: NestedCounts,
}

impl CooccurrenceTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a sequence of segments sequentially.
    #[must_use]
    pub fn accumulate<'a, I>(sets: I) -> Self
    where
        I: IntoIterator<Item = &'a IngredientSet>,
    {
        let mut table = Self::new();
        for set in sets {
            table.record(set);
        }
        table
    }

    /// Folds segments in parallel partial tables, then merges them by summation.
    #[must_use]
    pub fn par_accumulate(sets: &[IngredientSet]) -> Self {
        let table = sets
            .par_iter()
            .fold(Self::new, |mut acc, set| {
                acc.record(set);
                acc
            })
            .reduce(Self::new, Self::merge);
        tracing::debug!(
            segments = sets.len(),
            ingredients = table.len(),
            pairs = table.pair_count(),
            "accumulated co-occurrence table"
        );
        table
    }

    /// Adds one segment: every unordered pair gains exactly 1.
    pub fn record(&mut self, set: &IngredientSet) {
        for (a, b) in set.pairs() {
            self.add(a, b, 1);
        }
    }

    /// Pointwise sum of two tables.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.merge_from(&other);
        self
    }

    pub fn merge_from(&mut self, other: &Self) {
        for (a, b, count) in other.pairs() {
            self.add(a, b, count);
        }
    }

    fn add(&mut self, a: &str, b: &str, count: u64) {
        if a == b || count == 0 {
            return;
        }
        *self
            .counts
            .entry(a.to_string())
            .or_default()
            .entry(b.to_string())
            .or_default() += count;
        *self
            .counts
            .entry(b.to_string())
            .or_default()
            .entry(a.to_string())
            .or_default() += count;
    }

    /// Number of segments in which `a` and `b` appeared together.
    #[must_use]
    pub fn count(&self, a: &str, b: &str) -> u64 {
        self.counts
            .get(a)
            .and_then(|row| row.get(b))
            .copied()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn neighbors(&self, ingredient: &str) -> Option<&BTreeMap<String, u64>> {
        self.counts.get(ingredient)
    }

    /// Ingredients with at least one co-occurrence, in lexical order.
    pub fn ingredients(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Each unordered pair once, as `(a, b, count)` with `a < b`.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str, u64)> {
        self.counts.iter().flat_map(|(a, row)| {
            row.iter()
                .filter(move |(b, _)| a.as_str() < b.as_str())
                .map(move |(b, &count)| (a.as_str(), b.as_str(), count))
        })
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pairs().count()
    }

    /// Number of ingredients in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.counts
            .iter()
            .all(|(a, row)| row.iter().all(|(b, &n)| self.count(b, a) == n))
    }
}

impl TryFrom<NestedCounts> for CooccurrenceTable {
    type Error = RecetarioError;

    fn try_from(counts: NestedCounts) -> Result<Self, Self::Error> {
        for (a, row) in &counts {
            for (b, &n) in row {
                if a == b {
                    return Err(RecetarioError::MalformedTable(format!(
                        "self entry for '{a}'"
                    )));
                }
                if n == 0 {
                    return Err(RecetarioError::MalformedTable(format!(
                        "zero count for '{a}' / '{b}'"
                    )));
                }
            }
        }

        let table = Self {
            counts: counts
                .into_iter()
                .filter(|(_, row)| !row.is_empty())
                .collect(),
        };
        if !table.is_symmetric() {
            return Err(RecetarioError::MalformedTable(
                "counts are not symmetric".to_string(),
            ));
        }
        Ok(table)
    }
}

impl From<CooccurrenceTable> for NestedCounts {
    fn from(table: CooccurrenceTable) -> Self {
        table.counts
    }
}
