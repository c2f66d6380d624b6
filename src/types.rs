// src/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The distinct canonical ingredients found in one recipe segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngredientSet(BTreeSet<String>);

impl IngredientSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an ingredient. Returns false if it was already present.
    pub fn insert(&mut self, ingredient: impl Into<String>) -> bool {
        self.0.insert(ingredient.into())
    }

    #[must_use]
    pub fn contains(&self, ingredient: &str) -> bool {
        self.0.contains(ingredient)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Every unordered pair `(a, b)` with `a < b`.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().enumerate().flat_map(move |(i, a)| {
            self.0
                .iter()
                .skip(i + 1)
                .map(move |b| (a.as_str(), b.as_str()))
        })
    }
}

impl<S: Into<String>> FromIterator<S> for IngredientSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a IngredientSet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
