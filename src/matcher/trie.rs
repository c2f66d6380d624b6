// src/matcher/trie.rs
//! Token-level phrase trie.
//!
//! Nodes live in a flat arena and children are keyed by whole tokens, so a
//! lookup walks one edge per word of the candidate phrase.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
struct PhraseNode {
    children: HashMap<String, usize>,
    /// Canonical term for a phrase ending at this node.
    canonical: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PhraseTrie {
    nodes: Vec<PhraseNode>,
    longest: usize,
}

impl Default for PhraseTrie {
    fn default() -> Self {
        Self::new()
    }
}

// Indexing is safe here: node indices only come from `children`, which always
// point at nodes already pushed into the arena.
#[allow(clippy::indexing_slicing)]
impl PhraseTrie {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![PhraseNode::default()],
            longest: 0,
        }
    }

    /// Inserts a tokenized phrase. Empty phrases are ignored.
    pub fn insert(&mut self, tokens: &[&str], canonical: &str) {
        if tokens.is_empty() {
            return;
        }

        let mut node_idx = 0;
        for token in tokens {
            let next_idx = if let Some(&id) = self.nodes[node_idx].children.get(*token) {
                id
            } else {
                let id = self.nodes.len();
                self.nodes.push(PhraseNode::default());
                self.nodes[node_idx].children.insert((*token).to_string(), id);
                id
            };
            node_idx = next_idx;
        }

        self.nodes[node_idx].canonical = Some(canonical.to_string());
        self.longest = self.longest.max(tokens.len());
    }

    /// Number of tokens in the longest stored phrase.
    #[must_use]
    pub fn longest_phrase(&self) -> usize {
        self.longest
    }

    /// Every phrase that starts at `tokens[0]`, as `(token_len, canonical)`.
    #[must_use]
    pub fn prefixes_of<'a>(&'a self, tokens: &[&str]) -> Vec<(usize, &'a str)> {
        let mut found = Vec::new();
        let mut node_idx = 0;

        for (depth, token) in tokens.iter().enumerate() {
            let Some(&next) = self.nodes[node_idx].children.get(*token) else {
                break;
            };
            node_idx = next;
            if let Some(canonical) = self.nodes[node_idx].canonical.as_deref() {
                found.push((depth + 1, canonical));
            }
        }

        found
    }
}
