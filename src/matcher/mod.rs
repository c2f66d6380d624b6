// src/matcher/mod.rs
//! Finds vocabulary phrases inside free text.
//!
//! Overlapping candidates are resolved longest-first; among equally long
//! candidates the one starting earliest wins. Matches are reported through the
//! synonym table, so distinct surface forms of one ingredient collapse together.

pub mod trie;

use rayon::prelude::*;

use crate::text::{tokenize, Normalizer};
use crate::types::IngredientSet;
use crate::vocabulary::Vocabulary;

use self::trie::PhraseTrie;

/// A resolved phrase match, positioned in tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseMatch {
    pub start: usize,
    pub len: usize,
    pub canonical: String,
}

impl PhraseMatch {
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

#[derive(Debug, Clone)]
pub struct EntityMatcher {
    trie: PhraseTrie,
    normalizer: Normalizer,
}

impl EntityMatcher {
    #[must_use]
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self::with_normalizer(vocabulary, Normalizer::standard())
    }

    #[must_use]
    pub fn with_normalizer(vocabulary: &Vocabulary, normalizer: Normalizer) -> Self {
        let mut trie = PhraseTrie::new();
        for (surface, canonical) in vocabulary.phrases() {
            trie.insert(&tokenize(surface), canonical);
        }
        Self { trie, normalizer }
    }

    /// Resolved, non-overlapping matches in text order.
    #[must_use]
    #[allow(clippy::indexing_slicing)] // spans come from prefixes of `tokens`
    pub fn find_spans(&self, segment: &str) -> Vec<PhraseMatch> {
        let text = self.normalizer.apply(segment);
        let tokens = tokenize(&text);

        let longest = self.trie.longest_phrase();
        let mut candidates: Vec<(usize, usize, &str)> = Vec::new();
        for start in 0..tokens.len() {
            let window = &tokens[start..tokens.len().min(start + longest)];
            for (len, canonical) in self.trie.prefixes_of(window) {
                candidates.push((start, len, canonical));
            }
        }

        // Longest first, then earliest start.
        candidates.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        let mut taken = vec![false; tokens.len()];
        let mut accepted = Vec::new();
        for (start, len, canonical) in candidates {
            let span = start..start + len;
            if taken[span.clone()].iter().any(|&t| t) {
                continue;
            }
            taken[span].iter_mut().for_each(|t| *t = true);
            accepted.push(PhraseMatch {
                start,
                len,
                canonical: canonical.to_string(),
            });
        }

        accepted.sort_by_key(|m| m.start);
        accepted
    }

    /// The canonical ingredient set of one segment. Unknown words are ignored.
    #[must_use]
    pub fn match_segment(&self, segment: &str) -> IngredientSet {
        self.find_spans(segment)
            .into_iter()
            .map(|m| m.canonical)
            .collect()
    }

    /// Matches every segment in parallel, preserving input order.
    #[must_use]
    pub fn match_all<S>(&self, segments: &[S]) -> Vec<IngredientSet>
    where
        S: AsRef<str> + Sync,
    {
        segments
            .par_iter()
            .map(|s| self.match_segment(s.as_ref()))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn matcher(terms: &[&str], synonyms: &[(&str, &str)]) -> EntityMatcher {
        let vocab = Vocabulary::new(terms.iter(), synonyms.iter().copied()).unwrap();
        EntityMatcher::new(&vocab)
    }

    #[test]
    fn longest_match_wins_over_its_prefix() {
        let m = matcher(&["aceitunas", "aceitunas rellenas", "anchoas"], &[]);
        let spans = m.find_spans("Aceitunas rellenas de anchoas");
        let names: Vec<_> = spans.iter().map(|s| s.canonical.as_str()).collect();
        assert_eq!(names, vec!["aceitunas rellenas", "anchoas"]);
    }

    #[test]
    fn longer_later_match_beats_shorter_overlap() {
        // "pan nuez" starts first but "nuez moscada rallada" is longer and overlaps it.
        let m = matcher(&["pan nuez", "nuez moscada rallada"], &[]);
        let spans = m.find_spans("pan nuez moscada rallada");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].canonical, "nuez moscada rallada");
        assert_eq!(spans[0].start, 1);
    }

    #[test]
    fn equal_length_tie_goes_to_earliest_start() {
        let m = matcher(&["sal gorda", "gorda fina"], &[]);
        let spans = m.find_spans("sal gorda fina");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].canonical, "sal gorda");
    }

    #[test]
    fn matches_respect_token_boundaries() {
        let m = matcher(&["ajo"], &[]);
        assert!(m.match_segment("ajoblanco y majo").is_empty());
        assert!(m.match_segment("ajo, majo").contains("ajo"));
    }
}
