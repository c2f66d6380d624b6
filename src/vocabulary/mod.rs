// src/vocabulary/mod.rs
//! The controlled vocabulary: canonical ingredient terms plus an alias table.
//!
//! Entries are normalized with the same [`Normalizer`] that is applied to segments
//! and then keyed by their word tokens, the form the matcher compares. Alias chains
//! are resolved once at construction, so lookups never walk the synonym table.

pub mod defaults;

use std::collections::{BTreeMap, HashSet};

use crate::error::ConfigError;
use crate::text::{tokenize, Normalizer};

#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: Vec<String>,
    term_set: HashSet<String>,
    /// Alias -> fully resolved canonical term.
    synonyms: BTreeMap<String, String>,
}

impl Vocabulary {
    /// Builds a vocabulary using the standard normalizer.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] for empty or duplicate terms, empty, conflicting or
    /// shadowing aliases, synonym cycles and aliases that resolve to an unknown term.
    /// Entries with no letters or digits count as empty.
    pub fn new<T, S, A, C>(terms: T, synonyms: S) -> Result<Self, ConfigError>
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        S: IntoIterator<Item = (A, C)>,
        A: AsRef<str>,
        C: AsRef<str>,
    {
        Self::with_normalizer(terms, synonyms, &Normalizer::standard())
    }

    /// Builds a vocabulary, normalizing every entry with `normalizer`.
    ///
    /// # Errors
    /// See [`Vocabulary::new`].
    pub fn with_normalizer<T, S, A, C>(
        terms: T,
        synonyms: S,
        normalizer: &Normalizer,
    ) -> Result<Self, ConfigError>
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
        S: IntoIterator<Item = (A, C)>,
        A: AsRef<str>,
        C: AsRef<str>,
    {
        let (terms, term_set) = collect_terms(terms, normalizer)?;

        let mut raw: BTreeMap<String, String> = BTreeMap::new();
        for (alias, target) in synonyms {
            let alias = phrase_key(alias.as_ref(), normalizer);
            if alias.is_empty() {
                return Err(ConfigError::EmptyAlias);
            }
            if term_set.contains(&alias) {
                return Err(ConfigError::AliasShadowsTerm(alias));
            }
            let target = phrase_key(target.as_ref(), normalizer);
            match raw.get(&alias) {
                Some(existing) if *existing != target => {
                    return Err(ConfigError::DuplicateAlias(alias));
                }
                Some(_) => {}
                None => {
                    raw.insert(alias, target);
                }
            }
        }

        let mut synonyms = BTreeMap::new();
        for alias in raw.keys() {
            let canonical = resolve_alias(alias, &raw, &term_set)?;
            synonyms.insert(alias.clone(), canonical);
        }

        Ok(Self {
            terms,
            term_set,
            synonyms,
        })
    }

    /// The built-in Spanish cooking vocabulary.
    ///
    /// # Errors
    /// Only fails if the built-in tables are inconsistent.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::new(
            defaults::DEFAULT_TERMS.iter(),
            defaults::DEFAULT_SYNONYMS.iter().copied(),
        )
    }

    /// Canonical terms in declaration order.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Alias -> canonical pairs, ordered by alias.
    pub fn aliases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.synonyms.iter().map(|(a, c)| (a.as_str(), c.as_str()))
    }

    /// Every matchable surface form with the canonical term it stands for.
    pub fn phrases(&self) -> impl Iterator<Item = (&str, &str)> {
        self.terms
            .iter()
            .map(|t| (t.as_str(), t.as_str()))
            .chain(self.aliases())
    }

    /// Maps an already normalized phrase to its canonical term.
    #[must_use]
    pub fn canonicalize(&self, phrase: &str) -> Option<&str> {
        if let Some(canonical) = self.synonyms.get(phrase) {
            return Some(canonical);
        }
        self.term_set.get(phrase).map(String::as_str)
    }

    #[must_use]
    pub fn is_canonical(&self, term: &str) -> bool {
        self.term_set.contains(term)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    #[must_use]
    pub fn alias_count(&self) -> usize {
        self.synonyms.len()
    }
}

fn collect_terms<T>(
    terms: T,
    normalizer: &Normalizer,
) -> Result<(Vec<String>, HashSet<String>), ConfigError>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut ordered = Vec::new();
    let mut seen = HashSet::new();

    for term in terms {
        let term = phrase_key(term.as_ref(), normalizer);
        if term.is_empty() {
            return Err(ConfigError::EmptyTerm);
        }
        if !seen.insert(term.clone()) {
            return Err(ConfigError::DuplicateTerm(term));
        }
        ordered.push(term);
    }

    Ok((ordered, seen))
}

/// Normalizes `raw` and rejoins its word tokens with single spaces.
fn phrase_key(raw: &str, normalizer: &Normalizer) -> String {
    let text = normalizer.apply(raw);
    tokenize(&text).join(" ")
}

/// Follows an alias chain until it lands on a canonical term.
fn resolve_alias(
    alias: &str,
    raw: &BTreeMap<String, String>,
    terms: &HashSet<String>,
) -> Result<String, ConfigError> {
    let mut chain = vec![alias.to_string()];
    let mut current = alias;

    while let Some(next) = raw.get(current) {
        if terms.contains(next) {
            return Ok(next.clone());
        }
        if chain.iter().any(|seen| seen == next) {
            chain.push(next.clone());
            return Err(ConfigError::SynonymCycle(chain));
        }
        chain.push(next.clone());
        current = next;
    }

    Err(ConfigError::UnknownCanonical {
        alias: alias.to_string(),
        target: current.to_string(),
    })
}
