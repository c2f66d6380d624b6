// src/text/normalize.rs
//! Text normalization applied before phrase matching.
//!
//! Segments and vocabulary entries go through the same ordered list of pure
//! transformations, so a capitalized or oddly spaced term in either place still
//! lines up with its counterpart. Accents are preserved.

use std::sync::LazyLock;

use regex::Regex;

/// Word tokens: maximal runs of Unicode letters or digits.
static TOKEN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"[\p{L}\p{N}]+").ok());

/// A single normalization step.
pub type Transform = fn(&str) -> String;

/// Lowercases the text using Unicode case folding rules.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Collapses runs of whitespace into a single space and trims both ends.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits normalized text into word tokens (maximal runs of letters or digits).
#[must_use]
pub fn tokenize(text: &str) -> Vec<&str> {
    TOKEN
        .as_ref()
        .map_or_else(Vec::new, |re| re.find_iter(text).map(|m| m.as_str()).collect())
}

/// An explicit, ordered pipeline of transformations.
#[derive(Clone)]
pub struct Normalizer {
    steps: Vec<Transform>,
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("steps", &self.steps.len())
            .finish()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::standard()
    }
}

impl Normalizer {
    /// Case folding followed by whitespace collapsing.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            steps: vec![fold_case, collapse_whitespace],
        }
    }

    /// A pipeline that leaves text untouched.
    #[must_use]
    pub fn identity() -> Self {
        Self { steps: Vec::new() }
    }

    /// Appends a step to the end of the pipeline.
    #[must_use]
    pub fn with_step(mut self, step: Transform) -> Self {
        self.steps.push(step);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        self.steps
            .iter()
            .fold(text.to_string(), |acc, step| step(&acc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_pipeline_folds_and_collapses() {
        let n = Normalizer::standard();
        assert_eq!(n.apply("  Vino\tBLANCO \n y  Ajo "), "vino blanco y ajo");
    }

    #[test]
    fn accents_survive_normalization() {
        let n = Normalizer::standard();
        assert_eq!(n.apply("CALABACÍN y Piñones"), "calabacín y piñones");
    }

    #[test]
    fn steps_run_in_order() {
        fn strip_digits(text: &str) -> String {
            text.chars().filter(|c| !c.is_ascii_digit()).collect()
        }
        let n = Normalizer::identity()
            .with_step(strip_digits)
            .with_step(collapse_whitespace);
        assert_eq!(n.len(), 2);
        assert_eq!(n.apply("200 g  de harina"), "g de harina");
    }

    #[test]
    fn tokenize_drops_punctuation() {
        let tokens = tokenize("ajo, cebolla; (tomate) 2 huevos.");
        assert_eq!(tokens, vec!["ajo", "cebolla", "tomate", "2", "huevos"]);
    }
}
