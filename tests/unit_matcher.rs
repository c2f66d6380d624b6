// tests/unit_matcher.rs
//! Phrase matching against the vocabulary.

use recetario_core::matcher::EntityMatcher;
use recetario_core::text::{collapse_whitespace, Normalizer};
use recetario_core::vocabulary::Vocabulary;

fn builtin_matcher() -> EntityMatcher {
    EntityMatcher::new(&Vocabulary::builtin().unwrap())
}

#[test]
fn test_synonyms_collapse_to_one_member() {
    let m = builtin_matcher();
    let set = m.match_segment("Un chorrito de vino blanco y otro de VINO TINTO");
    assert_eq!(set.len(), 1);
    assert!(set.contains("vino"));
    assert_eq!(set.pairs().count(), 0);
}

#[test]
fn test_capitalized_terms_are_found() {
    let m = builtin_matcher();
    let set = m.match_segment("AJO, Cebolla y Tomate");
    let found: Vec<_> = set.iter().collect();
    assert_eq!(found, vec!["ajo", "cebolla", "tomate"]);
}

#[test]
fn test_multi_word_terms_beat_single_words() {
    let m = builtin_matcher();
    let set = m.match_segment("200 g de aceitunas rellenas y ajo en polvo");
    assert!(set.contains("aceitunas rellenas"));
    assert!(!set.contains("aceitunas"));
    assert!(set.contains("ajo"));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_unknown_words_are_ignored() {
    let m = builtin_matcher();
    assert!(m.match_segment("Precalentar el horno a 180 grados").is_empty());
    assert!(m.match_segment("").is_empty());
}

#[test]
fn test_spans_are_in_text_order() {
    let m = builtin_matcher();
    let spans = m.find_spans("sal, pimienta y nuez moscada");
    let names: Vec<_> = spans.iter().map(|s| s.canonical.as_str()).collect();
    assert_eq!(names, vec!["sal", "pimienta", "nuez moscada"]);
    assert_eq!(spans[2].start, 3);
    assert_eq!(spans[2].end(), 5);
}

#[test]
fn test_match_all_preserves_segment_order() {
    let m = builtin_matcher();
    let sets = m.match_all(&["ajo", "harina y huevo", "nada"]);
    assert_eq!(sets.len(), 3);
    assert!(sets[0].contains("ajo"));
    assert_eq!(sets[1].len(), 2);
    assert!(sets[2].is_empty());
}

#[test]
fn test_without_case_folding_capitals_do_not_match() {
    let vocab = Vocabulary::with_normalizer(
        ["ajo"],
        Vec::<(&str, &str)>::new(),
        &Normalizer::identity().with_step(collapse_whitespace),
    )
    .unwrap();
    let m = EntityMatcher::with_normalizer(
        &vocab,
        Normalizer::identity().with_step(collapse_whitespace),
    );
    assert!(m.match_segment("AJO").is_empty());
    assert!(m.match_segment("ajo").contains("ajo"));
}

#[test]
fn test_canonical_terms_keep_their_own_identity() {
    let vocab = Vocabulary::new(["ajo", "cebolla"], [("cebolla morada.", "cebolla")]).unwrap();
    let m = EntityMatcher::new(&vocab);
    let set = m.match_segment("ajo y cebolla morada");
    let found: Vec<_> = set.iter().collect();
    assert_eq!(found, vec!["ajo", "cebolla"]);
}

#[test]
fn test_phrase_at_end_of_text_is_found() {
    let m = builtin_matcher();
    let spans = m.find_spans("una lata de atún en conserva");
    assert_eq!(spans.len(), 1);
    assert_eq!(spans[0].canonical, "atún en conserva");
    assert_eq!(spans[0].end(), 6);
}
