// tests/unit_vocabulary.rs
//! Vocabulary validation and canonicalization.

use recetario_core::error::ConfigError;
use recetario_core::vocabulary::Vocabulary;

#[test]
fn test_terms_are_normalized() {
    let vocab = Vocabulary::new(["  Judías   Verdes ", "AJO"], Vec::<(&str, &str)>::new())
        .unwrap();
    assert_eq!(vocab.terms(), ["judías verdes", "ajo"]);
    assert!(vocab.is_canonical("ajo"));
}

#[test]
fn test_empty_term_is_fatal() {
    let err = Vocabulary::new(["ajo", "   "], Vec::<(&str, &str)>::new()).unwrap_err();
    assert_eq!(err, ConfigError::EmptyTerm);
}

#[test]
fn test_duplicate_term_is_fatal() {
    let err = Vocabulary::new(["ajo", "Ajo"], Vec::<(&str, &str)>::new()).unwrap_err();
    assert_eq!(err, ConfigError::DuplicateTerm("ajo".into()));
}

#[test]
fn test_synonym_cycle_is_fatal() {
    let err = Vocabulary::new(["ajo"], [("a", "b"), ("b", "a")]).unwrap_err();
    assert_eq!(
        err,
        ConfigError::SynonymCycle(vec!["a".into(), "b".into(), "a".into()])
    );
}

#[test]
fn test_self_referencing_alias_is_a_cycle() {
    let err = Vocabulary::new(["ajo"], [("vino", "vino")]).unwrap_err();
    assert!(matches!(err, ConfigError::SynonymCycle(_)));
}

#[test]
fn test_synonym_to_unknown_term_is_fatal() {
    let err = Vocabulary::new(["ajo"], [("vino blanco", "vino")]).unwrap_err();
    assert_eq!(
        err,
        ConfigError::UnknownCanonical {
            alias: "vino blanco".into(),
            target: "vino".into()
        }
    );
}

#[test]
fn test_alias_cannot_shadow_a_term() {
    let err = Vocabulary::new(["queso", "queso azul"], [("queso azul", "queso")]).unwrap_err();
    assert_eq!(err, ConfigError::AliasShadowsTerm("queso azul".into()));
}

#[test]
fn test_empty_alias_is_fatal() {
    let err = Vocabulary::new(["vino"], [(" ", "vino")]).unwrap_err();
    assert_eq!(err, ConfigError::EmptyAlias);
}

#[test]
fn test_builtin_aliases_resolve() {
    let vocab = Vocabulary::builtin().unwrap();
    assert_eq!(vocab.alias_count(), 8);
    for (alias, canonical) in vocab.aliases() {
        assert!(vocab.is_canonical(canonical), "{alias} -> {canonical}");
    }
    assert_eq!(vocab.canonicalize("vino de jerez"), Some("vino"));
}

#[test]
fn test_terms_without_word_characters_are_empty() {
    let err = Vocabulary::new(["---", "ajo"], Vec::<(&str, &str)>::new()).unwrap_err();
    assert_eq!(err, ConfigError::EmptyTerm);

    let err = Vocabulary::new(["ajo"], [("...", "ajo")]).unwrap_err();
    assert_eq!(err, ConfigError::EmptyAlias);
}

#[test]
fn test_punctuation_does_not_hide_a_shadowing_alias() {
    let err = Vocabulary::new(["ajo", "cebolla"], [("ajo.", "cebolla")]).unwrap_err();
    assert_eq!(err, ConfigError::AliasShadowsTerm("ajo".into()));
}

#[test]
fn test_terms_differing_only_in_punctuation_are_duplicates() {
    let err = Vocabulary::new(["nuez moscada", "nuez-moscada"], Vec::<(&str, &str)>::new())
        .unwrap_err();
    assert_eq!(err, ConfigError::DuplicateTerm("nuez moscada".into()));
}

#[test]
fn test_terms_are_keyed_by_tokens() {
    let vocab = Vocabulary::new(["Sal.", "aceite (oliva)"], Vec::<(&str, &str)>::new()).unwrap();
    assert_eq!(vocab.terms(), ["sal", "aceite oliva"]);
}

#[test]
fn test_conflicting_aliases_are_fatal() {
    let err = Vocabulary::new(
        ["vino", "queso"],
        [("Vino Blanco", "vino"), ("vino  blanco", "queso")],
    )
    .unwrap_err();
    assert_eq!(err, ConfigError::DuplicateAlias("vino blanco".into()));
}

#[test]
fn test_repeated_alias_with_same_target_is_accepted() {
    let vocab = Vocabulary::new(["vino"], [("Vino Blanco", "vino"), ("vino  blanco", "vino")])
        .unwrap();
    assert_eq!(vocab.alias_count(), 1);
}
