// tests/unit_cooccurrence.rs
//! Co-occurrence accumulation and exchange format.

use recetario_core::graph::CooccurrenceTable;
use recetario_core::reporting::{table_from_json, table_to_json};
use recetario_core::types::IngredientSet;

fn set(items: &[&str]) -> IngredientSet {
    items.iter().copied().collect()
}

fn worked_example() -> CooccurrenceTable {
    CooccurrenceTable::accumulate(&[set(&["ajo", "tomate"]), set(&["ajo", "tomate", "cebolla"])])
}

#[test]
fn test_worked_example_counts() {
    let table = worked_example();
    assert_eq!(table.count("ajo", "tomate"), 2);
    assert_eq!(table.count("ajo", "cebolla"), 1);
    assert_eq!(table.count("tomate", "cebolla"), 1);
    assert_eq!(table.pair_count(), 3);
    assert_eq!(table.len(), 3);
}

#[test]
fn test_table_is_symmetric_without_self_entries() {
    let table = CooccurrenceTable::accumulate(&[
        set(&["ajo", "sal", "aceite", "pan"]),
        set(&["sal", "pan"]),
        set(&["huevo"]),
        set(&[]),
    ]);
    assert!(table.is_symmetric());
    for a in table.ingredients() {
        assert_eq!(table.count(a, a), 0);
        for (b, &n) in table.neighbors(a).unwrap() {
            assert_eq!(table.count(b, a), n);
        }
    }
    // Segments with fewer than two ingredients contribute nothing.
    assert!(table.neighbors("huevo").is_none());
}

#[test]
fn test_order_of_segments_does_not_matter() {
    let forward = worked_example();
    let backward =
        CooccurrenceTable::accumulate(&[set(&["ajo", "tomate", "cebolla"]), set(&["ajo", "tomate"])]);
    assert_eq!(forward, backward);
}

#[test]
fn test_merge_is_pointwise_sum() {
    let a = CooccurrenceTable::accumulate(&[set(&["ajo", "tomate"])]);
    let b = CooccurrenceTable::accumulate(&[set(&["ajo", "tomate", "cebolla"])]);
    assert_eq!(a.merge(b), worked_example());
}

#[test]
fn test_empty_corpus_gives_empty_table() {
    let table = CooccurrenceTable::par_accumulate(&[]);
    assert!(table.is_empty());
    assert_eq!(table.pair_count(), 0);
}

#[test]
fn test_json_round_trip_preserves_counts() {
    let table = worked_example();
    let json = table_to_json(&table).unwrap();
    assert!(json.contains("\"ajo\""));
    let back = table_from_json(&json).unwrap();
    assert_eq!(back, table);
    assert_eq!(back.count("tomate", "ajo"), 2);
}

#[test]
fn test_malformed_json_tables_are_rejected() {
    assert!(table_from_json(r#"{"ajo": {"ajo": 1}}"#).is_err());
    assert!(table_from_json(r#"{"ajo": {"sal": 1}}"#).is_err());
    assert!(table_from_json(r#"{"ajo": {"sal": 0}, "sal": {"ajo": 0}}"#).is_err());
    assert!(table_from_json(r#"{"ajo": {"sal": 2}, "sal": {"ajo": 2}}"#).is_ok());
}
