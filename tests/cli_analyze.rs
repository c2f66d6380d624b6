// tests/cli_analyze.rs
//! `recetario analyze` through the built binary: JSON on stdout, `--output`,
//! `--header` and the text report.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// A temp directory holding a `corpus/` folder with one recipe per file.
fn workspace() -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    let corpus = dir.path().join("corpus");
    fs::create_dir_all(&corpus).expect("failed to create corpus dir");
    fs::write(corpus.join("01.txt"), "Ajo, tomate y aceite de oliva.").expect("write 01");
    fs::write(corpus.join("02.txt"), "Tomate, ajo y un poco de sal.").expect("write 02");
    fs::write(corpus.join("03.txt"), "Harina, huevo y leche.").expect("write 03");
    dir
}

fn recetario(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_recetario"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to execute recetario")
}

fn parse_json(text: &str) -> serde_json::Value {
    serde_json::from_str(text).expect("output is not valid JSON")
}

#[test]
fn test_json_report_on_stdout() {
    let dir = workspace();
    let output = recetario(dir.path(), &["analyze", "corpus", "--format", "json"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let report = parse_json(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(report["segments"], 3);
    assert_eq!(report["cooccurrence"]["ajo"]["tomate"], 2);
    assert_eq!(report["cooccurrence"]["tomate"]["ajo"], 2);
    assert!(report["communities"]["assignments"].is_object());
    assert!(report["centrality"]["betweenness"].is_object());
}

#[test]
fn test_output_flag_writes_file() {
    let dir = workspace();
    let output = recetario(
        dir.path(),
        &["analyze", "corpus", "--format", "json", "--output", "out/report.json"],
    );
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty(), "JSON should go to the file, not stdout");

    let written = fs::read_to_string(dir.path().join("out/report.json"))
        .expect("report file was not written");
    let report = parse_json(&written);
    assert_eq!(report["segments"], 3);
}

#[test]
fn test_text_report_with_json_copy() {
    let dir = workspace();
    let output = recetario(dir.path(), &["analyze", "corpus", "--output", "report.json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("RECETARIO"), "stdout: {stdout}");
    assert!(stdout.contains("COMMUNITIES"), "stdout: {stdout}");
    assert!(dir.path().join("report.json").exists());
}

#[test]
fn test_header_flag_splits_single_file() {
    let dir = workspace();
    fs::write(
        dir.path().join("recetas.txt"),
        "Ingred Ientes ajo y tomate\nIngred Ientes tomate y ajo\nIngred Ientes harina",
    )
    .expect("write corpus");

    let output = recetario(
        dir.path(),
        &["analyze", "recetas.txt", "--header", "Ingred Ientes", "--format", "json"],
    );
    assert!(output.status.success());
    let report = parse_json(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(report["segments"], 3);
    assert_eq!(report["cooccurrence"]["ajo"]["tomate"], 2);
}

#[test]
fn test_config_file_in_working_directory_is_used() {
    let dir = workspace();
    fs::write(dir.path().join("recetario.toml"), "[graph]\nmin_weight = 2\n")
        .expect("write config");

    let output = recetario(dir.path(), &["analyze", "corpus", "--format", "json"]);
    assert!(output.status.success());
    let report = parse_json(&String::from_utf8_lossy(&output.stdout));
    assert_eq!(report["graph"]["min_weight"], 2);
    assert_eq!(report["graph"]["nodes"], serde_json::json!(["ajo", "tomate"]));
}
