// src/cli/handlers.rs
//! Command handlers.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;

use super::args::OutputFormat;
use crate::analysis::AnalysisEngine;
use crate::config::Config;
use crate::discovery;
use crate::reporting;

/// Options for the `analyze` command.
pub struct AnalyzeArgs {
    pub path: PathBuf,
    pub header: Option<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
}

/// Handles the analyze command.
///
/// # Errors
/// Returns an error if configuration is invalid, segments cannot be read, or
/// the report cannot be written.
pub fn handle_analyze(config: &mut Config, args: &AnalyzeArgs) -> Result<()> {
    if let Some(header) = &args.header {
        config.segmentation.header = Some(header.clone());
    }
    if let Some(top) = args.top {
        config.report.top = top;
    }

    let engine = AnalysisEngine::new(config)?;
    let segments = discovery::discover(&args.path, config)
        .with_context(|| format!("reading segments from {}", args.path.display()))?;
    let report = engine.run(&segments);

    match (args.format, &args.output) {
        (OutputFormat::Json, Some(out)) => write_output(out, &reporting::format_json(&report)?),
        (OutputFormat::Json, None) => {
            println!("{}", reporting::format_json(&report)?);
            Ok(())
        }
        (OutputFormat::Text, out) => {
            reporting::print_report(&report, config.report.top);
            if let Some(out) = out {
                write_output(out, &reporting::format_json(&report)?)?;
            }
            Ok(())
        }
    }
}

/// Handles the vocab command.
///
/// # Errors
/// Returns an error if the vocabulary is malformed.
pub fn handle_vocab(config: &Config) -> Result<()> {
    let vocab = config.build_vocabulary()?;
    let aliases = vocab.alias_count();
    println!(
        "{} {} canonical terms | {} {}",
        "VOCABULARY".cyan().bold(),
        vocab.len(),
        aliases,
        if aliases == 1 { "alias" } else { "aliases" }
    );
    for (alias, canonical) in vocab.aliases() {
        println!("    {} {} {}", alias, "→".dimmed(), canonical.green());
    }
    Ok(())
}

fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
    eprintln!("{} {}", "Wrote".dimmed(), path.display());
    Ok(())
}
