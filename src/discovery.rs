// src/discovery.rs
//! Loads recipe segments from disk.
//!
//! A directory yields one segment per `.txt` file, sorted by path. A file is
//! split on the configured header marker, or into paragraphs when no header
//! is set.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{RecetarioError, Result};
use crate::text::{split_on_header, split_paragraphs};

const SEGMENT_EXT: &str = "txt";

/// Runs segment discovery for `target`.
///
/// # Errors
/// Returns an error if `target` does not exist or a file cannot be read.
pub fn discover(target: &Path, config: &Config) -> Result<Vec<String>> {
    let segments = if target.is_dir() {
        let files = walk_segment_files(target)?;
        tracing::debug!(files = files.len(), "found segment files");
        read_each(&files)?
    } else {
        let corpus = read(target)?;
        split_corpus(&corpus, config.segmentation.header.as_deref())
    };

    tracing::info!(
        target = %target.display(),
        segments = segments.len(),
        "loaded recipe segments"
    );
    Ok(segments)
}

/// Splits one corpus into segments.
#[must_use]
pub fn split_corpus(corpus: &str, header: Option<&str>) -> Vec<String> {
    match header {
        Some(h) if !h.trim().is_empty() => split_on_header(corpus, h),
        _ => split_paragraphs(corpus),
    }
}

fn walk_segment_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && has_segment_ext(entry.path()) {
            paths.push(entry.into_path());
        }
    }
    paths.sort();
    Ok(paths)
}

fn has_segment_ext(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(SEGMENT_EXT))
}

fn read_each(files: &[PathBuf]) -> Result<Vec<String>> {
    let mut segments = Vec::with_capacity(files.len());
    for path in files {
        let text = read(path)?;
        if text.trim().is_empty() {
            tracing::debug!(path = %path.display(), "skipping blank segment file");
            continue;
        }
        segments.push(text);
    }
    Ok(segments)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| RecetarioError::Io {
        source,
        path: path.to_path_buf(),
    })
}
