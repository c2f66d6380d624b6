// src/text/segment.rs
//! Splitting a raw corpus into per-recipe segments.

use regex::RegexBuilder;

/// Splits a corpus at every whole-word, case-insensitive occurrence of `header`.
/// Word boundaries are only enforced on edges where the header has a word character.
///
/// The marker itself is dropped and blank pieces are discarded. An empty or
/// blank header leaves the corpus as a single segment.
#[must_use]
pub fn split_on_header(corpus: &str, header: &str) -> Vec<String> {
    let header = header.trim();
    if header.is_empty() {
        return non_blank([corpus]);
    }

    let pattern = format!(
        "{}{}{}",
        word_boundary(header.chars().next()),
        regex::escape(header),
        word_boundary(header.chars().next_back()),
    );
    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => non_blank(re.split(corpus)),
        Err(_) => non_blank([corpus]),
    }
}

/// Splits a corpus into blank-line separated paragraphs.
#[must_use]
pub fn split_paragraphs(corpus: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = Vec::new();

    for line in corpus.lines() {
        if line.trim().is_empty() {
            flush(&mut current, &mut out);
        } else {
            current.push(line.trim());
        }
    }
    flush(&mut current, &mut out);
    out
}

/// `\b` next to a word character, nothing next to a symbol such as `#`.
fn word_boundary(edge: Option<char>) -> &'static str {
    match edge {
        Some(c) if c.is_alphanumeric() || c == '_' => r"\b",
        _ => "",
    }
}

fn flush(current: &mut Vec<&str>, out: &mut Vec<String>) {
    if !current.is_empty() {
        out.push(current.join("\n"));
        current.clear();
    }
}

fn non_blank<'a, I>(pieces: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    pieces
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}
