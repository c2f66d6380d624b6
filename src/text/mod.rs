// src/text/mod.rs
pub mod normalize;
pub mod segment;

pub use normalize::{collapse_whitespace, fold_case, tokenize, Normalizer, Transform};
pub use segment::{split_on_header, split_paragraphs};
