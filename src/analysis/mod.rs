// src/analysis/mod.rs
//! The analysis pipeline: segments in, co-occurrence metrics out.

pub mod engine;
pub mod report;

pub use engine::AnalysisEngine;
pub use report::{AnalysisReport, GraphSummary};
