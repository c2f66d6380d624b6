// src/analysis/engine.rs
//! Main execution logic for the analysis pipeline.

use std::time::Instant;

use crate::config::Config;
use crate::error::ConfigError;
use crate::graph::{CentralityReport, CommunityDetector, CooccurrenceTable, GraphBuilder};
use crate::matcher::EntityMatcher;
use crate::types::IngredientSet;
use crate::vocabulary::Vocabulary;

use super::report::{AnalysisReport, GraphSummary};

/// Orchestrates matching, accumulation, graph construction and the metrics.
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    vocabulary: Vocabulary,
    matcher: EntityMatcher,
    community_graph: GraphBuilder,
    centrality_graph: GraphBuilder,
    detector: CommunityDetector,
}

impl AnalysisEngine {
    /// # Errors
    /// Returns a [`ConfigError`] if the vocabulary, thresholds or community
    /// settings are invalid.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let vocabulary = config.build_vocabulary()?;
        let matcher = EntityMatcher::new(&vocabulary);
        Ok(Self {
            vocabulary,
            matcher,
            community_graph: config.community_graph_builder()?,
            centrality_graph: config.centrality_graph_builder()?,
            detector: config.community_detector()?,
        })
    }

    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    #[must_use]
    pub fn matcher(&self) -> &EntityMatcher {
        &self.matcher
    }

    /// Runs the whole pipeline over already segmented text.
    #[must_use]
    pub fn run<S>(&self, segments: &[S]) -> AnalysisReport
    where
        S: AsRef<str> + Sync,
    {
        let start = Instant::now();
        let sets = self.matcher.match_all(segments);
        let mut report = self.analyze_sets(&sets);
        report.duration_ms = start.elapsed().as_millis();
        report
    }

    /// Runs the pipeline from per-segment ingredient sets onward.
    #[must_use]
    pub fn analyze_sets(&self, sets: &[IngredientSet]) -> AnalysisReport {
        let start = Instant::now();
        if sets.is_empty() {
            tracing::info!("empty corpus, nothing to analyze");
        }

        let table = CooccurrenceTable::par_accumulate(sets);
        let graph = self.community_graph.build(&table);
        let strong = self.centrality_graph.build(&table);

        let (centrality, communities) = rayon::join(
            || CentralityReport::compute(&strong),
            || self.detector.detect(&graph),
        );

        tracing::info!(
            segments = sets.len(),
            ingredients = table.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            communities = communities.community_count(),
            modularity = communities.modularity,
            "analysis complete"
        );

        AnalysisReport {
            segments: sets.len(),
            ingredients_per_segment: sets.iter().map(IngredientSet::len).collect(),
            cooccurrence: table,
            graph: GraphSummary::of(&graph),
            strong_graph: GraphSummary::of(&strong),
            centrality,
            communities,
            duration_ms: start.elapsed().as_millis(),
        }
    }
}
