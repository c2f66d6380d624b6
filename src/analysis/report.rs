// src/analysis/report.rs
use serde::Serialize;

use crate::graph::{
    CentralityReport, CommunityPartition, CooccurrenceTable, Edge, IngredientGraph,
};

/// Node and edge listing of one graph snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphSummary {
    pub min_weight: u64,
    pub nodes: Vec<String>,
    pub edges: Vec<Edge>,
}

impl GraphSummary {
    #[must_use]
    pub fn of(graph: &IngredientGraph) -> Self {
        Self {
            min_weight: graph.min_weight(),
            nodes: graph.names().to_vec(),
            edges: graph.edges(),
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// Everything one pipeline run produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub segments: usize,
    /// Distinct ingredients found in each segment, in input order.
    pub ingredients_per_segment: Vec<usize>,
    pub cooccurrence: CooccurrenceTable,
    /// Graph used for community detection.
    pub graph: GraphSummary,
    /// Higher-threshold graph used for centrality rankings.
    pub strong_graph: GraphSummary,
    pub centrality: CentralityReport,
    pub communities: CommunityPartition,
    pub duration_ms: u128,
}

impl AnalysisReport {
    /// Segments in which no vocabulary term was found.
    #[must_use]
    pub fn unmatched_segments(&self) -> usize {
        self.ingredients_per_segment
            .iter()
            .filter(|&&n| n == 0)
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cooccurrence.is_empty()
    }
}
