// src/graph/mod.rs
pub mod builder;
pub mod centrality;
pub mod community;
pub mod cooccurrence;
pub mod snapshot;

pub use builder::GraphBuilder;
pub use centrality::{
    betweenness_centrality, closeness_centrality, degree_centrality, CentralityReport,
    CentralityScores,
};
pub use community::{CommunityDetector, CommunityPartition, LouvainConfig};
pub use cooccurrence::{CooccurrenceTable, NestedCounts};
pub use snapshot::{Edge, IngredientGraph};
