use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::graph::LouvainConfig;

/// `[vocabulary]`: absent tables fall back to the built-in vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VocabularyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Threshold for the graph used by community detection.
    #[serde(default = "default_min_weight")]
    pub min_weight: u64,
    /// Threshold for the "important connections" graph used by centrality.
    #[serde(default = "default_strong_min_weight")]
    pub strong_min_weight: u64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            min_weight: default_min_weight(),
            strong_min_weight: default_strong_min_weight(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentationConfig {
    /// Marker that opens each recipe in a single-file corpus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_top")]
    pub top: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { top: default_top() }
    }
}

const fn default_min_weight() -> u64 { 1 }
const fn default_strong_min_weight() -> u64 { 3 }
const fn default_top() -> usize { 10 }

/// The on-disk shape of `recetario.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecetarioToml {
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub community: LouvainConfig,
    #[serde(default)]
    pub segmentation: SegmentationConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub vocabulary: VocabularyConfig,
    pub graph: GraphConfig,
    pub community: LouvainConfig,
    pub segmentation: SegmentationConfig,
    pub report: ReportConfig,
}

impl From<RecetarioToml> for Config {
    fn from(file: RecetarioToml) -> Self {
        Self {
            vocabulary: file.vocabulary,
            graph: file.graph,
            community: file.community,
            segmentation: file.segmentation,
            report: file.report,
        }
    }
}
