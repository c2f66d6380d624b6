// src/config/mod.rs
pub mod types;

pub use self::types::{
    Config, GraphConfig, RecetarioToml, ReportConfig, SegmentationConfig, VocabularyConfig,
};

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, RecetarioError, Result};
use crate::graph::{CommunityDetector, GraphBuilder};
use crate::vocabulary::Vocabulary;

/// Looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "recetario.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `path`, or `recetario.toml` from the working directory.
    ///
    /// A missing default file yields defaults; a missing explicit file is an error.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, is not valid TOML, or fails
    /// [`Config::validate`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(p) => (p, true),
            None => (Path::new(CONFIG_FILE), false),
        };

        if !explicit && !path.exists() {
            tracing::debug!("no {CONFIG_FILE} found, using defaults");
            let config = Self::new();
            config.validate()?;
            return Ok(config);
        }

        let content = fs::read_to_string(path).map_err(|source| RecetarioError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let config = Self::parse_toml(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    /// Returns an error on malformed TOML or invalid settings.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let file: RecetarioToml = toml::from_str(content)?;
        let config = Self::from(file);
        config.validate()?;
        Ok(config)
    }

    /// Checks every setting that would otherwise fail later in the pipeline.
    ///
    /// # Errors
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.build_vocabulary()?;
        GraphBuilder::new(self.graph.min_weight)?;
        GraphBuilder::new(self.graph.strong_min_weight)?;
        self.community.validate()
    }

    /// Builds the configured vocabulary, falling back to the built-in tables.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] for a malformed vocabulary.
    pub fn build_vocabulary(&self) -> std::result::Result<Vocabulary, ConfigError> {
        let defaults = Vocabulary::builtin()?;
        let synonyms: Vec<(String, String)> = match &self.vocabulary.synonyms {
            Some(map) => map.iter().map(|(a, c)| (a.clone(), c.clone())).collect(),
            None if self.vocabulary.terms.is_none() => defaults
                .aliases()
                .map(|(a, c)| (a.to_string(), c.to_string()))
                .collect(),
            None => Vec::new(),
        };

        match &self.vocabulary.terms {
            Some(terms) => Vocabulary::new(terms, synonyms),
            None => Vocabulary::new(defaults.terms(), synonyms),
        }
    }

    /// Builder for the community-detection graph.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidThreshold`] for a zero threshold.
    pub fn community_graph_builder(&self) -> std::result::Result<GraphBuilder, ConfigError> {
        GraphBuilder::new(self.graph.min_weight)
    }

    /// Builder for the centrality ("important connections") graph.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidThreshold`] for a zero threshold.
    pub fn centrality_graph_builder(&self) -> std::result::Result<GraphBuilder, ConfigError> {
        GraphBuilder::new(self.graph.strong_min_weight)
    }

    /// # Errors
    /// Returns an error for invalid community-detection bounds.
    pub fn community_detector(&self) -> std::result::Result<CommunityDetector, ConfigError> {
        CommunityDetector::new(self.community)
    }

    /// Serializes the file-facing part of the configuration.
    ///
    /// # Errors
    /// Returns an error if TOML serialization fails.
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        let file = RecetarioToml {
            vocabulary: self.vocabulary.clone(),
            graph: self.graph.clone(),
            community: self.community,
            segmentation: self.segmentation.clone(),
            report: self.report.clone(),
        };
        toml::to_string_pretty(&file)
    }
}
