// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecetarioError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed co-occurrence table: {0}")]
    MalformedTable(String),
}

/// Fatal problems with the vocabulary or analysis settings, surfaced at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("vocabulary contains an empty canonical term")]
    EmptyTerm,

    #[error("canonical term '{0}' is declared more than once")]
    DuplicateTerm(String),

    #[error("synonym table contains an empty alias")]
    EmptyAlias,

    #[error("alias '{0}' is declared more than once with different targets")]
    DuplicateAlias(String),

    #[error("alias '{0}' is also declared as a canonical term")]
    AliasShadowsTerm(String),

    #[error("synonym cycle: {}", .0.join(" -> "))]
    SynonymCycle(Vec<String>),

    #[error("alias '{alias}' maps to '{target}', which is not a canonical term")]
    UnknownCanonical { alias: String, target: String },

    #[error("minimum edge weight must be at least 1 (got {0})")]
    InvalidThreshold(u64),

    #[error("invalid community detection settings: {0}")]
    InvalidCommunitySettings(String),
}

pub type Result<T> = std::result::Result<T, RecetarioError>;

// Allow `?` on std::io::Error by converting to RecetarioError::Io with unknown path.
impl From<std::io::Error> for RecetarioError {
    fn from(source: std::io::Error) -> Self {
        RecetarioError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Directory walks fail with a path attached when one is known.
impl From<walkdir::Error> for RecetarioError {
    fn from(e: walkdir::Error) -> Self {
        let path = e
            .path()
            .map_or_else(|| PathBuf::from("<unknown>"), std::path::Path::to_path_buf);
        let source = e
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
        RecetarioError::Io { source, path }
    }
}
