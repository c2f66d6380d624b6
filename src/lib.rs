pub mod analysis;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod graph;
pub mod matcher;
pub mod reporting;
pub mod text;
pub mod types; // Common Data Structures
pub mod vocabulary;
