use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "recetario",
    version,
    about = "Ingredient co-occurrence graphs from recipe text"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
    /// Configuration file (defaults to ./recetario.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Enable debug logging on stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the co-occurrence graph and compute centrality and communities
    Analyze {
        /// A corpus file, or a directory with one .txt file per recipe
        path: PathBuf,
        /// Marker that opens each recipe in a single-file corpus
        #[arg(long)]
        header: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write the report here instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
        /// Rows per centrality ranking
        #[arg(long)]
        top: Option<usize>,
    },
    /// Validate the vocabulary and print its size
    Vocab,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
