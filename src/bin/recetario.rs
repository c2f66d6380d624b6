// src/bin/recetario.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::Level;

use recetario_core::cli::{self, AnalyzeArgs, Cli, Commands};
use recetario_core::config::Config;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e:#}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;
    dispatch(cli.command, &mut config)
}

fn dispatch(command: Commands, config: &mut Config) -> Result<()> {
    match command {
        Commands::Analyze {
            path,
            header,
            format,
            output,
            top,
        } => cli::handle_analyze(
            config,
            &AnalyzeArgs {
                path,
                header,
                format,
                output,
                top,
            },
        ),
        Commands::Vocab => cli::handle_vocab(config),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
