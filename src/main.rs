mod cli;
mod logging;
mod serve_cmd;
mod table_cmd;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use holiday_analyzer::config::AnalyzerConfig;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => AnalyzerConfig::load(path)
            .with_context(|| format!("failed to load config: {}", path.display()))?,
        None => AnalyzerConfig::default(),
    };
    if let Some(language) = cli.language {
        config.language = language;
    }

    match cli.command {
        Command::Table(args) => table_cmd::run(args, &config),
        Command::Serve(args) => serve_cmd::run(args, &config),
    }
}
