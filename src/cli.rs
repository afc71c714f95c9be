use std::path::PathBuf;

use clap::{Parser, Subcommand};

use holiday_analyzer::locale::Language;
use holiday_analyzer::AnalyzerError;

/// German public holiday weekday analyzer.
#[derive(Parser)]
#[command(
    name = "holiday-analyzer",
    version,
    about = "Count on which weekdays German public holidays fall"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Language of holiday names and labels ("de" or "en"), overrides the config.
    #[arg(short, long, global = true, value_parser = parse_language)]
    pub language: Option<Language>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the weekday table for one or more years.
    Table(TableArgs),
    /// Serve the interactive web form.
    Serve(ServeArgs),
}

/// Arguments for the `table` subcommand.
#[derive(clap::Args)]
pub struct TableArgs {
    /// Year to analyze, repeat for several years.
    #[arg(short, long = "year", default_values_t = [2024])]
    pub years: Vec<i32>,

    /// Print the weekday rows as JSON instead of a text table.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `serve` subcommand.
#[derive(clap::Args)]
pub struct ServeArgs {
    /// Override the bind host from config.
    #[arg(long)]
    pub host: Option<String>,

    /// Bind exactly this port instead of the first free one of the configured range.
    #[arg(short, long)]
    pub port: Option<u16>,
}

fn parse_language(s: &str) -> Result<Language, AnalyzerError> {
    s.parse()
}
