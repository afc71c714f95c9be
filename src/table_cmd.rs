use anyhow::{Context, Result};
use tracing::info;

use holiday_analyzer::config::AnalyzerConfig;
use holiday_analyzer::{analyze_holidays, format_holiday_table, weekday_rows};

use crate::cli::TableArgs;

/// Print the weekday table of the requested years.
pub fn run(args: TableArgs, config: &AnalyzerConfig) -> Result<()> {
    let calendar = config.calendar();
    let labels = config.language.labels();

    info!(years = ?args.years, language = config.language.code(), "analyzing holidays");
    let counts = analyze_holidays(&calendar, &args.years)?;

    if args.json {
        let rows = weekday_rows(&counts, labels);
        let json = serde_json::to_string_pretty(&rows).context("failed to serialize rows")?;
        println!("{json}");
    } else {
        println!("{}", format_holiday_table(&counts, &args.years, labels)?);
    }
    Ok(())
}
