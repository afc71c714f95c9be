//! Weekday table built from a [`HolidayWeekdayCounts`] aggregation.

use chrono::Weekday;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::analyzer::{HolidayWeekdayCounts, WEEKDAYS};
use crate::error::{AnalyzerError, Result};
use crate::locale::Labels;

/// Width of the holiday column when no weekday has any holiday
pub const FALLBACK_HOLIDAYS_WIDTH: usize = 20;

/// Smallest width of the count column
pub const MIN_COUNT_WIDTH: usize = 3;

/// One weekday of the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdayRow {
    pub weekday: Weekday,
    pub label: String,
    /// Occurrences of all holidays on this weekday
    pub count: u32,
    /// Distinct holiday names, sorted
    pub holidays: Vec<String>,
}

impl WeekdayRow {
    pub fn holiday_list(&self) -> String {
        self.holidays.join(", ")
    }
}

/// Seven rows, Monday first, with the totals and holiday names of `counts`.
pub fn weekday_rows(counts: &HolidayWeekdayCounts, labels: &Labels) -> Vec<WeekdayRow> {
    let totals = counts.weekday_totals();
    WEEKDAYS
        .iter()
        .map(|&weekday| WeekdayRow {
            weekday,
            label: labels.weekday(weekday).to_string(),
            count: totals.get(weekday),
            holidays: counts
                .holidays_on(weekday)
                .into_iter()
                .map(str::to_owned)
                .collect(),
        })
        .collect()
}

/// Render `counts` as a fixed-width text table titled with the sorted `years`.
pub fn format_holiday_table(
    counts: &HolidayWeekdayCounts,
    years: &[i32],
    labels: &Labels,
) -> Result<String> {
    info!(holidays = counts.len(), ?years, "formatting holiday table");

    if counts.is_empty() {
        error!("empty holiday counts provided");
        return Err(AnalyzerError::EmptyCounts);
    }

    let rows = weekday_rows(counts, labels);
    let lists: Vec<String> = rows.iter().map(WeekdayRow::holiday_list).collect();

    let weekday_width = labels
        .weekdays
        .iter()
        .chain(std::iter::once(&labels.weekday_header))
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);
    let max_total = rows.iter().map(|row| row.count).max().unwrap_or(0);
    let count_width = MIN_COUNT_WIDTH.max(max_total.to_string().len());
    let holidays_width = rows
        .iter()
        .zip(&lists)
        .filter(|(row, _)| !row.holidays.is_empty())
        .map(|(_, list)| list.chars().count())
        .max()
        .unwrap_or(FALLBACK_HOLIDAYS_WIDTH);

    let header = format!(
        "{:<weekday_width$} | {:^count_width$} | {:<holidays_width$}",
        labels.weekday_header, labels.count_header, labels.holidays_header
    );
    let separator = "-".repeat(header.chars().count());

    let mut sorted_years = years.to_vec();
    sorted_years.sort_unstable();
    let title = format!(
        "{}{}",
        labels.title_prefix,
        sorted_years
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let mut lines = vec![title, String::new(), header, separator];
    for (row, list) in rows.iter().zip(&lists) {
        lines.push(format!(
            "{:<weekday_width$} | {:^count_width$} | {:<holidays_width$}",
            row.label, row.count, list
        ));
        debug!(weekday = %row.label, count = row.count, "added row");
    }

    info!("table formatting completed");
    Ok(lines.join("\n"))
}
