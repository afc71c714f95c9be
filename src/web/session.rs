//! Per-request form state and the year-change recompute step.

use serde::Serialize;
use tracing::{info, warn};

use super::state::AppState;
use crate::analyzer::{analyze_holidays, HolidayWeekdayCounts};
use crate::error::Result;
use crate::table::{weekday_rows, WeekdayRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// Message shown to the user after a year change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// What the form currently shows.
#[derive(Debug, Clone)]
pub struct Session {
    /// Year in the input field
    pub selected_year: String,
    /// Table rows, Monday first
    pub rows: Vec<WeekdayRow>,
    pub notifications: Vec<Notification>,
}

impl Session {
    /// Form with `selected_year` prefilled and an all-zero table.
    pub fn new(state: &AppState, selected_year: i32) -> Self {
        Self {
            selected_year: selected_year.to_string(),
            rows: weekday_rows(&HolidayWeekdayCounts::new(), state.language.labels()),
            notifications: Vec::new(),
        }
    }

    /// Validate `input`, recompute the table and record one notification.
    ///
    /// Rejected input leaves the selected year and the rows untouched.
    pub fn on_year_change(&mut self, input: &str, state: &AppState) {
        let language = state.language;
        let year = match state.years.parse_year(input) {
            Ok(year) => year,
            Err(err) => {
                info!(input, %err, "year rejected");
                self.notify(NotificationLevel::Error, language.year_error_message(&err));
                return;
            }
        };

        match self.recompute(year, state) {
            Ok(()) => self.notify(NotificationLevel::Success, language.analysis_done_message(year)),
            Err(err) => {
                warn!(year, %err, "holiday analysis failed");
                self.notify(NotificationLevel::Error, language.analysis_failed_message(year));
            }
        }
    }

    fn recompute(&mut self, year: i32, state: &AppState) -> Result<()> {
        let counts = analyze_holidays(state.calendar.as_ref(), &[year])?;
        self.rows = weekday_rows(&counts, state.language.labels());
        self.selected_year = year.to_string();
        Ok(())
    }

    fn notify(&mut self, level: NotificationLevel, message: String) {
        self.notifications.push(Notification { level, message });
    }
}
