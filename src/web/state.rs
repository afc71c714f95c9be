//! Application state for the HTTP server.

use std::sync::Arc;

use crate::calendar::HolidayCalendar;
use crate::config::{AnalyzerConfig, YearRange};
use crate::locale::Language;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Holiday source for every analysis
    pub calendar: Arc<dyn HolidayCalendar + Send + Sync>,
    /// Language of labels and notifications
    pub language: Language,
    /// Years the form accepts
    pub years: YearRange,
}

impl AppState {
    pub fn new(
        calendar: Arc<dyn HolidayCalendar + Send + Sync>,
        language: Language,
        years: YearRange,
    ) -> Self {
        Self {
            calendar,
            language,
            years,
        }
    }

    /// State with the configured German calendar.
    pub fn from_config(config: &AnalyzerConfig) -> Self {
        Self::new(Arc::new(config.calendar()), config.language, config.years)
    }
}
