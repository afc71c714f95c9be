//! Count on which weekdays public holidays fall.
//!
//! [`analyze_holidays`] asks a [`HolidayCalendar`](calendar::HolidayCalendar)
//! for the holidays of each requested year and tallies them per weekday;
//! [`format_holiday_table`] renders the tally as a fixed-width text table and
//! [`weekday_rows`] as structured rows for the web form.
//!
//! ```
//! use holiday_analyzer::calendar::GermanCalendar;
//! use holiday_analyzer::locale::Language;
//! use holiday_analyzer::{analyze_holidays, format_holiday_table};
//!
//! let calendar = GermanCalendar::new(Language::De);
//! let counts = analyze_holidays(&calendar, &[2024]).unwrap();
//! let table = format_holiday_table(&counts, &[2024], Language::De.labels()).unwrap();
//! assert!(table.starts_with("Analyse für die Jahre: 2024"));
//! ```

pub mod analyzer;
pub mod calendar;
pub mod config;
pub mod error;
pub mod locale;
pub mod table;
pub mod web;

pub use analyzer::{analyze_holidays, HolidayWeekdayCounts, WeekdayCounts, WEEKDAYS};
pub use error::{AnalyzerError, ConfigError, Result};
pub use table::{format_holiday_table, weekday_rows, WeekdayRow};
