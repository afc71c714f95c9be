//! Display language for holiday names, table labels and user messages.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AnalyzerError;

/// Language used for holiday names and every user visible text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    De,
    En,
}

/// Fixed labels of the weekday table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    /// Weekday labels, Monday first
    pub weekdays: [&'static str; 7],
    pub weekday_header: &'static str,
    pub count_header: &'static str,
    pub holidays_header: &'static str,
    /// Printed in front of the analyzed years in the table title
    pub title_prefix: &'static str,
}

impl Labels {
    pub fn weekday(&self, weekday: Weekday) -> &'static str {
        self.weekdays[weekday.num_days_from_monday() as usize]
    }
}

pub const GERMAN: Labels = Labels {
    weekdays: [
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
        "Sonntag",
    ],
    weekday_header: "Wochentag",
    count_header: "Anzahl",
    holidays_header: "Feiertage",
    title_prefix: "Analyse für die Jahre: ",
};

pub const ENGLISH: Labels = Labels {
    weekdays: [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ],
    weekday_header: "Weekday",
    count_header: "Count",
    holidays_header: "Holidays",
    title_prefix: "Analysis for the years: ",
};

impl Language {
    pub fn labels(self) -> &'static Labels {
        match self {
            Language::De => &GERMAN,
            Language::En => &ENGLISH,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
        }
    }

    pub fn invalid_year_message(self) -> String {
        match self {
            Language::De => "Bitte geben Sie ein gültiges Jahr ein".to_string(),
            Language::En => "Please enter a valid year".to_string(),
        }
    }

    pub fn year_range_message(self, min: i32, max: i32) -> String {
        match self {
            Language::De => format!("Bitte geben Sie ein Jahr zwischen {min} und {max} ein"),
            Language::En => format!("Please enter a year between {min} and {max}"),
        }
    }

    /// Message for a rejected year input; range errors name the accepted window.
    pub fn year_error_message(self, err: &AnalyzerError) -> String {
        match err {
            AnalyzerError::YearOutOfRange { min, max, .. } => self.year_range_message(*min, *max),
            _ => self.invalid_year_message(),
        }
    }

    pub fn analysis_done_message(self, year: i32) -> String {
        match self {
            Language::De => format!("Analyse für {year} abgeschlossen"),
            Language::En => format!("Analysis for {year} completed"),
        }
    }

    pub fn analysis_failed_message(self, year: i32) -> String {
        match self {
            Language::De => format!("Fehler bei der Analyse für {year}"),
            Language::En => format!("Error analyzing {year}"),
        }
    }

    pub fn page_title(self) -> &'static str {
        match self {
            Language::De => "Deutscher Feiertagsanalysator",
            Language::En => "German Public Holiday Analyzer",
        }
    }

    pub fn page_heading(self) -> &'static str {
        match self {
            Language::De => "Feiertagsverteilung nach Wochentag",
            Language::En => "Holiday distribution by weekday",
        }
    }

    pub fn year_input_label(self, min: i32, max: i32) -> String {
        match self {
            Language::De => format!("Jahr zur Analyse eingeben ({min}-{max}):"),
            Language::En => format!("Enter a year to analyze ({min}-{max}):"),
        }
    }

    pub fn analyze_button(self) -> &'static str {
        match self {
            Language::De => "Analysieren",
            Language::En => "Analyze",
        }
    }
}

impl FromStr for Language {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "de" | "german" | "deutsch" => Ok(Language::De),
            "en" | "english" => Ok(Language::En),
            _ => Err(AnalyzerError::UnknownLanguage {
                input: s.to_string(),
            }),
        }
    }
}
