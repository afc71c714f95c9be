use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::calendar::{GermanCalendar, NamedHoliday};
use crate::error::{AnalyzerError, ConfigError, Result};
use crate::locale::Language;

/// Top-level analyzer configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalyzerConfig {
    /// Language of holiday names, table labels and messages.
    #[serde(default)]
    pub language: Language,

    /// Years accepted by the web form.
    #[serde(default)]
    pub years: YearRange,

    /// Web server settings.
    #[serde(default)]
    pub web: WebConfig,

    /// Calendar settings.
    #[serde(default)]
    pub calendar: CalendarConfig,
}

/// Inclusive window of years the web form accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct YearRange {
    #[serde(default = "default_min_year")]
    pub min: i32,
    #[serde(default = "default_max_year")]
    pub max: i32,
}

impl Default for YearRange {
    fn default() -> Self {
        Self {
            min: default_min_year(),
            max: default_max_year(),
        }
    }
}

fn default_min_year() -> i32 {
    1950
}
fn default_max_year() -> i32 {
    2099
}

impl YearRange {
    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }

    /// Parse a user supplied year and check it against the window.
    pub fn parse_year(&self, input: &str) -> Result<i32> {
        let year: i32 = input
            .trim()
            .parse()
            .map_err(|_| AnalyzerError::InvalidYear {
                input: input.to_string(),
            })?;
        if !self.contains(year) {
            return Err(AnalyzerError::YearOutOfRange {
                year,
                min: self.min,
                max: self.max,
            });
        }
        Ok(year)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,
    /// First port tried when no explicit port is given.
    #[serde(default = "default_port_start")]
    pub port_start: u16,
    /// Last port tried when no explicit port is given.
    #[serde(default = "default_port_end")]
    pub port_end: u16,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port_start: default_port_start(),
            port_end: default_port_end(),
        }
    }
}

impl WebConfig {
    pub fn ports(&self) -> RangeInclusive<u16> {
        self.port_start..=self.port_end
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port_start() -> u16 {
    5000
}
fn default_port_end() -> u16 {
    5010
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarConfig {
    /// Rules appended to the built-in German holidays.
    #[serde(default)]
    pub additional_rules: Vec<NamedHoliday>,
}

impl AnalyzerConfig {
    /// Read and validate a TOML configuration file.
    pub fn load(path: &Path) -> std::result::Result<Self, ConfigError> {
        debug!(path = %path.display(), "loading config");
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> std::result::Result<Self, ConfigError> {
        let config: AnalyzerConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.years.min > self.years.max {
            return Err(ConfigError::Invalid(format!(
                "years.min ({}) must not exceed years.max ({})",
                self.years.min, self.years.max
            )));
        }
        if self.web.port_start > self.web.port_end {
            return Err(ConfigError::Invalid(format!(
                "web.port_start ({}) must not exceed web.port_end ({})",
                self.web.port_start, self.web.port_end
            )));
        }
        if let Some(rule) = self
            .calendar
            .additional_rules
            .iter()
            .find(|rule| rule.name.trim().is_empty())
        {
            return Err(ConfigError::Invalid(format!(
                "additional rule {:?} has an empty name",
                rule.rule
            )));
        }
        Ok(())
    }

    /// German calendar in the configured language, extended by the additional rules.
    pub fn calendar(&self) -> GermanCalendar {
        let mut calendar = GermanCalendar::new(self.language);
        for rule in &self.calendar.additional_rules {
            calendar.add_holiday_rule(rule.clone());
        }
        calendar
    }
}
