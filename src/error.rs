//! Error types for the holiday analyzer.

use std::path::PathBuf;

/// Error type for the analysis, formatting and year validation operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalyzerError {
    /// Returned by the aggregation when no year was requested.
    #[error("years list cannot be empty")]
    EmptyYears,

    /// Returned by the table formatter for an empty aggregation.
    #[error("holiday counts cannot be empty")]
    EmptyCounts,

    /// Returned when a year input is not an integer.
    #[error("invalid year: {input:?}")]
    InvalidYear {
        /// The rejected input.
        input: String,
    },

    /// Returned when a year lies outside the accepted window.
    #[error("year {year} is outside the accepted range {min}..={max}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    /// Returned when the calendar cannot represent the year at all.
    #[error("year {year} is not supported by the calendar")]
    UnsupportedYear { year: i32 },

    /// Returned when a language code is not recognized.
    #[error("unknown language: {input:?} (expected \"de\" or \"en\")")]
    UnknownLanguage { input: String },
}

/// Result alias for [`AnalyzerError`].
pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Error type for loading and validating the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(AnalyzerError::EmptyYears.to_string(), "years list cannot be empty");
        assert_eq!(
            AnalyzerError::EmptyCounts.to_string(),
            "holiday counts cannot be empty"
        );
        let err = AnalyzerError::YearOutOfRange {
            year: 1900,
            min: 1950,
            max: 2099,
        };
        assert_eq!(
            err.to_string(),
            "year 1900 is outside the accepted range 1950..=2099"
        );
        let err = AnalyzerError::InvalidYear {
            input: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid year: \"abc\"");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<AnalyzerError>();
        assert_impl::<ConfigError>();
    }

    #[test]
    fn config_error_message() {
        let err = ConfigError::Invalid("years.min must not exceed years.max".to_string());
        assert_eq!(
            err.to_string(),
            "invalid config: years.min must not exceed years.max"
        );
    }
}
