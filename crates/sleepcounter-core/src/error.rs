//! Core error types for sleepcounter-core.
//!
//! This module defines the error hierarchy using thiserror so that callers
//! (widgets, the CLI) can tell an empty countdown apart from bad event data.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for sleepcounter-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Calendar and event errors
    #[error("Calendar error: {0}")]
    Calendar(#[from] CalendarError),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors raised by events and the calendar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// No event is currently inside its visibility window, so there is no
    /// "next" event to count down to.
    #[error("No active events in the calendar")]
    EmptyActiveSet,

    /// The month/day (and year, for one-off events) do not form a real date.
    #[error("Invalid date for event '{name}': {}", describe_date(.year, .month, .day))]
    InvalidDate {
        name: String,
        year: Option<i32>,
        month: u32,
        day: u32,
    },
}

/// Configuration-specific errors, raised by front ends that persist events.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

fn describe_date(year: &Option<i32>, month: &u32, day: &u32) -> String {
    match year {
        Some(year) => format!("{year:04}-{month:02}-{day:02}"),
        None => format!("{month:02}-{day:02}"),
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_message_includes_year_when_present() {
        let err = CalendarError::InvalidDate {
            name: "Legoland".into(),
            year: Some(2019),
            month: 2,
            day: 30,
        };
        assert_eq!(
            err.to_string(),
            "Invalid date for event 'Legoland': 2019-02-30"
        );
    }

    #[test]
    fn invalid_date_message_without_year() {
        let err = CalendarError::InvalidDate {
            name: "Nope".into(),
            year: None,
            month: 13,
            day: 1,
        };
        assert_eq!(err.to_string(), "Invalid date for event 'Nope': 13-01");
    }

    #[test]
    fn calendar_error_converts_into_core_error() {
        let err: CoreError = CalendarError::EmptyActiveSet.into();
        assert!(matches!(err, CoreError::Calendar(CalendarError::EmptyActiveSet)));
        assert_eq!(
            err.to_string(),
            "Calendar error: No active events in the calendar"
        );
    }
}
