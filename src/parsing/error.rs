use thiserror::Error;

/// Fatal input-shape errors raised while turning raw service documents into typed records.
///
/// Any of these aborts the parse of the whole location document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to decode JSON document")]
    Json(#[from] serde_json::Error),

    #[error("Required field '{field}' missing in timeserie entry {index}")]
    MissingField { field: &'static str, index: usize },

    #[error("Required field '{field}' missing in warning '{title}'")]
    MissingWarningField { field: &'static str, title: String },

    #[error("Invalid compact timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("Epoch milliseconds value {0} is out of range")]
    InvalidEpochMillis(i64),

    #[error("Local date {0} has no valid noon in the target time zone")]
    InvalidLocalNoon(chrono::NaiveDate),

    #[error("Unknown warning severity {0}, expected 1 to 4")]
    InvalidSeverity(i64),

    #[error("Warning '{title}' ends ({valid_to}) before it starts ({valid_from})")]
    InvalidWarningWindow {
        title: String,
        valid_from: i64,
        valid_to: i64,
    },

    #[error("Warning feed key '{0}' is not an epoch milliseconds timestamp")]
    InvalidWarningKey(String),
}
