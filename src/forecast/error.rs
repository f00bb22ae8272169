use crate::types::measurement::Measurement;
use thiserror::Error;

/// Any failure of a forecast request after input validation passed.
///
/// The variants keep their cause for logging, but callers are expected to show
/// [`FetchError::USER_MESSAGE`] rather than distinguish them. None of them is
/// retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to fetch weather data: request to {0} failed")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Failed to fetch weather data: {url} answered with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        reason: Option<String>,
    },

    #[error("Failed to fetch weather data: response from {url} is not valid forecast JSON")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to fetch weather data: column '{column}' has {found} values but 'time' has {expected}")]
    ColumnLength {
        column: Measurement,
        expected: usize,
        found: usize,
    },
}

impl FetchError {
    pub const USER_MESSAGE: &'static str = "Failed to fetch weather data. Please try again.";
}
