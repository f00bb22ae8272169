use crate::forecast::error::FetchError;
use thiserror::Error;

/// Rejected user input. Raised before any network activity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill out all fields correctly.")]
    IncompleteInput,

    #[error("Page size {requested} is not one of the allowed sizes {allowed:?}")]
    PageSize { requested: usize, allowed: Vec<usize> },
}

#[derive(Debug, Error)]
pub enum PanelError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Invalid panel configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("Fetch task did not complete")]
    FetchTask(#[source] tokio::task::JoinError),
}
