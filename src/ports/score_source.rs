//! # Score Source Port
//!
//! Contract for the collaborator that computes walkability scores.
//!
//! Score values are opaque; whatever the backend reports is passed
//! through unchanged.

use crate::core::ScoreReport;

/// Result type for score-fetch operations
pub type ScoreFetchResult<T> = Result<T, ScoreError>;

/// Errors that can occur while fetching a score
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreError {
    /// The backend could not be reached at all
    Connection(String),

    /// The request was sent but failed (timeout, broken body, ...)
    Request(String),

    /// The backend answered with a non-success status
    Backend { status: u16, message: String },

    /// The backend answered but sent no payload
    EmptyPayload,

    /// The payload did not decode into a score report
    Decode(String),
}

impl std::fmt::Display for ScoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreError::Connection(msg) => write!(f, "Connection error: {}", msg),
            ScoreError::Request(msg) => write!(f, "Request failed: {}", msg),
            ScoreError::Backend { status, message } => {
                write!(f, "Backend error (status {}): {}", status, message)
            }
            ScoreError::EmptyPayload => write!(f, "No data received from the backend"),
            ScoreError::Decode(msg) => write!(f, "Invalid score payload: {}", msg),
        }
    }
}

impl std::error::Error for ScoreError {}

/// Collaborator that reports the walkability score for an address
pub trait ScoreSource: Send + Sync {
    /// Fetch the score breakdown for `address`.
    fn fetch_score(&self, address: &str) -> ScoreFetchResult<ScoreReport>;
}
