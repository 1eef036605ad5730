//! # Place Search Port
//!
//! Contract for the collaborator that finds places near an address.
//!
//! Implemented by the HTTP adapter against the real backend, and by
//! stubs in tests.

use crate::core::Place;

/// Result type for place-search operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Errors that can occur while searching for places
#[derive(Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The backend could not be reached at all
    Connection(String),

    /// The request was sent but failed (timeout, broken body, ...)
    Request(String),

    /// The backend answered with a non-success status
    Backend { status: u16, message: String },

    /// The backend answered but sent no payload
    EmptyPayload,

    /// The payload did not decode into places
    Decode(String),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::Connection(msg) => write!(f, "Connection error: {}", msg),
            SearchError::Request(msg) => write!(f, "Request failed: {}", msg),
            SearchError::Backend { status, message } => {
                write!(f, "Backend error (status {}): {}", status, message)
            }
            SearchError::EmptyPayload => write!(f, "No data received from the backend"),
            SearchError::Decode(msg) => write!(f, "Invalid place payload: {}", msg),
        }
    }
}

impl std::error::Error for SearchError {}

/// Collaborator that searches places near an address
pub trait PlaceSearch: Send + Sync {
    /// Fetch every known place near `address`.
    ///
    /// Order is backend-defined; callers sort.
    fn search_places(&self, address: &str) -> SearchResult<Vec<Place>>;
}
