//! # Ports
//!
//! Trait definitions for adapters. Contracts only, no implementations.
//!
//! This is the hexagonal architecture boundary:
//! - Ports define WHAT the pipeline needs from the outside
//! - Adapters define HOW it is provided
//!
//! The core and the pipeline never see an HTTP client; they see these
//! traits.

mod place_search;
mod score_source;

// Re-export traits
pub use place_search::PlaceSearch;
pub use score_source::ScoreSource;

// Re-export types from place_search
pub use place_search::{SearchError, SearchResult};

// Re-export types from score_source
pub use score_source::{ScoreError, ScoreFetchResult};
