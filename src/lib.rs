//! # Walkability
//!
//! Address in, walkability out.
//!
//! Client-side shaping for the walkability backend: fetch the places
//! near an address, sort them by walking distance, bucket them by
//! category, and tally how many sit close, medium, and far. Or fetch
//! the backend-computed walkability score and pass it through as-is.
//!
//! ## Layout
//!
//! - `core` - pure shaping: parsing, sorting, classification, tallies
//! - `ports` - contracts for the two backend collaborators
//! - `adapters` - reqwest HTTP client against the REST backend
//! - `pipeline` - one-shot query orchestration
//!
//! ## Usage
//!
//! ```rust,ignore
//! use walkability::{BackendClient, Pipeline};
//! use walkability::core::category::display_name;
//!
//! let pipeline = Pipeline::new(BackendClient::from_env());
//! let report = pipeline.get_locations("1029 Sandoval Drive, Virginia Beach, VA")?;
//!
//! for (tag, bucket) in pipeline.config().categories.iter().zip(&report.categorized_places) {
//!     println!("{}: {} places", display_name(tag), bucket.len());
//! }
//! ```
//!
//! One pipeline invocation makes one backend call and returns one
//! report or one error. No caching, no retries, no shared state.

pub mod adapters;
pub mod core;
pub mod pipeline;
pub mod ports;

// Re-exports for convenience
pub use adapters::BackendClient;
pub use self::core::{CategoryScore, Place, ScoreReport, VicinityCounts, WalkConfig};
pub use pipeline::{Pipeline, PipelineError, WalkReport};
pub use ports::{PlaceSearch, ScoreSource};
