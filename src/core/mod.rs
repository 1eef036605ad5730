//! # Core Domain
//!
//! Pure data shaping, no I/O.
//!
//! This module contains the types and operations one query is built
//! from:
//! - `Place` - a point of interest with tags and a distance label
//! - `distance` - label parsing and unit rendering
//! - `sort` - distance ordering
//! - `category` - the fixed tag list and the classifier
//! - `vicinity` - close/medium/far tallies
//! - `score` - the backend score payload
//! - `WalkConfig` - explicit per-query configuration
//!
//! ## Design Principles
//!
//! - All functions are pure over their inputs (the sorts mutate their
//!   argument in place, nothing else does)
//! - No network, no persistence
//! - Fully testable in isolation

pub mod category;
pub mod config;
pub mod distance;
pub mod place;
pub mod score;
pub mod sort;
pub mod vicinity;

// Re-exports
pub use config::WalkConfig;
pub use place::Place;
pub use score::{CategoryScore, ScoreReport};
pub use vicinity::VicinityCounts;
