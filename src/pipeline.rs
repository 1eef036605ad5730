//! # Pipeline
//!
//! Orchestration of one walkability query: fetch, sort, classify,
//! tally.
//!
//! Step order is load-bearing. The overall vicinity tally runs over
//! the sorted flat list and the per-category tallies over the buckets
//! cut from it, so the same payload always produces the same report.
//!
//! One invocation makes at most one backend call. There is no retry,
//! no cancellation, and no partial result: any failure aborts the
//! whole query.

use thiserror::Error;
use tracing::debug;

use crate::core::category::classify;
use crate::core::sort::sort_by_distance_asc;
use crate::core::vicinity::{count_vicinities_by_category_with, count_vicinities_with};
use crate::core::{Place, ScoreReport, VicinityCounts, WalkConfig};
use crate::ports::{PlaceSearch, ScoreError, ScoreSource, SearchError};

/// Errors that abort a query
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The address was blank; nothing was fetched
    #[error("address must not be blank")]
    InvalidAddress,

    /// Place search failed
    #[error("failed to fetch places: {0}")]
    PlaceFetch(#[from] SearchError),

    /// Score retrieval failed
    #[error("failed to fetch score: {0}")]
    ScoreFetch(#[from] ScoreError),
}

/// Everything the walk view needs for one address
#[derive(Clone, Debug, PartialEq)]
pub struct WalkReport {
    /// One bucket of places per configured category, in category
    /// order; places inside a bucket are sorted nearest-first
    pub categorized_places: Vec<Vec<Place>>,

    /// Close/medium/far tally over all fetched places
    pub overall_vicinities: VicinityCounts,

    /// Close/medium/far tally per bucket, index-aligned with
    /// `categorized_places`
    pub vicinities_by_category: Vec<VicinityCounts>,
}

/// One-shot query orchestrator over a backend
pub struct Pipeline<B> {
    backend: B,
    config: WalkConfig,
}

impl<B> Pipeline<B> {
    /// Create a pipeline with the default configuration
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            config: WalkConfig::default(),
        }
    }

    /// Replace the query configuration
    pub fn with_config(mut self, config: WalkConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the active configuration
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    fn check_address(address: &str) -> Result<(), PipelineError> {
        if address.trim().is_empty() {
            return Err(PipelineError::InvalidAddress);
        }
        Ok(())
    }
}

impl<B: PlaceSearch> Pipeline<B> {
    /// Fetch and shape every place near `address`.
    ///
    /// Rejects a blank address before any network call. Steps:
    /// fetch, sort ascending by distance, classify into the configured
    /// category buckets, tally vicinities overall and per bucket.
    pub fn get_locations(&self, address: &str) -> Result<WalkReport, PipelineError> {
        Self::check_address(address)?;

        let mut places = self.backend.search_places(address)?;
        debug!(count = places.len(), "shaping places");

        sort_by_distance_asc(&mut places);

        let categorized_places = classify(&places, &self.config.categories);

        let overall_vicinities = count_vicinities_with(
            &places,
            self.config.close_distance,
            self.config.medium_distance,
        );

        let vicinities_by_category = count_vicinities_by_category_with(
            &categorized_places,
            self.config.close_distance,
            self.config.medium_distance,
        );

        Ok(WalkReport {
            categorized_places,
            overall_vicinities,
            vicinities_by_category,
        })
    }
}

impl<B: ScoreSource> Pipeline<B> {
    /// Fetch the backend-computed score breakdown for `address`.
    ///
    /// Same precondition as [`Pipeline::get_locations`]; the payload
    /// passes through unchanged.
    pub fn get_scores(&self, address: &str) -> Result<ScoreReport, PipelineError> {
        Self::check_address(address)?;
        Ok(self.backend.fetch_score(address)?)
    }
}
