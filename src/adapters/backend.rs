//! Backend Integration
//!
//! HTTP client for the walkability REST backend, covering:
//! - Place search (`getPlaces`)
//! - Score retrieval (`getScore`)
//! - Liveness probe (`areWeLive`)
//!
//! # Example
//! ```rust,ignore
//! let client = BackendClient::new("http://localhost:8080");
//! let places = client.search_places("1029 Sandoval Drive, Virginia Beach, VA")?;
//! ```

use std::env;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::core::{Place, ScoreReport};
use crate::ports::{
    PlaceSearch, ScoreError, ScoreFetchResult, ScoreSource, SearchError, SearchResult,
};

/// Development backend, used when nothing else is configured
pub const DEVELOPMENT_URL: &str = "http://localhost:8080";

/// Production backend; empty until a deployment exists, in which case
/// base-URL resolution falls back to the development URL
pub const PRODUCTION_URL: &str = "";

/// Explicit base-URL override
pub const BASE_URL_VAR: &str = "WALKABILITY_BASE_URL";

/// Deployment selector; "production" picks the production backend
pub const ENV_VAR: &str = "WALKABILITY_ENV";

const PLACES_ROUTE: &str = "getPlaces";
const SCORE_ROUTE: &str = "getScore";
const LIVENESS_ROUTE: &str = "areWeLive";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const LIVENESS_TIMEOUT: Duration = Duration::from_secs(5);

/// Walkability backend API client
pub struct BackendClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

/// What went wrong with one HTTP exchange, before it is mapped onto a
/// port error
#[derive(Debug)]
enum HttpFailure {
    Connection(String),
    Request(String),
    Status { status: u16, message: String },
    Empty,
    Decode(String),
}

impl BackendClient {
    /// Create a client against the given base URL
    pub fn new(base_url: &str) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Create a client the way the deployments pick their backend: an
    /// explicit `WALKABILITY_BASE_URL` wins; otherwise
    /// `WALKABILITY_ENV=production` selects the production backend,
    /// falling back to development when no production URL is baked in.
    pub fn from_env() -> Self {
        Self::new(&resolve_base_url(
            env::var(BASE_URL_VAR).ok().as_deref(),
            env::var(ENV_VAR).ok().as_deref(),
        ))
    }

    /// Get the base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check whether the backend is up and answering
    pub fn is_live(&self) -> bool {
        self.client
            .get(format!("{}/{}", self.base_url, LIVENESS_ROUTE))
            .timeout(LIVENESS_TIMEOUT)
            .send()
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }

    fn get_json<T: DeserializeOwned>(&self, route: &str, address: &str) -> Result<T, HttpFailure> {
        let url = format!("{}/{}", self.base_url, route);
        debug!(%url, address, "backend request");

        let response = self
            .client
            .get(&url)
            .query(&[("location", address)])
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    HttpFailure::Connection(format!(
                        "Cannot connect to the backend at {}. Is it running?",
                        self.base_url
                    ))
                } else {
                    HttpFailure::Request(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(HttpFailure::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .map_err(|e| HttpFailure::Request(e.to_string()))?;
        if body.trim().is_empty() || body.trim() == "null" {
            return Err(HttpFailure::Empty);
        }

        serde_json::from_str(&body).map_err(|e| HttpFailure::Decode(e.to_string()))
    }
}

fn resolve_base_url(explicit: Option<&str>, environment: Option<&str>) -> String {
    if let Some(url) = explicit {
        if !url.is_empty() {
            return url.trim_end_matches('/').to_string();
        }
    }

    if environment == Some("production") && !PRODUCTION_URL.is_empty() {
        return PRODUCTION_URL.to_string();
    }

    DEVELOPMENT_URL.to_string()
}

impl PlaceSearch for BackendClient {
    fn search_places(&self, address: &str) -> SearchResult<Vec<Place>> {
        let places: Vec<Place> = self.get_json(PLACES_ROUTE, address).map_err(|failure| {
            error!(?failure, "place search failed");
            SearchError::from(failure)
        })?;

        debug!(count = places.len(), "places received");
        Ok(places)
    }
}

impl ScoreSource for BackendClient {
    fn fetch_score(&self, address: &str) -> ScoreFetchResult<ScoreReport> {
        let report: ScoreReport = self.get_json(SCORE_ROUTE, address).map_err(|failure| {
            error!(?failure, "score fetch failed");
            ScoreError::from(failure)
        })?;

        debug!(
            score = report.walkability_score,
            categories = report.category_scores.len(),
            "score received"
        );
        Ok(report)
    }
}

impl From<HttpFailure> for SearchError {
    fn from(failure: HttpFailure) -> Self {
        match failure {
            HttpFailure::Connection(msg) => SearchError::Connection(msg),
            HttpFailure::Request(msg) => SearchError::Request(msg),
            HttpFailure::Status { status, message } => SearchError::Backend { status, message },
            HttpFailure::Empty => SearchError::EmptyPayload,
            HttpFailure::Decode(msg) => SearchError::Decode(msg),
        }
    }
}

impl From<HttpFailure> for ScoreError {
    fn from(failure: HttpFailure) -> Self {
        match failure {
            HttpFailure::Connection(msg) => ScoreError::Connection(msg),
            HttpFailure::Request(msg) => ScoreError::Request(msg),
            HttpFailure::Status { status, message } => ScoreError::Backend { status, message },
            HttpFailure::Empty => ScoreError::EmptyPayload,
            HttpFailure::Decode(msg) => ScoreError::Decode(msg),
        }
    }
}
