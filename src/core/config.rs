//! # Configuration
//!
//! Explicit query configuration instead of ambient state: the
//! thresholds and category list travel with the pipeline that uses
//! them, so two pipelines with different settings can coexist.

use super::category::PLACE_TYPES;
use super::vicinity::{CLOSE_DISTANCE, MEDIUM_DISTANCE};

/// Tuning for one walkability query
#[derive(Clone, Debug, PartialEq)]
pub struct WalkConfig {
    /// Upper bound of the close tier, kilometers
    pub close_distance: f64,

    /// Upper bound of the medium tier, kilometers
    pub medium_distance: f64,

    /// Category tags to bucket by, in display order
    pub categories: Vec<String>,
}

impl WalkConfig {
    /// Create a configuration with the standard thresholds and the
    /// full backend category list
    pub fn new() -> Self {
        Self {
            close_distance: CLOSE_DISTANCE,
            medium_distance: MEDIUM_DISTANCE,
            categories: PLACE_TYPES.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Set custom vicinity thresholds
    pub fn with_thresholds(mut self, close: f64, medium: f64) -> Self {
        self.close_distance = close;
        self.medium_distance = medium;
        self
    }

    /// Set a custom category list
    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WalkConfig::default();
        assert_eq!(config.close_distance, 0.5);
        assert_eq!(config.medium_distance, 1.0);
        assert_eq!(config.categories.len(), 10);
        assert_eq!(config.categories[0], "grocery_or_supermarket");
    }

    #[test]
    fn test_custom_config() {
        let config = WalkConfig::new()
            .with_thresholds(0.25, 0.75)
            .with_categories(vec!["park".to_string()]);

        assert_eq!(config.close_distance, 0.25);
        assert_eq!(config.medium_distance, 0.75);
        assert_eq!(config.categories, vec!["park"]);
    }
}
