//! # Score
//!
//! The backend-computed walkability score payload.
//!
//! Scores are opaque numbers; the client reshapes them for display
//! and never recomputes anything.

use serde::{Deserialize, Serialize};

/// Score and vicinity counts for one category
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// Category tag, e.g. "restaurant"
    pub category: String,

    /// Backend-computed score for this category
    pub score: f64,

    #[serde(rename = "closePlaces")]
    pub close_places: u32,

    #[serde(rename = "mediumPlaces")]
    pub medium_places: u32,

    #[serde(rename = "farPlaces")]
    pub far_places: u32,
}

/// Everything the score backend reports for one address
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Overall walkability score across all categories
    #[serde(rename = "walkabilityScore")]
    pub walkability_score: f64,

    /// Per-category breakdown, in backend order
    #[serde(rename = "categoryScores")]
    pub category_scores: Vec<CategoryScore>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_wire_names() {
        let json = r#"{
            "walkabilityScore": 7.42,
            "categoryScores": [
                {
                    "category": "park",
                    "score": 1.9,
                    "closePlaces": 2,
                    "mediumPlaces": 1,
                    "farPlaces": 0
                }
            ]
        }"#;

        let report: ScoreReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.walkability_score, 7.42);
        assert_eq!(report.category_scores.len(), 1);
        assert_eq!(report.category_scores[0].category, "park");
        assert_eq!(report.category_scores[0].close_places, 2);
    }
}
