//! # Vicinity
//!
//! Close/medium/far tallies over place lists.
//!
//! Every place falls into exactly one tier, decided by two kilometer
//! thresholds. Boundary values are inclusive on the nearer tier: a
//! place at exactly the close threshold counts as close, at exactly
//! the medium threshold as medium.

use super::distance::parse_distance;
use super::place::Place;

/// Upper bound of the close tier, kilometers
pub const CLOSE_DISTANCE: f64 = 0.5;

/// Upper bound of the medium tier, kilometers
pub const MEDIUM_DISTANCE: f64 = 1.0;

/// How many places sit in each vicinity tier
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VicinityCounts {
    pub close: usize,
    pub medium: usize,
    pub far: usize,
}

impl VicinityCounts {
    pub fn new(close: usize, medium: usize, far: usize) -> Self {
        Self { close, medium, far }
    }

    /// Total number of counted places.
    ///
    /// Equals the length of the tallied list, since every place lands
    /// in exactly one tier.
    pub fn total(&self) -> usize {
        self.close + self.medium + self.far
    }
}

/// Tally places into the three tiers using the default thresholds.
pub fn count_vicinities(places: &[Place]) -> VicinityCounts {
    count_vicinities_with(places, CLOSE_DISTANCE, MEDIUM_DISTANCE)
}

/// Tally places with caller-supplied thresholds.
///
/// Unparseable distance labels (NaN) fail every comparison and land
/// in the far tier.
pub fn count_vicinities_with(places: &[Place], close: f64, medium: f64) -> VicinityCounts {
    let mut counts = VicinityCounts::default();

    for place in places {
        let distance = parse_distance(&place.distance_label);
        if distance <= close {
            counts.close += 1;
        } else if distance <= medium {
            counts.medium += 1;
        } else {
            counts.far += 1;
        }
    }

    counts
}

/// Tally each category bucket separately, preserving bucket order.
pub fn count_vicinities_by_category(buckets: &[Vec<Place>]) -> Vec<VicinityCounts> {
    buckets.iter().map(|bucket| count_vicinities(bucket)).collect()
}

/// Per-bucket tally with caller-supplied thresholds.
pub fn count_vicinities_by_category_with(
    buckets: &[Vec<Place>],
    close: f64,
    medium: f64,
) -> Vec<VicinityCounts> {
    buckets
        .iter()
        .map(|bucket| count_vicinities_with(bucket, close, medium))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(label: &str) -> Place {
        Place::new(
            "spot".to_string(),
            "1 Somewhere Rd".to_string(),
            vec!["park".to_string()],
            label.to_string(),
        )
    }

    fn places(labels: &[&str]) -> Vec<Place> {
        labels.iter().map(|l| place(l)).collect()
    }

    #[test]
    fn test_tiers() {
        let counts = count_vicinities(&places(&["0.3 km", "0.7 km", "2.0 km"]));
        assert_eq!(counts, VicinityCounts::new(1, 1, 1));
    }

    #[test]
    fn test_boundaries_favor_the_closer_tier() {
        let counts = count_vicinities(&places(&["0.5 km", "1.0 km", "1.0001 km"]));
        assert_eq!(counts.close, 1);
        assert_eq!(counts.medium, 1);
        assert_eq!(counts.far, 1);
    }

    #[test]
    fn test_total_equals_input_length() {
        let input = places(&["0.1 km", "0.5 km", "0.9 km", "1.0 km", "1.8 km", "5 km"]);
        assert_eq!(count_vicinities(&input).total(), input.len());
    }

    #[test]
    fn test_unparseable_label_counts_as_far() {
        let counts = count_vicinities(&places(&["close enough"]));
        assert_eq!(counts, VicinityCounts::new(0, 0, 1));
    }

    #[test]
    fn test_custom_thresholds() {
        let counts = count_vicinities_with(&places(&["0.3 km", "0.7 km", "2.0 km"]), 1.0, 2.0);
        assert_eq!(counts, VicinityCounts::new(2, 1, 0));
    }

    #[test]
    fn test_by_category_preserves_bucket_order() {
        let buckets = vec![
            places(&["0.3 km", "0.7 km"]),
            places(&["0.7 km", "2.0 km"]),
            Vec::new(),
        ];
        let tallies = count_vicinities_by_category(&buckets);

        assert_eq!(
            tallies,
            vec![
                VicinityCounts::new(1, 1, 0),
                VicinityCounts::new(0, 1, 1),
                VicinityCounts::default(),
            ]
        );
    }
}
