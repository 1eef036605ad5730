//! # Categories
//!
//! The fixed set of backend place categories and the classifier that
//! buckets a flat place list by tag.

use super::place::Place;

/// The category tags the backend searches, in display order
pub const PLACE_TYPES: [&str; 10] = [
    "grocery_or_supermarket",
    "restaurant",
    "park",
    "school",
    "pharmacy",
    "gym",
    "library",
    "shopping_mall",
    "movie_theater",
    "museum",
];

/// Human-facing name for a category tag.
///
/// Unknown tags come back unchanged.
pub fn display_name(tag: &str) -> &str {
    match tag {
        "grocery_or_supermarket" => "Grocery Store",
        "restaurant" => "Restaurant",
        "park" => "Park",
        "school" => "School",
        "pharmacy" => "Pharmacy",
        "gym" => "Gym",
        "library" => "Library",
        "shopping_mall" => "Shopping Mall",
        "movie_theater" => "Movie Theater",
        "museum" => "Museum",
        other => other,
    }
}

/// Bucket places by category tag.
///
/// One bucket per tag, in tag order. A place appears in every bucket
/// whose tag it carries, keeping its incoming relative order. Tags
/// with no matching place yield an empty bucket rather than being
/// dropped, so the output length always equals the tag count.
pub fn classify(places: &[Place], tags: &[String]) -> Vec<Vec<Place>> {
    let mut buckets: Vec<Vec<Place>> = vec![Vec::new(); tags.len()];

    for place in places {
        for (bucket, tag) in buckets.iter_mut().zip(tags) {
            if place.has_tag(tag) {
                bucket.push(place.clone());
            }
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str, tags: &[&str]) -> Place {
        Place::new(
            name.to_string(),
            format!("{name} St"),
            tags.iter().map(|t| t.to_string()).collect(),
            "0.5 km".to_string(),
        )
    }

    fn tag_list(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_bucket_count_matches_tag_count() {
        let buckets = classify(&[], &tag_list(&PLACE_TYPES));
        assert_eq!(buckets.len(), PLACE_TYPES.len());
        assert!(buckets.iter().all(|b| b.is_empty()));
    }

    #[test]
    fn test_multi_tag_place_lands_in_every_matching_bucket() {
        let places = vec![place("combo", &["park", "gym"]), place("solo", &["gym"])];
        let buckets = classify(&places, &tag_list(&["park", "gym", "museum"]));

        assert_eq!(buckets[0].len(), 1);
        assert_eq!(buckets[1].len(), 2);
        assert!(buckets[2].is_empty());
        assert_eq!(buckets[0][0].name, "combo");
        assert_eq!(buckets[1][0].name, "combo");
        assert_eq!(buckets[1][1].name, "solo");
    }

    #[test]
    fn test_relative_order_preserved() {
        let places = vec![
            place("a", &["park"]),
            place("b", &["gym"]),
            place("c", &["park"]),
        ];
        let buckets = classify(&places, &tag_list(&["park"]));

        let names: Vec<&str> = buckets[0].iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_untagged_places_appear_nowhere() {
        let places = vec![place("offmenu", &["casino"])];
        let buckets = classify(&places, &tag_list(&PLACE_TYPES));
        assert!(buckets.iter().all(|b| b.is_empty()));
    }

    #[test]
    fn test_bucket_union_is_exactly_the_matching_places() {
        let places = vec![
            place("a", &["park", "gym"]),
            place("b", &["museum"]),
            place("c", &["casino"]),
        ];
        let buckets = classify(&places, &tag_list(&["park", "gym", "museum"]));

        let mut memberships: Vec<&str> = buckets
            .iter()
            .flatten()
            .map(|p| p.name.as_str())
            .collect();
        memberships.sort();
        // "a" twice for its two matching tags, "c" never
        assert_eq!(memberships, vec!["a", "a", "b"]);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(display_name("grocery_or_supermarket"), "Grocery Store");
        assert_eq!(display_name("movie_theater"), "Movie Theater");
        assert_eq!(display_name("casino"), "casino");
    }
}
