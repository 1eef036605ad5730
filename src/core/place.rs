//! # Place
//!
//! A single point of interest near the queried address.
//!
//! Places arrive from the backend as `{name, address, types, distance}`
//! and live only for the duration of one query. The serde renames keep
//! the wire names while the struct uses the domain names.

use serde::{Deserialize, Serialize};

/// A point of interest returned by the place-search backend
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    /// Display name
    pub name: String,

    /// Street address, also used to build the external map link
    pub address: String,

    /// Category tags; a place may carry several and then shows up in
    /// several category buckets
    #[serde(rename = "types")]
    pub category_tags: Vec<String>,

    /// Human-readable distance with the fixed " km" suffix, e.g. "1.2 km"
    #[serde(rename = "distance")]
    pub distance_label: String,
}

impl Place {
    /// Create a new place
    pub fn new(name: String, address: String, category_tags: Vec<String>, distance_label: String) -> Self {
        Self {
            name,
            address,
            category_tags,
            distance_label,
        }
    }

    /// Whether this place carries the given category tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.category_tags.iter().any(|t| t == tag)
    }

    /// External map-search URL for this place's address
    pub fn maps_url(&self) -> String {
        format!(
            "https://www.google.com/maps/search/?api=1&query={}",
            self.address
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_tag() {
        let place = Place::new(
            "Ueno Park".to_string(),
            "Uenokoen, Taito City".to_string(),
            vec!["park".to_string(), "museum".to_string()],
            "0.4 km".to_string(),
        );

        assert!(place.has_tag("park"));
        assert!(place.has_tag("museum"));
        assert!(!place.has_tag("gym"));
    }

    #[test]
    fn test_maps_url_embeds_address() {
        let place = Place::new(
            "Corner Pharmacy".to_string(),
            "12 High St".to_string(),
            vec!["pharmacy".to_string()],
            "0.2 km".to_string(),
        );

        assert_eq!(
            place.maps_url(),
            "https://www.google.com/maps/search/?api=1&query=12 High St"
        );
    }

    #[test]
    fn test_deserializes_wire_names() {
        let json = r#"{
            "name": "Green Grocer",
            "address": "3 Market Sq",
            "types": ["grocery_or_supermarket"],
            "distance": "0.8 km"
        }"#;

        let place: Place = serde_json::from_str(json).unwrap();
        assert_eq!(place.name, "Green Grocer");
        assert_eq!(place.category_tags, vec!["grocery_or_supermarket"]);
        assert_eq!(place.distance_label, "0.8 km");
    }
}
