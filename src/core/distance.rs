//! # Distance
//!
//! Parsing of the backend's human-readable distance labels.
//!
//! The backend always encodes kilometers with a fixed 3-character
//! " km" suffix. Parsing strips that suffix blindly and never checks
//! it; callers own the guarantee that labels are well-formed.

/// Length of the unit suffix on a distance label (" km")
const UNIT_SUFFIX_LEN: usize = 3;

/// Kilometers-to-miles conversion factor
const MILES_PER_KM: f64 = 0.621371;

/// Parse a distance label like "1.2 km" into kilometers.
///
/// Returns `f64::NAN` when the label is too short or the numeric part
/// does not parse. The unit suffix itself is not validated.
///
/// # Example
/// ```
/// use walkability::core::distance::parse_distance;
///
/// assert_eq!(parse_distance("1.2 km"), 1.2);
/// assert_eq!(parse_distance("0.5 km"), 0.5);
/// ```
pub fn parse_distance(label: &str) -> f64 {
    let Some(end) = label.len().checked_sub(UNIT_SUFFIX_LEN) else {
        return f64::NAN;
    };
    // the cut may land inside a multi-byte char
    let Some(numeric) = label.get(..end) else {
        return f64::NAN;
    };
    numeric.trim().parse().unwrap_or(f64::NAN)
}

/// Render a kilometer label in miles, e.g. "1.2 km" into "0.75 miles".
///
/// Display-only helper; stored distances and the vicinity thresholds
/// always stay in kilometers.
pub fn km_to_miles(label: &str) -> String {
    let miles = parse_distance(label) * MILES_PER_KM;
    format!("{miles:.2} miles")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_labels() {
        assert_eq!(parse_distance("1.2 km"), 1.2);
        assert_eq!(parse_distance("0.5 km"), 0.5);
        assert_eq!(parse_distance("12.75 km"), 12.75);
    }

    #[test]
    fn test_parse_integer_label() {
        assert_eq!(parse_distance("2 km"), 2.0);
    }

    #[test]
    fn test_parse_does_not_validate_suffix() {
        // any 3-character tail is stripped, units are never checked
        assert_eq!(parse_distance("1.2 mi"), 1.2);
    }

    #[test]
    fn test_parse_garbage_is_nan() {
        assert!(parse_distance("near km").is_nan());
        assert!(parse_distance("km").is_nan());
        assert!(parse_distance("").is_nan());
    }

    #[test]
    fn test_km_to_miles() {
        assert_eq!(km_to_miles("1.0 km"), "0.62 miles");
        assert_eq!(km_to_miles("10 km"), "6.21 miles");
    }
}
