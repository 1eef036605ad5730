//! # Sorting
//!
//! Distance ordering over place lists.

use super::distance::parse_distance;
use super::place::Place;

/// Sort places nearest-first, in place.
///
/// Keys on the parsed distance label with a total order over f64, so
/// unparseable labels (NaN) sort after every real distance instead of
/// breaking the comparator. The sort is stable: equal distances keep
/// their incoming relative order.
pub fn sort_by_distance_asc(places: &mut [Place]) {
    places.sort_by(|a, b| {
        parse_distance(&a.distance_label).total_cmp(&parse_distance(&b.distance_label))
    });
}

/// Sort places farthest-first, in place.
pub fn sort_by_distance_desc(places: &mut [Place]) {
    places.sort_by(|a, b| {
        parse_distance(&b.distance_label).total_cmp(&parse_distance(&a.distance_label))
    });
}
