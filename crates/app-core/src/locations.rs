//! Map locations and best-match search
//!
//! Anything the map screen pins — evacuation centers, critical facilities —
//! is a [`MapLocation`]. Search-as-you-type over these short lists is served
//! by [`find_best_match`], which jumps to the single most relevant entry
//! rather than ranking the whole list. The candidate set is tens of entries,
//! so every keystroke recomputes from scratch; no index is kept.

use serde::{Deserialize, Serialize};

/// A named, addressed point pinned on the map
///
/// Immutable value. `id` is unique within any collection handed to the
/// matcher; the collection itself is owned by the caller and never mutated
/// or retained here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLocation {
    /// Stable identifier, unique within a collection
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-text address or description
    pub address: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
    /// Precomputed human-readable distance, e.g. "0.53 km"
    pub distance_label: String,
}

impl MapLocation {
    /// Create a new location
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
        latitude: f64,
        longitude: f64,
        distance_label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            latitude,
            longitude,
            distance_label: distance_label.into(),
        }
    }
}

/// Select the single most relevant location for a search query
///
/// A candidate is eligible when the trimmed, lower-cased query occurs in its
/// name or address (case-insensitive). Eligible candidates are ranked by how
/// early the query occurs — the lower of the first match position in the
/// name and in the address wins. Ties keep the earliest candidate in input
/// order. A blank query or a query matching nothing returns `None`; callers
/// treat the blank case as "show the unfiltered list".
///
/// Pure and deterministic: no I/O, no retained state, safe to call on every
/// keystroke from any thread.
///
/// # Example
///
/// ```rust
/// use app_core::locations::{find_best_match, MapLocation};
///
/// let centers = vec![
///     MapLocation::new("evac1", "Ma-a Elementary School",
///         "Barangay Ma-a, Talomo, Davao City", 7.0713, 125.6075, "0.53 km"),
///     MapLocation::new("evac2", "Ma-a Covered Court",
///         "Barangay Ma-a, Talomo, Davao City", 7.0721, 125.6090, "0.82 km"),
/// ];
///
/// let hit = find_best_match("elementary", &centers).unwrap();
/// assert_eq!(hit.id, "evac1");
/// ```
pub fn find_best_match<'a>(query: &str, candidates: &'a [MapLocation]) -> Option<&'a MapLocation> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }

    let mut best: Option<(usize, &MapLocation)> = None;
    for location in candidates {
        let Some(score) = match_position(location, &query) else {
            continue;
        };
        // Strict inequality keeps the first candidate on ties.
        match best {
            Some((best_score, _)) if best_score <= score => {}
            _ => best = Some((score, location)),
        }
    }
    best.map(|(_, location)| location)
}

/// Lowest character index at which the query occurs in the location's name
/// or address, or `None` if it occurs in neither
fn match_position(location: &MapLocation, query: &str) -> Option<usize> {
    let name_index = first_char_index(&location.name.to_lowercase(), query);
    let address_index = first_char_index(&location.address.to_lowercase(), query);
    match (name_index, address_index) {
        (None, None) => None,
        (name, address) => Some(
            name.unwrap_or(usize::MAX)
                .min(address.unwrap_or(usize::MAX)),
        ),
    }
}

fn first_char_index(haystack: &str, needle: &str) -> Option<usize> {
    haystack
        .find(needle)
        .map(|byte| haystack[..byte].chars().count())
}

/// Sample evacuation centers around Barangay Ma-a
///
/// Placeholder data until a real location source is wired in. Callers own
/// the returned collection.
pub fn evacuation_centers() -> Vec<MapLocation> {
    vec![
        MapLocation::new(
            "evac1",
            "Ma-a Elementary School",
            "Barangay Ma-a, Talomo, Davao City",
            7.0713,
            125.6075,
            "0.53 km",
        ),
        MapLocation::new(
            "evac2",
            "Ma-a Covered Court",
            "Barangay Ma-a, Talomo, Davao City",
            7.0721,
            125.6090,
            "0.82 km",
        ),
    ]
}

/// Sample critical facilities around Barangay Ma-a
pub fn critical_facilities() -> Vec<MapLocation> {
    vec![
        MapLocation::new(
            "crit1",
            "Barangay Ma-a Health Center",
            "Barangay Ma-a, Talomo, Davao City",
            7.0718,
            125.6068,
            "0.34 km",
        ),
        MapLocation::new(
            "crit2",
            "Talomo District Hospital",
            "Talomo District, Davao City",
            7.0690,
            125.6030,
            "1.12 km",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(id: &str, name: &str, address: &str) -> MapLocation {
        MapLocation::new(id, name, address, 0.0, 0.0, "0.00 km")
    }

    #[test]
    fn test_blank_query_returns_none() {
        let candidates = evacuation_centers();
        assert!(find_best_match("", &candidates).is_none());
        assert!(find_best_match("   ", &candidates).is_none());
        assert!(find_best_match("\t\n", &candidates).is_none());
    }

    #[test]
    fn test_no_match_returns_none() {
        let candidates = evacuation_centers();
        assert!(find_best_match("xyz", &candidates).is_none());
    }

    #[test]
    fn test_exact_name_query_finds_that_candidate() {
        let candidates = evacuation_centers();
        let hit = find_best_match("Ma-a Elementary School", &candidates).unwrap();
        assert_eq!(hit.id, "evac1");
        assert!(hit.name.eq_ignore_ascii_case("ma-a elementary school"));
    }

    #[test]
    fn test_case_insensitive() {
        let candidates = evacuation_centers();
        let lower = find_best_match("elementary", &candidates);
        let upper = find_best_match("ELEMENTARY", &candidates);
        assert_eq!(lower, upper);
        assert_eq!(lower.unwrap().id, "evac1");
    }

    #[test]
    fn test_query_trimmed_before_matching() {
        let candidates = evacuation_centers();
        let hit = find_best_match("  covered court  ", &candidates).unwrap();
        assert_eq!(hit.id, "evac2");
    }

    #[test]
    fn test_address_alone_is_eligible() {
        let candidates = vec![location("a", "City Gym", "Quimpo Street, Davao City")];
        let hit = find_best_match("quimpo", &candidates).unwrap();
        assert_eq!(hit.id, "a");
    }

    #[test]
    fn test_earliest_position_wins() {
        // "ma-a" starts at index 0 in A's name and index 6 in B's name.
        let candidates = vec![
            location("b", "Davao Ma-a Clinic", "Somewhere else"),
            location("a", "Ma-a Elementary School", "Somewhere else"),
        ];
        let hit = find_best_match("ma-a", &candidates).unwrap();
        assert_eq!(hit.id, "a");
    }

    #[test]
    fn test_minimum_of_name_and_address_positions() {
        // Query sits late in A's name but at the start of B's address.
        let candidates = vec![
            location("a", "Center of Talomo", "Far away"),
            location("b", "Gym", "Talomo District"),
        ];
        let hit = find_best_match("talomo", &candidates).unwrap();
        assert_eq!(hit.id, "b");
    }

    #[test]
    fn test_stable_tie_break_keeps_input_order() {
        let candidates = vec![
            location("first", "Ma-a Gym", "x"),
            location("second", "Ma-a Hall", "y"),
        ];
        let hit = find_best_match("ma-a", &candidates).unwrap();
        assert_eq!(hit.id, "first");

        let reversed = vec![
            location("second", "Ma-a Hall", "y"),
            location("first", "Ma-a Gym", "x"),
        ];
        let hit = find_best_match("ma-a", &reversed).unwrap();
        assert_eq!(hit.id, "second");
    }

    #[test]
    fn test_idempotent() {
        let candidates = evacuation_centers();
        let first = find_best_match("court", &candidates);
        let second = find_best_match("court", &candidates);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_candidates() {
        assert!(find_best_match("anything", &[]).is_none());
    }

    #[test]
    fn test_concrete_evacuation_scenario() {
        let candidates = evacuation_centers();

        assert_eq!(find_best_match("elementary", &candidates).unwrap().id, "evac1");
        assert_eq!(find_best_match("court", &candidates).unwrap().id, "evac2");
        assert!(find_best_match("xyz", &candidates).is_none());
        assert!(find_best_match("", &candidates).is_none());
    }

    #[test]
    fn test_critical_facilities_search() {
        let candidates = critical_facilities();
        assert_eq!(find_best_match("hospital", &candidates).unwrap().id, "crit2");
        assert_eq!(
            find_best_match("health center", &candidates).unwrap().id,
            "crit1"
        );
    }

    #[test]
    fn test_location_serialization() {
        let loc = evacuation_centers().remove(0);
        let json = serde_json::to_string(&loc).unwrap();
        let back: MapLocation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, loc);
    }
}
