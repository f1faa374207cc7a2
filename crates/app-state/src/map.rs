//! Map screen state
//!
//! The map screen has three tabs — evacuation centers, the hazard layer
//! panel, and critical facilities — plus a search box on the two location
//! tabs. State is plain and caller-owned: the screen re-reads it after every
//! change, and the best-match search recomputes from scratch per keystroke.

use app_core::locations::{find_best_match, MapLocation};
use serde::{Deserialize, Serialize};

/// Map screen tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MapTab {
    /// Evacuation centers list + search
    #[default]
    Evacuation,
    /// Hazard layer toggles
    Hazard,
    /// Critical facilities list + search
    Critical,
}

impl MapTab {
    /// Tab label as displayed
    pub fn display(&self) -> &'static str {
        match self {
            MapTab::Evacuation => "Evacuation Centers",
            MapTab::Hazard => "Hazard Map",
            MapTab::Critical => "Critical Facilities",
        }
    }

    fn has_search(&self) -> bool {
        matches!(self, MapTab::Evacuation | MapTab::Critical)
    }
}

/// Storm surge return period selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StormSurgePeriod {
    /// 5-year return period
    FiveYears,
    /// 25-year return period
    #[default]
    TwentyFiveYears,
    /// 100-year return period
    HundredYears,
}

impl StormSurgePeriod {
    /// Selector label as displayed
    pub fn label(&self) -> &'static str {
        match self {
            StormSurgePeriod::FiveYears => "5 years",
            StormSurgePeriod::TwentyFiveYears => "25 years",
            StormSurgePeriod::HundredYears => "100 years",
        }
    }

    /// All periods in display order
    pub fn all() -> [StormSurgePeriod; 3] {
        [
            StormSurgePeriod::FiveYears,
            StormSurgePeriod::TwentyFiveYears,
            StormSurgePeriod::HundredYears,
        ]
    }
}

/// Hazard overlay toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HazardLayers {
    /// Fault line overlay
    pub fault_line: bool,
    /// Storm surge overlay
    pub storm_surge: bool,
    /// Landslide overlay
    pub landslide: bool,
}

/// Full state of the map screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapScreenState {
    tab: MapTab,
    query: String,
    hazards: HazardLayers,
    storm_surge_period: StormSurgePeriod,
    evacuation_centers: Vec<MapLocation>,
    critical_facilities: Vec<MapLocation>,
}

impl MapScreenState {
    /// Create state over the given location collections
    pub fn new(evacuation_centers: Vec<MapLocation>, critical_facilities: Vec<MapLocation>) -> Self {
        Self {
            tab: MapTab::Evacuation,
            query: String::new(),
            hazards: HazardLayers::default(),
            storm_surge_period: StormSurgePeriod::default(),
            evacuation_centers,
            critical_facilities,
        }
    }

    /// State seeded with the bundled sample data
    pub fn with_sample_data() -> Self {
        Self::new(
            app_core::locations::evacuation_centers(),
            app_core::locations::critical_facilities(),
        )
    }

    /// Active tab
    pub fn tab(&self) -> MapTab {
        self.tab
    }

    /// Switch tabs; leaving a searchable tab clears its query
    pub fn set_tab(&mut self, tab: MapTab) {
        if self.tab != tab && self.tab.has_search() {
            self.query.clear();
        }
        self.tab = tab;
    }

    /// Current search query
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Update the search query (called per keystroke)
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Hazard overlay toggles
    pub fn hazards(&self) -> HazardLayers {
        self.hazards
    }

    /// Toggle the fault line overlay
    pub fn set_fault_line(&mut self, shown: bool) {
        self.hazards.fault_line = shown;
    }

    /// Toggle the storm surge overlay
    pub fn set_storm_surge(&mut self, shown: bool) {
        self.hazards.storm_surge = shown;
    }

    /// Toggle the landslide overlay
    pub fn set_landslide(&mut self, shown: bool) {
        self.hazards.landslide = shown;
    }

    /// Selected storm surge return period
    pub fn storm_surge_period(&self) -> StormSurgePeriod {
        self.storm_surge_period
    }

    /// Change the storm surge return period
    pub fn set_storm_surge_period(&mut self, period: StormSurgePeriod) {
        self.storm_surge_period = period;
    }

    /// Locations listed on the active tab (empty on the hazard tab)
    pub fn visible_locations(&self) -> &[MapLocation] {
        match self.tab {
            MapTab::Evacuation => &self.evacuation_centers,
            MapTab::Critical => &self.critical_facilities,
            MapTab::Hazard => &[],
        }
    }

    /// Best match for the current query on the active tab
    ///
    /// `None` when the query is blank (the screen shows the unfiltered
    /// list) or matches nothing (the screen shows a "no match" placeholder).
    pub fn best_match(&self) -> Option<&MapLocation> {
        find_best_match(&self.query, self.visible_locations())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = MapScreenState::with_sample_data();
        assert_eq!(state.tab(), MapTab::Evacuation);
        assert_eq!(state.query(), "");
        assert_eq!(state.storm_surge_period(), StormSurgePeriod::TwentyFiveYears);
        assert_eq!(state.hazards(), HazardLayers::default());
    }

    #[test]
    fn test_search_on_evacuation_tab() {
        let mut state = MapScreenState::with_sample_data();
        state.set_query("elementary");
        assert_eq!(state.best_match().unwrap().id, "evac1");

        state.set_query("court");
        assert_eq!(state.best_match().unwrap().id, "evac2");

        state.set_query("xyz");
        assert!(state.best_match().is_none());
    }

    #[test]
    fn test_search_on_critical_tab() {
        let mut state = MapScreenState::with_sample_data();
        state.set_tab(MapTab::Critical);
        state.set_query("hospital");
        assert_eq!(state.best_match().unwrap().id, "crit2");
    }

    #[test]
    fn test_leaving_search_tab_clears_query() {
        let mut state = MapScreenState::with_sample_data();
        state.set_query("elementary");
        state.set_tab(MapTab::Hazard);
        assert_eq!(state.query(), "");
    }

    #[test]
    fn test_leaving_hazard_tab_keeps_query() {
        let mut state = MapScreenState::with_sample_data();
        state.set_tab(MapTab::Hazard);
        state.set_query("leftover");
        state.set_tab(MapTab::Evacuation);
        assert_eq!(state.query(), "leftover");
    }

    #[test]
    fn test_hazard_tab_lists_nothing() {
        let mut state = MapScreenState::with_sample_data();
        state.set_tab(MapTab::Hazard);
        assert!(state.visible_locations().is_empty());
        state.set_query("elementary");
        assert!(state.best_match().is_none());
    }

    #[test]
    fn test_hazard_toggles() {
        let mut state = MapScreenState::with_sample_data();
        state.set_fault_line(true);
        state.set_landslide(true);
        assert!(state.hazards().fault_line);
        assert!(!state.hazards().storm_surge);
        assert!(state.hazards().landslide);

        state.set_storm_surge(true);
        state.set_storm_surge_period(StormSurgePeriod::HundredYears);
        assert_eq!(state.storm_surge_period().label(), "100 years");
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(MapTab::Evacuation.display(), "Evacuation Centers");
        assert_eq!(MapTab::Hazard.display(), "Hazard Map");
        assert_eq!(MapTab::Critical.display(), "Critical Facilities");
    }
}
