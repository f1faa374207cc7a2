//! Screen view-models
//!
//! One model per screen, assembling what the renderer needs from the domain
//! and state crates. These are the Rust counterparts of the screen
//! composables: data in, no drawing.

use app_core::alerts::{sample_alerts, CommunityAlert};
use app_core::greeting::Greeting;
use app_core::hotlines::{sample_hotlines, EmergencyContact};
use app_core::locations::MapLocation;
use app_state::MapScreenState;
use serde::{Deserialize, Serialize};

/// Home dashboard contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeScreenModel {
    /// Greeting for the hero card
    pub greeting: Greeting,
    /// Community alerts feed
    pub alerts: Vec<CommunityAlert>,
}

impl HomeScreenModel {
    /// Home contents for an hour of day (0–23)
    pub fn for_hour(hour: u32) -> Self {
        Self {
            greeting: Greeting::for_hour(hour),
            alerts: sample_alerts(),
        }
    }

    /// Home contents for the local wall clock
    pub fn now() -> Self {
        Self {
            greeting: Greeting::now(),
            alerts: sample_alerts(),
        }
    }
}

/// Alert updates screen contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertsScreenModel {
    /// Full alert list
    pub alerts: Vec<CommunityAlert>,
}

impl AlertsScreenModel {
    /// Alerts screen with the bundled sample feed
    pub fn new() -> Self {
        Self {
            alerts: sample_alerts(),
        }
    }
}

impl Default for AlertsScreenModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Emergency hotlines screen contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyScreenModel {
    /// Hotline directory
    pub contacts: Vec<EmergencyContact>,
}

impl EmergencyScreenModel {
    /// Hotlines screen with the bundled directory
    pub fn new() -> Self {
        Self {
            contacts: sample_hotlines(),
        }
    }
}

impl Default for EmergencyScreenModel {
    fn default() -> Self {
        Self::new()
    }
}

/// Map screen contents
///
/// Wraps the interactive [`MapScreenState`] and exposes the derived values
/// the bottom sheet renders: the sheet title, the visible list, and the
/// best search match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapScreenModel {
    /// Interactive state (tabs, query, hazard toggles)
    pub state: MapScreenState,
}

impl MapScreenModel {
    /// Map screen over the bundled sample locations
    pub fn new() -> Self {
        Self {
            state: MapScreenState::with_sample_data(),
        }
    }

    /// Title of the bottom sheet for the active tab
    pub fn sheet_title(&self) -> &'static str {
        self.state.tab().display()
    }

    /// Rows for the bottom sheet list: the single best match while a query
    /// is active, otherwise the unfiltered list
    pub fn sheet_rows(&self) -> Vec<&MapLocation> {
        if self.state.query().trim().is_empty() {
            self.state.visible_locations().iter().collect()
        } else {
            self.state.best_match().into_iter().collect()
        }
    }
}

impl Default for MapScreenModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_state::MapTab;

    #[test]
    fn test_home_model_morning() {
        let model = HomeScreenModel::for_hour(8);
        assert_eq!(model.greeting.text(), "Good Morning!");
        assert_eq!(model.alerts.len(), 2);
    }

    #[test]
    fn test_emergency_model_lists_hotlines() {
        let model = EmergencyScreenModel::new();
        assert_eq!(model.contacts.len(), 3);
        assert_eq!(model.contacts[0].agency, "Local DRRMO");
    }

    #[test]
    fn test_map_sheet_rows_without_query() {
        let model = MapScreenModel::new();
        assert_eq!(model.sheet_title(), "Evacuation Centers");
        assert_eq!(model.sheet_rows().len(), 2);
    }

    #[test]
    fn test_map_sheet_rows_with_query() {
        let mut model = MapScreenModel::new();
        model.state.set_query("elementary");
        let rows = model.sheet_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, "evac1");
    }

    #[test]
    fn test_map_sheet_rows_no_match() {
        let mut model = MapScreenModel::new();
        model.state.set_query("xyz");
        assert!(model.sheet_rows().is_empty());
    }

    #[test]
    fn test_map_sheet_title_follows_tab() {
        let mut model = MapScreenModel::new();
        model.state.set_tab(MapTab::Critical);
        assert_eq!(model.sheet_title(), "Critical Facilities");
    }
}
