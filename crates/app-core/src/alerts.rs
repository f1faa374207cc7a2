//! Community alert records
//!
//! Alerts are static display records: the home screen shows a short feed of
//! them and the alerts screen shows the full list. They carry no behavior
//! beyond their fields.

use serde::{Deserialize, Serialize};

/// A community alert shown on the home and alerts screens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityAlert {
    /// Headline, e.g. "Flood Warning at Quimpo St."
    pub title: String,
    /// Affected location
    pub location: String,
    /// Short description of the situation
    pub description: String,
    /// Human-readable timestamp, e.g. "Today • 7:30 PM"
    pub posted_label: String,
}

impl CommunityAlert {
    /// Create a new alert
    pub fn new(
        title: impl Into<String>,
        location: impl Into<String>,
        description: impl Into<String>,
        posted_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
            description: description.into(),
            posted_label: posted_label.into(),
        }
    }
}

/// Sample alert feed used until a live alert source is wired in
pub fn sample_alerts() -> Vec<CommunityAlert> {
    vec![
        CommunityAlert::new(
            "Flood Warning at Quimpo St.",
            "Quimpo St., Davao City",
            "Heavy rain causing flash floods.",
            "Today • 7:30 PM",
        ),
        CommunityAlert::new(
            "Flood Warning at UM Matina",
            "UM Matina, Davao City",
            "Heavy rains, possible river overflow.",
            "Today • 6:45 PM",
        ),
    ]
}
