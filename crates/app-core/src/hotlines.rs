//! Emergency hotline records
//!
//! Static display records for the emergency screen. Dialing is handled by
//! the platform; this module only supplies the data.

use serde::{Deserialize, Serialize};

/// An agency hotline shown on the emergency screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    /// Agency name, e.g. "Local DRRMO"
    pub agency: String,
    /// Phone number as dialed
    pub number: String,
    /// What the agency handles
    pub description: String,
}

impl EmergencyContact {
    /// Create a new contact
    pub fn new(
        agency: impl Into<String>,
        number: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            agency: agency.into(),
            number: number.into(),
            description: description.into(),
        }
    }
}

/// Sample hotline list used until a live directory is wired in
pub fn sample_hotlines() -> Vec<EmergencyContact> {
    vec![
        EmergencyContact::new("Local DRRMO", "123-4567", "Disaster response and rescue"),
        EmergencyContact::new("Fire Department", "160", "Fire and rescue emergencies"),
        EmergencyContact::new("Police", "166", "Police assistance"),
    ]
}
