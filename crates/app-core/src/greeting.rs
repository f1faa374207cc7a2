//! Time-of-day greeting for the home screen
//!
//! The hero card greets the user by day period and swaps its artwork at
//! night. Period boundaries: morning 05:00–11:59, afternoon 12:00–17:59,
//! evening otherwise; night (for artwork) runs 18:00–05:59.

use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};

/// Day period the greeting is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPeriod {
    /// 05:00–11:59
    Morning,
    /// 12:00–17:59
    Afternoon,
    /// 18:00–04:59
    Evening,
}

impl DayPeriod {
    /// Classify an hour of day (0–23)
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => DayPeriod::Morning,
            12..=17 => DayPeriod::Afternoon,
            _ => DayPeriod::Evening,
        }
    }

    /// Greeting text for this period
    pub fn greeting(&self) -> &'static str {
        match self {
            DayPeriod::Morning => "Good Morning!",
            DayPeriod::Afternoon => "Good Afternoon!",
            DayPeriod::Evening => "Good Evening!",
        }
    }
}

/// Greeting state for a given hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    /// Day period
    pub period: DayPeriod,
    /// Whether night artwork should be shown
    pub is_night: bool,
}

impl Greeting {
    /// Greeting for an hour of day (0–23)
    pub fn for_hour(hour: u32) -> Self {
        Self {
            period: DayPeriod::from_hour(hour),
            is_night: hour >= 18 || hour < 6,
        }
    }

    /// Greeting for the local wall clock
    pub fn now() -> Self {
        Self::for_hour(Local::now().hour())
    }

    /// Greeting text
    pub fn text(&self) -> &'static str {
        self.period.greeting()
    }
}
