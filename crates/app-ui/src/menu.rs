//! Settings menu model
//!
//! The menu screen is a fixed list of actions plus a user card and a
//! log-out row. What each action does (open system settings, navigate,
//! sign out) is wired up by the platform shell; this module only names them.

use serde::{Deserialize, Serialize};

/// App version string shown at the bottom of the menu
pub const APP_VERSION: &str = "Version 0.1-BETA";

/// Actions reachable from the menu screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuAction {
    /// Open the user's profile
    ViewProfile,
    /// Open notification and preference settings
    Notifications,
    /// Open the information pages
    Information,
    /// Open the platform app-info screen
    AppInfo,
    /// Sign out
    Logout,
}

/// A row on the menu screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Row title
    pub title: &'static str,
    /// Action triggered by the row
    pub action: MenuAction,
}

/// The settings rows, in display order
///
/// The user card (View Profile) and the log-out row are rendered
/// separately from this list, matching the screen layout.
pub fn menu_items() -> [MenuItem; 3] {
    [
        MenuItem {
            title: "Notification & Preferences",
            action: MenuAction::Notifications,
        },
        MenuItem {
            title: "Information",
            action: MenuAction::Information,
        },
        MenuItem {
            title: "App Info",
            action: MenuAction::AppInfo,
        },
    ]
}
