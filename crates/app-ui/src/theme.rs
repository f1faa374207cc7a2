//! Design tokens and theme provider for MindaGuard
//!
//! Two themes are defined, light and dark, each mapping the same semantic
//! slots (background, surface, primary, ...) to its own hex values. The app
//! currently renders light-only; the dark palette is kept so the switch is
//! a one-liner when it lands.

use serde::{Deserialize, Serialize};

/// A color represented as an RGB hex string, e.g. "#F4F5F9"
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to a hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Brand colors
pub mod brand {
    /// MindaGuard forest green
    pub const GREEN: &str = "#2C4E3D";

    /// Teal accent used for map pins and highlights
    pub const ACCENT_TEAL: &str = "#00BFA5";
}

/// Theme identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Bright theme, the current default
    #[default]
    Light,
    /// Dark theme
    Dark,
}

/// Semantic color slots for a theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Screen background
    pub background: Color,
    /// Card/sheet surface
    pub surface: Color,
    /// Primary accent (buttons, links)
    pub primary: Color,
    /// Secondary accent
    pub secondary: Color,
    /// Text on the background
    pub on_background: Color,
    /// Text on surfaces
    pub on_surface: Color,
    /// De-emphasized text
    pub muted: Color,
}

/// A complete theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme identifier
    pub name: ThemeName,
    /// Semantic colors
    pub colors: ThemeColors,
}

impl Theme {
    /// Whether this is a dark theme
    pub fn is_dark(&self) -> bool {
        self.name == ThemeName::Dark
    }
}

/// The light theme
pub fn light_theme() -> Theme {
    Theme {
        name: ThemeName::Light,
        colors: ThemeColors {
            background: "#F4F5F9".to_string(),
            surface: "#FFFFFF".to_string(),
            primary: "#0D62FF".to_string(),
            secondary: "#FF7043".to_string(),
            on_background: "#1C1E21".to_string(),
            on_surface: "#222222".to_string(),
            muted: "#9E9E9E".to_string(),
        },
    }
}

/// The dark theme
pub fn dark_theme() -> Theme {
    Theme {
        name: ThemeName::Dark,
        colors: ThemeColors {
            background: "#0C0E14".to_string(),
            surface: "#181C24".to_string(),
            primary: "#4D8FFF".to_string(),
            secondary: "#FF8A65".to_string(),
            on_background: "#F5F5F5".to_string(),
            on_surface: "#E0E0E0".to_string(),
            muted: "#9FA4B2".to_string(),
        },
    }
}

/// Look up a theme by name
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::Light => light_theme(),
        ThemeName::Dark => dark_theme(),
    }
}
