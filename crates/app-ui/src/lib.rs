//! User interface model for MindaGuard
//!
//! This crate provides the non-rendering parts of the UI layer: route
//! definitions and the navigation stack, the theme palettes, and the
//! settings menu model. Actual drawing belongs to the platform shell.
//!
//! # Example
//!
//! ```rust
//! use app_ui::navigation::{AppNavigator, Route};
//! use app_ui::theme::{get_theme, ThemeName};
//!
//! let mut nav = AppNavigator::new();
//! assert_eq!(nav.current(), Route::Login);
//! nav.on_auth_success();
//! assert_eq!(nav.current(), Route::Home);
//!
//! let theme = get_theme(ThemeName::Light);
//! assert!(!theme.is_dark());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod menu;
pub mod navigation;
pub mod screens;
pub mod theme;

// Re-export commonly used types
pub use menu::{menu_items, MenuAction, MenuItem, APP_VERSION};
pub use navigation::{main_tabs, AppNavigator, NavigationStack, PillTab, Route, StackEntry};
pub use screens::{AlertsScreenModel, EmergencyScreenModel, HomeScreenModel, MapScreenModel};
pub use theme::{dark_theme, get_theme, light_theme, Theme, ThemeColors, ThemeName};
