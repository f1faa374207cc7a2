//! Navigation framework for MindaGuard
//!
//! This module provides the route definitions, the navigation stack, and an
//! [`AppNavigator`] encoding the app's screen-sequencing rules: the app
//! starts on Login, auth success resets the stack onto Home, and the pill
//! bottom bar is shown only on the Home and Menu destinations (Map is a
//! full-screen experience).

use serde::{Deserialize, Serialize};

// =============================================================================
// Route Definitions
// =============================================================================

/// All destinations in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Login screen
    Login,
    /// Registration screen
    Register,
    /// Home dashboard
    Home,
    /// Evacuation/hazard map
    Map,
    /// Settings menu
    Menu,
    /// Alert updates list
    Alerts,
    /// Emergency hotlines list
    Emergency,
}

impl Route {
    /// Route path string
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "login",
            Route::Register => "register",
            Route::Home => "home",
            Route::Map => "map",
            Route::Menu => "menu",
            Route::Alerts => "alerts",
            Route::Emergency => "emergency",
        }
    }

    /// Screen title for this route
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Log In",
            Route::Register => "Create Account",
            Route::Home => "Home",
            Route::Map => "Map",
            Route::Menu => "Menu",
            Route::Alerts => "Alert Updates",
            Route::Emergency => "Emergency Hotlines",
        }
    }

    /// Whether the pill bottom bar is visible on this route
    pub fn shows_bottom_bar(&self) -> bool {
        matches!(self, Route::Home | Route::Menu)
    }
}

// =============================================================================
// Bottom Bar Tabs
// =============================================================================

/// A tab on the pill bottom bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillTab {
    /// Destination route
    pub route: Route,
    /// Tab label
    pub label: &'static str,
    /// Icon name
    pub icon: &'static str,
}

/// The three main tabs in display order
pub fn main_tabs() -> [PillTab; 3] {
    [
        PillTab {
            route: Route::Home,
            label: "Home",
            icon: "home",
        },
        PillTab {
            route: Route::Map,
            label: "Map",
            icon: "place",
        },
        PillTab {
            route: Route::Menu,
            label: "Menu",
            icon: "menu",
        },
    ]
}

// =============================================================================
// Navigation Stack
// =============================================================================

/// A navigation stack entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackEntry {
    /// The route
    pub route: Route,
    /// Unique key for this entry
    pub key: String,
}

impl StackEntry {
    /// Create a new stack entry
    pub fn new(route: Route) -> Self {
        Self {
            route,
            key: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Back-stack of visited routes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationStack {
    /// Entries, bottom to top
    entries: Vec<StackEntry>,
}

impl NavigationStack {
    /// Create a stack rooted at the given route
    pub fn new(root: Route) -> Self {
        Self {
            entries: vec![StackEntry::new(root)],
        }
    }

    /// Push a route onto the stack
    pub fn push(&mut self, route: Route) {
        self.entries.push(StackEntry::new(route));
    }

    /// Pop the top route (returns true if popped, false if at root)
    pub fn pop(&mut self) -> bool {
        if self.entries.len() > 1 {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    /// Pop entries until the given route is on top
    ///
    /// Stops at the root if the route is not on the stack. Returns true if
    /// the route ended up on top.
    pub fn pop_to(&mut self, route: Route) -> bool {
        while self.current() != route && self.entries.len() > 1 {
            self.entries.pop();
        }
        self.current() == route
    }

    /// Replace the whole stack with a new root
    pub fn reset(&mut self, route: Route) {
        self.entries = vec![StackEntry::new(route)];
    }

    /// The current (top) route
    pub fn current(&self) -> Route {
        self.entries
            .last()
            .expect("stack is never empty")
            .route
    }

    /// Whether back navigation is possible
    pub fn can_go_back(&self) -> bool {
        self.entries.len() > 1
    }

    /// Stack depth
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// All entries, bottom to top
    pub fn entries(&self) -> &[StackEntry] {
        &self.entries
    }
}

// =============================================================================
// App Navigator
// =============================================================================

/// Screen-sequencing rules for the whole app
///
/// Wraps a [`NavigationStack`] with the transitions the navigation graph
/// wires up: auth success clears the auth screens off the stack, the bottom
/// bar switches between the three main tabs, and the map's back button
/// returns to Home.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppNavigator {
    stack: NavigationStack,
}

impl Default for AppNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl AppNavigator {
    /// Navigator starting on the login screen
    pub fn new() -> Self {
        Self {
            stack: NavigationStack::new(Route::Login),
        }
    }

    /// Current route
    pub fn current(&self) -> Route {
        self.stack.current()
    }

    /// Whether the pill bottom bar is visible right now
    pub fn shows_bottom_bar(&self) -> bool {
        self.current().shows_bottom_bar()
    }

    /// Go to the registration screen from login
    pub fn to_register(&mut self) {
        self.stack.push(Route::Register);
    }

    /// Login or registration succeeded: Home becomes the new root, the
    /// auth screens are gone from the back stack
    pub fn on_auth_success(&mut self) {
        self.stack.reset(Route::Home);
    }

    /// Select a bottom bar tab
    pub fn select_tab(&mut self, route: Route) {
        if self.current() == route {
            return;
        }
        // Tabs never stack on each other: return to Home first, then
        // push the selected tab above it.
        self.stack.pop_to(Route::Home);
        if route != Route::Home {
            self.stack.push(route);
        }
    }

    /// Open the alerts list from the home dashboard
    pub fn to_alerts(&mut self) {
        self.stack.push(Route::Alerts);
    }

    /// Open the emergency hotlines from the home dashboard
    pub fn to_emergency(&mut self) {
        self.stack.push(Route::Emergency);
    }

    /// Back from the map returns to Home
    pub fn on_map_back(&mut self) {
        self.stack.pop_to(Route::Home);
    }

    /// Generic back navigation (returns false at the root)
    pub fn go_back(&mut self) -> bool {
        self.stack.pop()
    }

    /// Logged out: back to a fresh login screen
    pub fn on_logout(&mut self) {
        self.stack.reset(Route::Login);
    }

    /// The underlying stack
    pub fn stack(&self) -> &NavigationStack {
        &self.stack
    }
}
