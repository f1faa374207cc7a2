//! Application state management for MindaGuard
//!
//! This crate holds the state machines between the screens and the domain
//! logic: login/registration flow state, map screen state, and the current
//! session snapshot.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth_flow;
pub mod map;
pub mod session;

pub use auth_flow::{AuthFlowState, LoginFlow, RegisterFlow};
pub use map::{HazardLayers, MapScreenState, MapTab, StormSurgePeriod};
pub use session::{CurrentSession, SessionState};
