//! Core application logic for MindaGuard
//!
//! This crate contains the shared domain logic behind the screens: map
//! locations and best-match search, community alerts, emergency hotlines,
//! the home greeting, and the authentication service.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alerts;
pub mod auth;
pub mod greeting;
pub mod hotlines;
pub mod locations;
