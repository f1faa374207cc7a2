//! Session state
//!
//! Thin reactive view over the auth service: screens ask this for the
//! signed-in account instead of holding their own copy, and the menu's
//! log-out action routes through here.

use std::sync::Arc;

use app_core::auth::AuthService;
use auth_client::UserAccount;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Snapshot of the current session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentSession {
    /// The signed-in account
    pub account: UserAccount,
}

/// Session state over the auth service
#[derive(Clone)]
pub struct SessionState {
    service: Arc<AuthService>,
}

impl SessionState {
    /// Create session state over the auth service
    pub fn new(service: Arc<AuthService>) -> Self {
        Self { service }
    }

    /// Current session, if signed in
    pub async fn current(&self) -> Option<CurrentSession> {
        self.service
            .current_user()
            .await
            .map(|account| CurrentSession { account })
    }

    /// Whether an account is signed in
    pub async fn is_signed_in(&self) -> bool {
        self.service.current_user().await.is_some()
    }

    /// Sign out the current account
    pub async fn sign_out(&self) {
        debug!("sign out requested");
        self.service.logout().await;
    }
}
