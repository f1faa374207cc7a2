//! The auth backend capability set and its error taxonomy
//!
//! Every hosted identity provider the app can be built against implements
//! [`AuthBackend`]. Failures surface as a closed set of [`BackendError`]
//! kinds produced here at the boundary; downstream code matches on the kind
//! and never inspects provider error text.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Errors produced by an auth backend
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The email/password pair was rejected
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// An account with this email already exists
    #[error("User already exists")]
    UserAlreadyExists,

    /// The password does not meet the provider's strength policy
    #[error("Weak password")]
    WeakPassword,

    /// The provider could not be reached
    #[error("Network unavailable: {0}")]
    NetworkUnavailable(String),

    /// Any other provider-side failure
    #[error("Unknown backend error: {0}")]
    Unknown(String),
}

/// The signed-in account as reported by the provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    /// Provider-assigned stable user id
    pub uid: String,
    /// Email address the account was created with
    pub email: String,
}

impl UserAccount {
    /// Create a new account value
    pub fn new(uid: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: email.into(),
        }
    }
}

/// Capability set shared by every hosted identity provider
///
/// The four operations mirror what the app actually uses: sign in, sign up,
/// look up the current session, and sign out. Implementations keep the
/// signed-in account in memory for the lifetime of the client; callers own
/// the client and decide when it is dropped.
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// Sign in with email and password
    async fn login(&self, email: &str, password: &str) -> crate::Result<UserAccount>;

    /// Register a new account with email and password
    async fn register(&self, email: &str, password: &str) -> crate::Result<UserAccount>;

    /// The currently signed-in account, if any
    async fn current_user(&self) -> Option<UserAccount>;

    /// Sign out the current account
    async fn logout(&self);
}
