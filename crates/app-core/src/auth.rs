//! Authentication service for MindaGuard
//!
//! Wraps the hosted auth backend behind form validation. All outcomes are an
//! explicit [`AuthError`] kind — validation failures are produced here,
//! backend failures pass through as their closed [`BackendError`] set. No
//! error-text parsing happens anywhere in this module.

use std::sync::{Arc, OnceLock};

use auth_client::{AuthBackend, BackendError, UserAccount};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 6;

/// Authentication outcomes that are not a success
///
/// Display strings double as the user-facing message for validation kinds;
/// backend kinds are re-worded per flow by the state layer.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login submitted with a blank email or password
    #[error("Please enter your email and password")]
    MissingCredentials,

    /// Registration submitted with one or more blank fields
    #[error("Please fill in all fields")]
    MissingFields,

    /// Password and confirmation differ
    #[error("Passwords do not match")]
    PasswordMismatch,

    /// Password shorter than [`MIN_PASSWORD_LEN`]
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    /// Email does not look like an address
    #[error("Please enter a valid email address")]
    InvalidEmail,

    /// Failure reported by the hosted backend
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Result type for authentication operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Registration form contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterParams {
    /// Email address
    pub email: String,
    /// Chosen password
    pub password: String,
    /// Password confirmation
    pub confirm_password: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Mobile number
    pub mobile: String,
    /// Barangay of residence
    pub barangay: String,
    /// District of residence
    pub district: String,
}

impl RegisterParams {
    fn has_blank_field(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.mobile,
            &self.email,
            &self.password,
            &self.confirm_password,
            &self.barangay,
            &self.district,
        ]
        .iter()
        .any(|field| field.trim().is_empty())
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
    })
}

/// Authentication service
///
/// Validates form input, then delegates to whichever [`AuthBackend`] the
/// build selected. The backend is injected at construction; the service
/// holds no other state.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use app_core::auth::AuthService;
/// use auth_client::test_utils::MemoryBackend;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let service = AuthService::new(Arc::new(MemoryBackend::new()));
/// assert!(service.current_user().await.is_none());
/// # }
/// ```
pub struct AuthService {
    backend: Arc<dyn AuthBackend>,
}

impl AuthService {
    /// Create a service over the given backend
    pub fn new(backend: Arc<dyn AuthBackend>) -> Self {
        Self { backend }
    }

    /// Sign in with email and password
    ///
    /// Blank input is rejected before the backend is contacted.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserAccount> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        debug!(email = %email.trim(), "login attempt");
        let account = self.backend.login(email.trim(), password).await?;
        Ok(account)
    }

    /// Register a new account
    ///
    /// Checks run in the order the form surfaces them: blank fields,
    /// password confirmation, password length, email shape. Only then is
    /// the backend contacted.
    pub async fn register(&self, params: RegisterParams) -> Result<UserAccount> {
        if params.has_blank_field() {
            return Err(AuthError::MissingFields);
        }
        if params.password != params.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        if params.password.len() < MIN_PASSWORD_LEN {
            return Err(AuthError::PasswordTooShort);
        }
        let email = params.email.trim();
        if !email_regex().is_match(email) {
            return Err(AuthError::InvalidEmail);
        }

        debug!(email = %email, "registration attempt");
        let account = self.backend.register(email, &params.password).await?;
        Ok(account)
    }

    /// The currently signed-in account, if any
    pub async fn current_user(&self) -> Option<UserAccount> {
        self.backend.current_user().await
    }

    /// Sign out the current account
    pub async fn logout(&self) {
        debug!("logout");
        self.backend.logout().await;
    }
}
