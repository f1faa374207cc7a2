//! Login and registration flow state
//!
//! Each screen-facing flow owns an [`AuthFlowState`] machine: Idle until the
//! user submits, Loading while the backend call is in flight, then Success
//! or Error with a user-facing message. The closed error kinds from the auth
//! service are re-worded here, per flow, exactly once.

use std::sync::Arc;

use app_core::auth::{AuthError, AuthService, RegisterParams};
use auth_client::BackendError;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

/// State of an in-progress auth flow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", content = "message", rename_all = "lowercase")]
pub enum AuthFlowState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Backend call in flight
    Loading,
    /// Signed in / registered
    Success,
    /// Failed with a user-facing message
    Error(String),
}

impl AuthFlowState {
    /// Whether the flow ended in success
    pub fn is_success(&self) -> bool {
        matches!(self, AuthFlowState::Success)
    }

    /// The error message, if the flow failed
    pub fn error_message(&self) -> Option<&str> {
        match self {
            AuthFlowState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Which flow an error message is worded for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Login,
    Register,
}

/// Map an auth error to the message the screen shows
///
/// Validation kinds already carry their user-facing wording; backend kinds
/// get flow-specific wording here.
fn user_message(err: &AuthError, flow: Flow) -> String {
    match err {
        AuthError::Backend(BackendError::InvalidCredentials) => {
            "Incorrect email or password.".to_string()
        }
        AuthError::Backend(BackendError::UserAlreadyExists) => {
            "This email is already registered. Please log in.".to_string()
        }
        AuthError::Backend(BackendError::WeakPassword) => {
            "Password is too weak. Use at least 6 characters.".to_string()
        }
        AuthError::Backend(BackendError::NetworkUnavailable(_)) => {
            "No internet connection. Please try again.".to_string()
        }
        AuthError::Backend(BackendError::Unknown(_)) => match flow {
            Flow::Login => "Login failed. Please try again.".to_string(),
            Flow::Register => "Registration failed. Please try again.".to_string(),
        },
        validation => validation.to_string(),
    }
}

/// Login flow state machine
pub struct LoginFlow {
    service: Arc<AuthService>,
    state: RwLock<AuthFlowState>,
}

impl LoginFlow {
    /// Create a flow over the auth service
    pub fn new(service: Arc<AuthService>) -> Self {
        Self {
            service,
            state: RwLock::new(AuthFlowState::Idle),
        }
    }

    /// Current flow state
    pub async fn state(&self) -> AuthFlowState {
        self.state.read().await.clone()
    }

    /// Submit the login form
    pub async fn login(&self, email: &str, password: &str) -> AuthFlowState {
        *self.state.write().await = AuthFlowState::Loading;

        let next = match self.service.login(email, password).await {
            Ok(account) => {
                debug!(uid = %account.uid, "login flow succeeded");
                AuthFlowState::Success
            }
            Err(err) => AuthFlowState::Error(user_message(&err, Flow::Login)),
        };

        *self.state.write().await = next.clone();
        next
    }

    /// Return to Idle (e.g. when the screen is left)
    pub async fn reset(&self) {
        *self.state.write().await = AuthFlowState::Idle;
    }
}

/// Registration flow state machine
pub struct RegisterFlow {
    service: Arc<AuthService>,
    state: RwLock<AuthFlowState>,
}

impl RegisterFlow {
    /// Create a flow over the auth service
    pub fn new(service: Arc<AuthService>) -> Self {
        Self {
            service,
            state: RwLock::new(AuthFlowState::Idle),
        }
    }

    /// Current flow state
    pub async fn state(&self) -> AuthFlowState {
        self.state.read().await.clone()
    }

    /// Submit the registration form
    pub async fn register(&self, params: RegisterParams) -> AuthFlowState {
        *self.state.write().await = AuthFlowState::Loading;

        let next = match self.service.register(params).await {
            Ok(account) => {
                debug!(uid = %account.uid, "registration flow succeeded");
                AuthFlowState::Success
            }
            Err(err) => AuthFlowState::Error(user_message(&err, Flow::Register)),
        };

        *self.state.write().await = next.clone();
        next
    }

    /// Return to Idle
    pub async fn reset(&self) {
        *self.state.write().await = AuthFlowState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth_client::test_utils::MemoryBackend;

    fn service_with(backend: MemoryBackend) -> Arc<AuthService> {
        Arc::new(AuthService::new(Arc::new(backend)))
    }

    fn valid_params() -> RegisterParams {
        RegisterParams {
            email: "alice@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Santos".to_string(),
            mobile: "09171234567".to_string(),
            barangay: "Ma-a".to_string(),
            district: "Talomo".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_flow_success() {
        let backend = MemoryBackend::with_account("alice@example.com", "secret1").await;
        let flow = LoginFlow::new(service_with(backend));
        assert_eq!(flow.state().await, AuthFlowState::Idle);

        let state = flow.login("alice@example.com", "secret1").await;
        assert!(state.is_success());
        assert_eq!(flow.state().await, AuthFlowState::Success);
    }

    #[tokio::test]
    async fn test_login_flow_wrong_password_message() {
        let backend = MemoryBackend::with_account("alice@example.com", "secret1").await;
        let flow = LoginFlow::new(service_with(backend));

        let state = flow.login("alice@example.com", "nope00").await;
        assert_eq!(state.error_message(), Some("Incorrect email or password."));
    }

    #[tokio::test]
    async fn test_login_flow_blank_input_message() {
        let flow = LoginFlow::new(service_with(MemoryBackend::new()));

        let state = flow.login("", "").await;
        assert_eq!(
            state.error_message(),
            Some("Please enter your email and password")
        );
    }

    #[tokio::test]
    async fn test_login_flow_offline_message() {
        let backend = MemoryBackend::with_account("alice@example.com", "secret1").await;
        backend.set_offline(true);
        let flow = LoginFlow::new(service_with(backend));

        let state = flow.login("alice@example.com", "secret1").await;
        assert_eq!(
            state.error_message(),
            Some("No internet connection. Please try again.")
        );
    }

    #[tokio::test]
    async fn test_register_flow_duplicate_email_message() {
        let backend = MemoryBackend::with_account("alice@example.com", "secret1").await;
        let flow = RegisterFlow::new(service_with(backend));

        let state = flow.register(valid_params()).await;
        assert_eq!(
            state.error_message(),
            Some("This email is already registered. Please log in.")
        );
    }

    #[tokio::test]
    async fn test_register_flow_validation_message() {
        let flow = RegisterFlow::new(service_with(MemoryBackend::new()));

        let mut params = valid_params();
        params.confirm_password = "other".to_string();
        let state = flow.register(params).await;
        assert_eq!(state.error_message(), Some("Passwords do not match"));
    }

    #[tokio::test]
    async fn test_reset_returns_to_idle() {
        let flow = LoginFlow::new(service_with(MemoryBackend::new()));
        flow.login("", "").await;
        assert!(flow.state().await.error_message().is_some());

        flow.reset().await;
        assert_eq!(flow.state().await, AuthFlowState::Idle);
    }
}
