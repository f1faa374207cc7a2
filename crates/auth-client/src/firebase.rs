//! Mobile-identity REST backend
//!
//! Speaks the Identity Toolkit REST surface: `accounts:signInWithPassword`
//! for login and `accounts:signUp` for registration. Provider failures carry
//! a structured error code in the response body; that code — never the
//! human-readable text around it — is mapped onto [`BackendError`].

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::backend::{AuthBackend, BackendError, UserAccount};

/// Default Identity Toolkit endpoint
pub const DEFAULT_ENDPOINT: &str = "https://identitytoolkit.googleapis.com";

/// Configuration for the mobile-identity backend
#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    /// Web API key for the project
    pub api_key: String,
    /// Service endpoint (overridable for tests)
    pub endpoint: String,
}

impl FirebaseConfig {
    /// Configuration against the production endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    /// Configuration against a custom endpoint
    pub fn with_endpoint(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }
}

/// Auth client for the mobile-identity provider
///
/// Constructed explicitly and passed to whichever component needs it. The
/// signed-in account lives in memory for the lifetime of the client.
pub struct FirebaseAuthClient {
    http: reqwest::Client,
    config: FirebaseConfig,
    session: RwLock<Option<UserAccount>>,
}

/// Successful sign-in/sign-up response body
#[derive(Debug, Deserialize)]
struct AccountResponse {
    #[serde(rename = "localId")]
    local_id: String,
    email: String,
}

/// Error envelope returned with non-2xx statuses
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl FirebaseAuthClient {
    /// Create a new client
    pub fn new(config: FirebaseConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session: RwLock::new(None),
        }
    }

    fn account_url(&self, action: &str) -> String {
        format!(
            "{}/v1/accounts:{}?key={}",
            self.config.endpoint, action, self.config.api_key
        )
    }

    async fn credential_request(
        &self,
        action: &str,
        email: &str,
        password: &str,
    ) -> crate::Result<UserAccount> {
        let body = json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });

        let response = self
            .http
            .post(self.account_url(action))
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            let account: AccountResponse = response
                .json()
                .await
                .map_err(|e| BackendError::Unknown(e.to_string()))?;
            let account = UserAccount::new(account.local_id, account.email);
            *self.session.write().await = Some(account.clone());
            debug!(uid = %account.uid, action, "identity request succeeded");
            Ok(account)
        } else {
            let envelope: ErrorEnvelope = response
                .json()
                .await
                .map_err(|_| BackendError::Unknown(format!("HTTP {status}")))?;
            warn!(action, code = %envelope.error.message, "identity request rejected");
            Err(map_error_code(&envelope.error.message))
        }
    }
}

fn transport_error(e: reqwest::Error) -> BackendError {
    if e.is_connect() || e.is_timeout() {
        BackendError::NetworkUnavailable(e.to_string())
    } else {
        BackendError::Unknown(e.to_string())
    }
}

/// Map a structured provider error code to the closed error set
///
/// Codes like `WEAK_PASSWORD` can arrive suffixed with advisory text
/// (`"WEAK_PASSWORD : Password should be at least 6 characters"`); only the
/// leading code token is considered.
fn map_error_code(message: &str) -> BackendError {
    let code = message.split(':').next().unwrap_or(message).trim();
    match code {
        "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => {
            BackendError::InvalidCredentials
        }
        "EMAIL_EXISTS" => BackendError::UserAlreadyExists,
        "WEAK_PASSWORD" => BackendError::WeakPassword,
        other => BackendError::Unknown(other.to_string()),
    }
}

#[async_trait]
impl AuthBackend for FirebaseAuthClient {
    async fn login(&self, email: &str, password: &str) -> crate::Result<UserAccount> {
        self.credential_request("signInWithPassword", email, password)
            .await
    }

    async fn register(&self, email: &str, password: &str) -> crate::Result<UserAccount> {
        self.credential_request("signUp", email, password).await
    }

    async fn current_user(&self) -> Option<UserAccount> {
        self.session.read().await.clone()
    }

    async fn logout(&self) {
        *self.session.write().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> FirebaseAuthClient {
        FirebaseAuthClient::new(FirebaseConfig::with_endpoint("test-key", server.uri()))
    }

    #[tokio::test]
    async fn test_login_success_sets_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/accounts:signInWithPassword"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "localId": "uid-123",
                "email": "alice@example.com",
                "idToken": "token",
                "refreshToken": "refresh",
                "expiresIn": "3600",
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let account = client.login("alice@example.com", "secret1").await.unwrap();
        assert_eq!(account.uid, "uid-123");
        assert_eq!(account.email, "alice@example.com");
        assert_eq!(client.current_user().await, Some(account));
    }

    #[tokio::test]
    async fn test_login_invalid_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/accounts:signInWithPassword"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": { "code": 400, "message": "INVALID_LOGIN_CREDENTIALS" }
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.login("alice@example.com", "wrong").await.unwrap_err();
        assert!(matches!(err, BackendError::InvalidCredentials));
        assert!(client.current_user().await.is_none());
    }

    #[tokio::test]
    async fn test_register_existing_email() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/accounts:signUp"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": { "code": 400, "message": "EMAIL_EXISTS" }
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client
            .register("alice@example.com", "secret1")
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::UserAlreadyExists));
    }

    #[tokio::test]
    async fn test_register_weak_password_with_suffix_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/accounts:signUp"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": {
                    "code": 400,
                    "message": "WEAK_PASSWORD : Password should be at least 6 characters"
                }
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.register("alice@example.com", "123").await.unwrap_err();
        assert!(matches!(err, BackendError::WeakPassword));
    }

    #[tokio::test]
    async fn test_unrecognized_code_is_unknown() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/accounts:signInWithPassword"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "error": { "code": 400, "message": "USER_DISABLED" }
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = client.login("alice@example.com", "secret1").await.unwrap_err();
        match err {
            BackendError::Unknown(code) => assert_eq!(code, "USER_DISABLED"),
            other => panic!("expected Unknown, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/accounts:signInWithPassword"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "localId": "uid-123",
                "email": "alice@example.com",
            })))
            .mount(&server)
            .await;

        let client = test_client(&server);
        client.login("alice@example.com", "secret1").await.unwrap();
        assert!(client.current_user().await.is_some());

        client.logout().await;
        assert!(client.current_user().await.is_none());
    }
}
