//! Postgres-backed auth-as-a-service backend
//!
//! Speaks the GoTrue REST surface: `token?grant_type=password` for login and
//! `signup` for registration, authenticated with the project's anon key.
//! Provider failures carry a machine-readable `error_code`; that code is
//! mapped onto [`BackendError`] at this boundary.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::backend::{AuthBackend, BackendError, UserAccount};

/// Configuration for the Postgres-backed auth backend
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://YOUR_PROJECT_ID.supabase.co`
    pub project_url: String,
    /// Anonymous (publishable) API key
    pub anon_key: String,
}

impl SupabaseConfig {
    /// Create a new configuration
    pub fn new(project_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            project_url: project_url.into(),
            anon_key: anon_key.into(),
        }
    }
}

/// Auth client for the Postgres-backed provider
pub struct SupabaseAuthClient {
    http: reqwest::Client,
    config: SupabaseConfig,
    session: RwLock<Option<UserAccount>>,
}

/// User object embedded in token/signup responses
#[derive(Debug, Deserialize)]
struct UserBody {
    id: String,
    email: String,
}

/// Successful token response
#[derive(Debug, Deserialize)]
struct TokenResponse {
    user: UserBody,
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    msg: Option<String>,
}

impl SupabaseAuthClient {
    /// Create a new client
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            session: RwLock::new(None),
        }
    }

    async fn auth_request(&self, url: String, email: &str, password: &str) -> crate::Result<UserAccount> {
        let response = self
            .http
            .post(url)
            .header("apikey", &self.config.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            let token: TokenResponse = response
                .json()
                .await
                .map_err(|e| BackendError::Unknown(e.to_string()))?;
            let account = UserAccount::new(token.user.id, token.user.email);
            *self.session.write().await = Some(account.clone());
            debug!(uid = %account.uid, "auth request succeeded");
            Ok(account)
        } else {
            let body: ErrorBody = response
                .json()
                .await
                .map_err(|_| BackendError::Unknown(format!("HTTP {status}")))?;
            let code = body.error_code.as_deref().unwrap_or("");
            warn!(code, "auth request rejected");
            Err(map_error_code(code, body.msg.as_deref()))
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

fn map_error_code(code: &str, msg: Option<&str>) -> BackendError {
    match code {
        "invalid_credentials" => BackendError::InvalidCredentials,
        "user_already_exists" | "email_exists" => BackendError::UserAlreadyExists,
        "weak_password" => BackendError::WeakPassword,
        other if !other.is_empty() => BackendError::Unknown(other.to_string()),
        _ => BackendError::Unknown(msg.unwrap_or("unspecified error").to_string()),
    }
}

#[async_trait]
impl AuthBackend for SupabaseAuthClient {
    async fn login(&self, email: &str, password: &str) -> crate::Result<UserAccount> {
        let url = format!(
            "{}/auth/v1/token?grant_type=password",
            self.config.project_url
        );
        self.auth_request(url, email, password).await
    }

    async fn register(&self, email: &str, password: &str) -> crate::Result<UserAccount> {
        let url = format!("{}/auth/v1/signup", self.config.project_url);
        self.auth_request(url, email, password).await
    }

    async fn current_user(&self) -> Option<UserAccount> {
        self.session.read().await.clone()
    }

    async fn logout(&self) {
        *self.session.write().await = None;
    }
}
