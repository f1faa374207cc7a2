//! Test support for code that consumes an [`AuthBackend`]
//!
//! [`MemoryBackend`] is a deterministic in-process stand-in for the hosted
//! providers: it keeps accounts in a map, enforces the same failure kinds the
//! real backends produce, and can simulate a network outage.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::backend::{AuthBackend, BackendError, UserAccount};

/// Minimum password length the hosted providers enforce
const MIN_PASSWORD_LEN: usize = 6;

/// In-memory auth backend for tests
#[derive(Default)]
pub struct MemoryBackend {
    accounts: RwLock<HashMap<String, StoredAccount>>,
    session: RwLock<Option<UserAccount>>,
    next_uid: AtomicU64,
    offline: AtomicBool,
}

struct StoredAccount {
    password: String,
    account: UserAccount,
}

impl MemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-seeded with one registered account
    pub async fn with_account(email: &str, password: &str) -> Self {
        let backend = Self::new();
        backend
            .register(email, password)
            .await
            .expect("seed account must register");
        backend.logout().await;
        backend
    }

    /// Simulate the provider being unreachable
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn check_online(&self) -> crate::Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            Err(BackendError::NetworkUnavailable(
                "simulated outage".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl AuthBackend for MemoryBackend {
    async fn login(&self, email: &str, password: &str) -> crate::Result<UserAccount> {
        self.check_online()?;

        let accounts = self.accounts.read().await;
        let stored = accounts
            .get(email)
            .ok_or(BackendError::InvalidCredentials)?;
        if stored.password != password {
            return Err(BackendError::InvalidCredentials);
        }

        let account = stored.account.clone();
        drop(accounts);
        *self.session.write().await = Some(account.clone());
        Ok(account)
    }

    async fn register(&self, email: &str, password: &str) -> crate::Result<UserAccount> {
        self.check_online()?;

        if password.len() < MIN_PASSWORD_LEN {
            return Err(BackendError::WeakPassword);
        }

        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(email) {
            return Err(BackendError::UserAlreadyExists);
        }

        let uid = format!("user-{}", self.next_uid.fetch_add(1, Ordering::SeqCst) + 1);
        let account = UserAccount::new(uid, email);
        accounts.insert(
            email.to_string(),
            StoredAccount {
                password: password.to_string(),
                account: account.clone(),
            },
        );
        drop(accounts);

        *self.session.write().await = Some(account.clone());
        Ok(account)
    }

    async fn current_user(&self) -> Option<UserAccount> {
        self.session.read().await.clone()
    }

    async fn logout(&self) {
        *self.session.write().await = None;
    }
}
