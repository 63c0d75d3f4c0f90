//! Account service backed by the in-memory credential store.
//!
//! Implements the [`LoginService`] port. The store is shared by every
//! session in the process, so signups are visible to later logins from any
//! browser until the process exits.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::json;
use thiserror::Error;
use tracing::{info, warn};

use super::ports::LoginService;
use super::{CredentialStore, Error, LoginCredentials, SignupForm};

/// Reasons an account operation is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("username '{username}' already exists")]
    DuplicateUsername { username: String },
    #[error("passwords do not match")]
    PasswordMismatch,
}

impl From<AccountError> for Error {
    fn from(value: AccountError) -> Self {
        match value {
            AccountError::InvalidCredentials => {
                Self::unauthorized("Invalid username or password.")
            }
            AccountError::DuplicateUsername { username } => {
                Self::conflict("Username already exists. Please choose another.").with_details(
                    json!({ "field": "username", "value": username, "code": "duplicate_username" }),
                )
            }
            AccountError::PasswordMismatch => Self::invalid_request("Passwords do not match.")
                .with_details(json!({ "field": "confirmPassword", "code": "password_mismatch" })),
        }
    }
}

/// Login and signup over a process-wide [`CredentialStore`].
#[derive(Debug, Default)]
pub struct AccountService {
    store: Mutex<CredentialStore>,
}

impl AccountService {
    pub fn new(store: CredentialStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    fn store(&self) -> MutexGuard<'_, CredentialStore> {
        // Every critical section leaves the map consistent, so a poisoned
        // lock still guards valid data.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Check `credentials` against the store.
    pub fn login(&self, credentials: &LoginCredentials) -> Result<String, AccountError> {
        let username = credentials.username();
        if self.store().verify(username, credentials.password()) {
            info!(%username, "login succeeded");
            Ok(username.to_owned())
        } else {
            warn!(%username, "login rejected");
            Err(AccountError::InvalidCredentials)
        }
    }

    /// Register the account described by `form`.
    pub fn signup(&self, form: &SignupForm) -> Result<String, AccountError> {
        let username = form.username();
        if !form.passwords_match() {
            warn!(%username, "signup rejected: confirmation mismatch");
            return Err(AccountError::PasswordMismatch);
        }
        if self.store().register(username, form.password()) {
            info!(%username, "account created");
            Ok(username.to_owned())
        } else {
            warn!(%username, "signup rejected: username taken");
            Err(AccountError::DuplicateUsername {
                username: username.to_owned(),
            })
        }
    }
}

#[async_trait]
impl LoginService for AccountService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<String, Error> {
        self.login(credentials).map_err(Error::from)
    }

    async fn register(&self, form: &SignupForm) -> Result<String, Error> {
        self.signup(form).map_err(Error::from)
    }
}
