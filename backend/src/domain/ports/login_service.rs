//! Driving port for login and signup use-cases.
//!
//! Inbound adapters call this port to check credentials and register
//! accounts without knowing where the credential store lives.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, SignupForm};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated username.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<String, Error>;

    /// Register a new account and return its username.
    ///
    /// Fails with a conflict when the username is taken and with an invalid
    /// request when the confirmation does not match.
    async fn register(&self, form: &SignupForm) -> Result<String, Error>;
}
