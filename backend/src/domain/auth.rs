//! Authentication inputs: login credentials and signup forms.
//!
//! Inbound adapters build these through validating constructors before they
//! talk to the [`LoginService`](super::ports::LoginService) port. Checking
//! that the confirmation matches the new password is the account service's
//! job, not the form's.

use thiserror::Error;
use zeroize::Zeroizing;

/// Domain error returned when login or signup inputs are blank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Password was empty.
    #[error("password must not be empty")]
    EmptyPassword,
}

fn normalise_username(username: &str) -> Result<String, LoginValidationError> {
    let normalized = username.trim();
    if normalized.is_empty() {
        return Err(LoginValidationError::EmptyUsername);
    }
    Ok(normalized.to_owned())
}

/// Validated login credentials.
///
/// ## Invariants
/// - `username` is trimmed and non-empty.
/// - `password` is non-empty and keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use gamehub::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" admin ", "admin123").unwrap();
/// assert_eq!(creds.username(), "admin");
/// assert_eq!(creds.password(), "admin123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let username = normalise_username(username)?;
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            username,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username used for the credential lookup.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Plaintext password supplied by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated signup form.
///
/// Only the username must be non-blank. Passwords carry no strength rules,
/// so an empty password is accepted. The confirmation is kept verbatim so
/// the account service can report a mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupForm {
    username: String,
    password: Zeroizing<String>,
    confirm_password: Zeroizing<String>,
}

impl SignupForm {
    /// Construct a signup form from raw inputs.
    pub fn try_from_parts(
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Self, LoginValidationError> {
        let username = normalise_username(username)?;
        Ok(Self {
            username,
            password: Zeroizing::new(password.to_owned()),
            confirm_password: Zeroizing::new(confirm_password.to_owned()),
        })
    }

    /// Requested username.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Requested password.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Whether the confirmation equals the password.
    pub fn passwords_match(&self) -> bool {
        self.password == self.confirm_password
    }
}
