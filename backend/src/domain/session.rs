//! Per-session authentication state.
//!
//! The state is an explicit value handed to view handlers. The HTTP adapter
//! stores the username in the session cookie and rebuilds this value on
//! every request.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Authentication flags for one interactive session.
///
/// ## Invariants
/// - `authenticated` is `true` exactly when `username` is `Some`.
///
/// # Examples
/// ```
/// use gamehub::domain::SessionState;
///
/// let mut session = SessionState::anonymous();
/// session.login("Alice");
/// assert_eq!(session.current_user(), Some("Alice"));
/// session.logout();
/// assert!(!session.is_authenticated());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    authenticated: bool,
    #[schema(example = "admin")]
    username: Option<String>,
}

impl SessionState {
    /// Unauthenticated state.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// State already logged in as `username`.
    pub fn authenticated_as(username: impl Into<String>) -> Self {
        let mut state = Self::anonymous();
        state.login(username);
        state
    }

    /// Mark the session as authenticated for `username`.
    pub fn login(&mut self, username: impl Into<String>) {
        self.authenticated = true;
        self.username = Some(username.into());
    }

    /// Reset both fields.
    pub fn logout(&mut self) {
        self.authenticated = false;
        self.username = None;
    }

    /// Username of the logged-in user.
    pub fn current_user(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Whether a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn anonymous_has_no_user() {
        let state = SessionState::anonymous();
        assert!(!state.is_authenticated());
        assert_eq!(state.current_user(), None);
    }

    #[rstest]
    fn login_replaces_previous_user() {
        let mut state = SessionState::authenticated_as("admin");
        state.login("user1");
        assert!(state.is_authenticated());
        assert_eq!(state.current_user(), Some("user1"));
    }

    #[rstest]
    fn logout_is_idempotent() {
        let mut state = SessionState::authenticated_as("admin");
        state.logout();
        state.logout();
        assert_eq!(state, SessionState::anonymous());
    }

    #[rstest]
    fn serialises_camel_case() {
        let value = serde_json::to_value(SessionState::authenticated_as("admin")).expect("json");
        assert_eq!(value, json!({ "authenticated": true, "username": "admin" }));
    }
}
