//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{DashboardService, LoginService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub dashboard: Arc<dyn DashboardService>,
}

impl HttpState {
    /// Construct state from port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use gamehub::domain::catalog::{Catalog, Catalogs};
    /// use gamehub::domain::{AccountService, CredentialStore, GamingPlatform};
    /// use gamehub::inbound::http::state::HttpState;
    ///
    /// let catalogs = Catalogs::new(
    ///     Catalog::new(Vec::new()).expect("empty table"),
    ///     Catalog::new(Vec::new()).expect("empty table"),
    ///     Catalog::new(Vec::new()).expect("empty table"),
    /// );
    /// let state = HttpState::new(
    ///     Arc::new(AccountService::new(CredentialStore::new())),
    ///     Arc::new(GamingPlatform::new(catalogs)),
    /// );
    /// let _login = state.login.clone();
    /// ```
    pub fn new(login: Arc<dyn LoginService>, dashboard: Arc<dyn DashboardService>) -> Self {
        Self { login, dashboard }
    }
}
