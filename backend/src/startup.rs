//! Start-up wiring: registry, catalog seed and services.

use std::sync::Arc;

use mock_catalog::{CatalogRegistry, RegistryError, generate_catalog};
use thiserror::Error;
use tracing::info;

use crate::domain::catalog::{CatalogError, Catalogs};
use crate::domain::{AccountService, CredentialStore, GamingPlatform};
use crate::inbound::http::state::HttpState;
use crate::settings::ServerSettings;

/// Errors returned while building the platform at start-up.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The catalog registry could not be loaded.
    #[error("catalog registry error: {0}")]
    Registry(#[from] RegistryError),
    /// The generated rows could not form catalog tables.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Services built for one process run.
pub struct Bootstrap {
    /// Handler state wired to the real services.
    pub state: HttpState,
    /// Seed used for the `players_online` draw.
    pub catalog_seed: u64,
}

/// Build the services from a registry and a fixed seed.
///
/// # Examples
/// ```
/// use gamehub::startup::build_state;
/// use mock_catalog::CatalogRegistry;
///
/// let registry = CatalogRegistry::builtin().expect("bundled registry");
/// let _state = build_state(&registry, 42).expect("valid catalog");
/// ```
pub fn build_state(registry: &CatalogRegistry, seed: u64) -> Result<HttpState, StartupError> {
    let catalog = generate_catalog(registry, seed);
    let accounts = CredentialStore::with_accounts(
        catalog
            .accounts
            .iter()
            .map(|account| (account.username.as_str(), account.password.as_str())),
    );
    let catalogs = Catalogs::from_seed(&catalog)?;
    info!(
        accounts = accounts.len(),
        players = catalogs.players().len(),
        games = catalogs.games().len(),
        shop_items = catalogs.shop_items().len(),
        "catalogs loaded"
    );
    Ok(HttpState::new(
        Arc::new(AccountService::new(accounts)),
        Arc::new(GamingPlatform::new(catalogs)),
    ))
}

/// Load the configured registry, choose the seed and build the services.
pub fn bootstrap(settings: &ServerSettings) -> Result<Bootstrap, StartupError> {
    let registry = match settings.catalog_path.as_deref() {
        Some(path) => {
            info!(path = %path.display(), "loading catalog registry");
            CatalogRegistry::from_file(path)?
        }
        None => CatalogRegistry::builtin()?,
    };
    let catalog_seed = settings.catalog_seed.unwrap_or_else(rand::random);
    info!(
        catalog_seed,
        configured = settings.catalog_seed.is_some(),
        "catalog seed selected"
    );
    let state = build_state(&registry, catalog_seed)?;
    Ok(Bootstrap {
        state,
        catalog_seed,
    })
}
