//! GameHub entry-point: loads settings, seeds the catalogs and serves the API.

mod server;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use gamehub::inbound::http::session_config::session_settings;
use gamehub::settings::ServerSettings;
use gamehub::startup::bootstrap;
use ortho_config::OrthoConfig;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::other(format!("invalid bind address: {e}")))?;
    let session = session_settings(&settings).map_err(std::io::Error::other)?;
    let platform = bootstrap(&settings).map_err(std::io::Error::other)?;

    info!(
        %bind_addr,
        catalog_seed = platform.catalog_seed,
        "starting gamehub"
    );

    let config = ServerConfig::new(
        session.key,
        session.cookie_secure,
        session.same_site,
        bind_addr,
    );
    create_server(platform.state, config)?.await
}
