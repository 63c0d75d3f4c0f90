//! Server configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `GAMEHUB_*` environment variables and
//! configuration files, in OrthoConfig's usual precedence.

use std::net::{AddrParseError, SocketAddr};
use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SESSION_KEY_FILE: &str = "/var/run/secrets/session_key";

/// Settings controlling the HTTP listener, sessions and catalog seeding.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "GAMEHUB")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// Mark the session cookie `Secure`. On unless set to `false`.
    pub cookie_secure: Option<bool>,
    /// File holding the session signing key material.
    pub session_key_file: Option<PathBuf>,
    /// `SameSite` policy for the session cookie: `Strict`, `Lax` or `None`.
    pub session_same_site: Option<String>,
    /// Allow a throwaway session key in release builds.
    #[ortho_config(default = false)]
    pub session_allow_ephemeral: bool,
    /// Seed for the `players_online` draw. Random when unset.
    pub catalog_seed: Option<u64>,
    /// Registry file replacing the bundled catalog.
    pub catalog_path: Option<PathBuf>,
}

impl ServerSettings {
    /// Parsed listen address, falling back to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        self.bind_addr
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
    }

    /// Whether session cookies carry the `Secure` flag.
    pub fn cookie_secure(&self) -> bool {
        self.cookie_secure.unwrap_or(true)
    }

    /// Session key path, falling back to the mounted secret.
    pub fn session_key_file(&self) -> &Path {
        self.session_key_file
            .as_deref()
            .unwrap_or_else(|| Path::new(DEFAULT_SESSION_KEY_FILE))
    }

    /// Whether a generated session key may stand in for a missing key file.
    pub fn allows_ephemeral_key(&self) -> bool {
        cfg!(debug_assertions) || self.session_allow_ephemeral
    }
}
