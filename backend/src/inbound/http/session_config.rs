//! Session cookie settings: signing key and `SameSite` policy.

use std::path::PathBuf;

use actix_web::cookie::{Key, SameSite};
use tracing::warn;
use zeroize::Zeroize;

use crate::settings::ServerSettings;

const SESSION_KEY_MIN_LEN: usize = 64;

/// Resolved cookie-session settings.
pub struct SessionSettings {
    /// Signing and encryption key for cookie sessions.
    pub key: Key,
    /// Whether session cookies are marked `Secure`.
    pub cookie_secure: bool,
    /// `SameSite` policy for session cookies.
    pub same_site: SameSite,
}

/// Errors raised while resolving session settings.
#[derive(thiserror::Error, Debug)]
pub enum SessionConfigError {
    /// The `SameSite` value is not one of `Strict`, `Lax` or `None`.
    #[error("invalid session SameSite value '{value}'; expected Strict|Lax|None")]
    InvalidSameSite { value: String },
    /// `SameSite=None` requires a secure cookie.
    #[error("SameSite=None requires secure session cookies")]
    InsecureSameSiteNone,
    /// Reading the session key file failed and no fallback is allowed.
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The key file is shorter than the key derivation needs.
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        path: PathBuf,
        length: usize,
        min_len: usize,
    },
}

/// Resolve the session settings from server configuration.
///
/// A missing key file falls back to a generated key only when
/// [`ServerSettings::allows_ephemeral_key`] holds.
pub fn session_settings(settings: &ServerSettings) -> Result<SessionSettings, SessionConfigError> {
    let cookie_secure = settings.cookie_secure();
    let same_site = parse_same_site(settings.session_same_site.as_deref(), cookie_secure)?;
    let key = load_key(settings)?;
    Ok(SessionSettings {
        key,
        cookie_secure,
        same_site,
    })
}

fn parse_same_site(value: Option<&str>, cookie_secure: bool) -> Result<SameSite, SessionConfigError> {
    let Some(value) = value else {
        return Ok(SameSite::Lax);
    };
    match value.to_ascii_lowercase().as_str() {
        "lax" => Ok(SameSite::Lax),
        "strict" => Ok(SameSite::Strict),
        "none" if cookie_secure => Ok(SameSite::None),
        "none" => Err(SessionConfigError::InsecureSameSiteNone),
        _ => Err(SessionConfigError::InvalidSameSite {
            value: value.to_owned(),
        }),
    }
}

fn load_key(settings: &ServerSettings) -> Result<Key, SessionConfigError> {
    let path = settings.session_key_file().to_path_buf();
    match std::fs::read(&path) {
        Ok(mut bytes) => {
            let length = bytes.len();
            if length < SESSION_KEY_MIN_LEN {
                bytes.zeroize();
                return Err(SessionConfigError::KeyTooShort {
                    path,
                    length,
                    min_len: SESSION_KEY_MIN_LEN,
                });
            }
            let key = Key::derive_from(&bytes);
            bytes.zeroize();
            Ok(key)
        }
        Err(source) if settings.allows_ephemeral_key() => {
            warn!(
                path = %path.display(),
                error = %source,
                "using temporary session key (dev only)"
            );
            Ok(Key::generate())
        }
        Err(source) => Err(SessionConfigError::KeyRead { path, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn settings(key_file: PathBuf, same_site: Option<&str>, cookie_secure: bool) -> ServerSettings {
        ServerSettings {
            bind_addr: None,
            cookie_secure: Some(cookie_secure),
            session_key_file: Some(key_file),
            session_same_site: same_site.map(str::to_owned),
            session_allow_ephemeral: true,
            catalog_seed: None,
            catalog_path: None,
        }
    }

    fn missing_key() -> PathBuf {
        PathBuf::from("/nonexistent/gamehub/session_key")
    }

    #[rstest]
    #[case(None, SameSite::Lax)]
    #[case(Some("Strict"), SameSite::Strict)]
    #[case(Some("lax"), SameSite::Lax)]
    #[case(Some("NONE"), SameSite::None)]
    fn same_site_values_are_parsed(#[case] value: Option<&str>, #[case] expected: SameSite) {
        let resolved = session_settings(&settings(missing_key(), value, true)).expect("settings");
        assert_eq!(resolved.same_site, expected);
        assert!(resolved.cookie_secure);
    }

    #[rstest]
    fn cookies_are_secure_when_unset() {
        let mut unset = settings(missing_key(), None, false);
        unset.cookie_secure = None;
        let resolved = session_settings(&unset).expect("settings");
        assert!(resolved.cookie_secure);
    }

    #[rstest]
    fn same_site_none_requires_secure_cookies() {
        let err = session_settings(&settings(missing_key(), Some("None"), false))
            .err()
            .expect("insecure None rejected");
        assert!(matches!(err, SessionConfigError::InsecureSameSiteNone));
    }

    #[rstest]
    fn unknown_same_site_is_rejected() {
        let err = session_settings(&settings(missing_key(), Some("sometimes"), true))
            .err()
            .expect("invalid value rejected");
        assert!(matches!(err, SessionConfigError::InvalidSameSite { value } if value == "sometimes"));
    }

    #[rstest]
    fn short_key_file_is_rejected() {
        let path = std::env::temp_dir().join(format!("gamehub-short-key-{}", std::process::id()));
        std::fs::write(&path, b"too short").expect("write key");
        let result = session_settings(&settings(path.clone(), None, true));
        std::fs::remove_file(&path).expect("remove key");
        assert!(matches!(
            result.err(),
            Some(SessionConfigError::KeyTooShort { length: 9, .. })
        ));
    }

    #[rstest]
    fn key_file_is_used_when_present() {
        let path = std::env::temp_dir().join(format!("gamehub-key-{}", std::process::id()));
        std::fs::write(&path, vec![b'k'; SESSION_KEY_MIN_LEN]).expect("write key");
        let first = session_settings(&settings(path.clone(), None, true)).expect("settings");
        let second = session_settings(&settings(path.clone(), None, true)).expect("settings");
        std::fs::remove_file(&path).expect("remove key");
        assert_eq!(first.key.master(), second.key.master());
    }
}
