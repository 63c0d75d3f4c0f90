//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Provides a thin wrapper around Actix sessions so handlers only deal with
//! [`SessionState`]: the cookie carries the signed-in username and nothing
//! else.

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;

use crate::domain::{Error, SessionState};

pub(crate) const USERNAME_KEY: &str = "username";

/// Newtype wrapper that exposes higher-level session operations.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    /// Construct a new wrapper from the underlying Actix session.
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Rebuild the caller's [`SessionState`] from the cookie.
    pub fn state(&self) -> Result<SessionState, Error> {
        let username = self
            .0
            .get::<String>(USERNAME_KEY)
            .map_err(|error| Error::internal(format!("failed to read session: {error}")))?;
        Ok(match username {
            Some(name) if !name.trim().is_empty() => SessionState::authenticated_as(name),
            Some(_) => {
                tracing::warn!("blank username in session cookie");
                SessionState::anonymous()
            }
            None => SessionState::anonymous(),
        })
    }

    /// Write `state` back to the cookie.
    ///
    /// An anonymous state purges the session so the browser drops the
    /// cookie.
    pub fn persist(&self, state: &SessionState) -> Result<(), Error> {
        match state.current_user() {
            Some(username) => {
                self.0.renew();
                self.0
                    .insert(USERNAME_KEY, username)
                    .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
            }
            None => {
                self.0.purge();
                Ok(())
            }
        }
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
