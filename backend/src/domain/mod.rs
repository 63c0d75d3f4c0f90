//! Domain primitives, services and ports.
//!
//! Purpose: hold the game hub's state and rules free of transport concerns.
//! The HTTP adapter talks to the domain only through the driving ports in
//! [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - CredentialStore / AccountService: login and signup.
//! - SessionState: per-session authentication flags.
//! - catalog: player, game and shop tables.
//! - views: the six navigation views and their router.
//! - GamingPlatform: the dashboard service over the shared catalogs.

mod accounts;
mod auth;
pub mod catalog;
mod credentials;
pub mod error;
mod platform;
pub mod ports;
mod session;
mod trace_id;
pub mod views;

pub use self::accounts::{AccountError, AccountService};
pub use self::auth::{LoginCredentials, LoginValidationError, SignupForm};
pub use self::credentials::{CredentialStore, PasswordDigest};
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::platform::GamingPlatform;
pub use self::session::SessionState;
pub use self::trace_id::TraceId;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use gamehub::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::unauthorized("login required"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
