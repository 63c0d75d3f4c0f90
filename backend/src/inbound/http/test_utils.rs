//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_http::Request;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web};

use mock_catalog::CatalogRegistry;
use serde_json::json;

use super::state::HttpState;
use crate::domain::ports::{
    DashboardService, LoginService, MockDashboardService, MockLoginService,
};
use crate::startup::build_state;

/// Build a session middleware configured for tests.
///
/// - Generates a fresh signing/encryption key per invocation.
/// - Sets the cookie name to `session` and disables the `Secure` flag for
///   local HTTP tests.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Wrap port doubles as handler state.
pub fn state_with(
    login: MockLoginService,
    dashboard: MockDashboardService,
) -> web::Data<HttpState> {
    let login: Arc<dyn LoginService> = Arc::new(login);
    let dashboard: Arc<dyn DashboardService> = Arc::new(dashboard);
    web::Data::new(HttpState::new(login, dashboard))
}

/// The `session` cookie set on `response`, if any.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
}

/// Handler state backed by the real services over the bundled catalog.
pub fn seeded_state() -> web::Data<HttpState> {
    let registry = CatalogRegistry::builtin().expect("bundled registry");
    web::Data::new(build_state(&registry, 7).expect("bundled catalog builds"))
}

/// Sign up `username` through `POST /api/v1/signup` and return the cookie.
pub async fn signed_up_cookie<S, B>(app: &S, username: &str) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
{
    let request = test::TestRequest::post()
        .uri("/api/v1/signup")
        .set_json(json!({
            "username": username,
            "password": "pw1",
            "confirmPassword": "pw1",
        }))
        .to_request();
    let response = test::call_service(app, request).await;
    session_cookie(&response).expect("signup sets a session cookie")
}
