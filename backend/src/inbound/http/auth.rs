//! Login, signup and logout handlers.
//!
//! ```text
//! POST /api/v1/login   {"username":"admin","password":"admin123"}
//! POST /api/v1/signup  {"username":"Alice","password":"pw1","confirmPassword":"pw1"}
//! POST /api/v1/logout
//! GET  /api/v1/session
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use super::ApiResult;
use super::session::SessionContext;
use super::state::HttpState;
use crate::domain::{Error, LoginCredentials, LoginValidationError, SessionState, SignupForm};

/// Login request body for `POST /api/v1/login`.
#[derive(Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[schema(example = "admin")]
    pub username: String,
    #[schema(example = "admin123")]
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password)
    }
}

/// Signup request body for `POST /api/v1/signup`.
#[derive(Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[schema(example = "Alice")]
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

impl TryFrom<SignupRequest> for SignupForm {
    type Error = LoginValidationError;

    fn try_from(value: SignupRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.username, &value.password, &value.confirm_password)
    }
}

/// Session state plus a message for the user.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub session: SessionState,
    #[schema(example = "Welcome back, admin!")]
    pub message: Option<String>,
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    match err {
        LoginValidationError::EmptyUsername => Error::invalid_request("username must not be empty")
            .with_details(json!({ "field": "username", "code": "empty_username" })),
        LoginValidationError::EmptyPassword => Error::invalid_request("password must not be empty")
            .with_details(json!({ "field": "password", "code": "empty_password" })),
    }
}

/// Authenticate a user and establish a session.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = SessionResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<SessionResponse>> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let username = state.login.authenticate(&credentials).await?;
    let message = format!("Welcome back, {username}!");
    let signed_in = SessionState::authenticated_as(username);
    session.persist(&signed_in)?;
    Ok(web::Json(SessionResponse {
        session: signed_in,
        message: Some(message),
    }))
}

/// Create an account and sign straight into it.
#[utoipa::path(
    post,
    path = "/api/v1/signup",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = SessionResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request or passwords differ", body = Error),
        (status = 409, description = "Username already exists", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "signup",
    security([])
)]
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<SignupRequest>,
) -> ApiResult<actix_web::HttpResponse> {
    let form = SignupForm::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let username = state.login.register(&form).await?;
    let message = format!("Account created successfully! Welcome, {username}!");
    let signed_in = SessionState::authenticated_as(username);
    session.persist(&signed_in)?;
    Ok(actix_web::HttpResponse::Created().json(SessionResponse {
        session: signed_in,
        message: Some(message),
    }))
}

/// End the session. Harmless when nobody is signed in.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses(
        (status = 200, description = "Signed out", body = SessionResponse),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "logout"
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> ApiResult<web::Json<SessionResponse>> {
    let mut current = session.state()?;
    let message = current
        .current_user()
        .map(|user| format!("Goodbye, {user}!"));
    current.logout();
    session.persist(&current)?;
    Ok(web::Json(SessionResponse {
        session: current,
        message,
    }))
}

/// Report who, if anyone, is signed in.
#[utoipa::path(
    get,
    path = "/api/v1/session",
    responses(
        (status = 200, description = "Current session", body = SessionResponse),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["auth"],
    operation_id = "currentSession"
)]
#[get("/session")]
pub async fn current_session(session: SessionContext) -> ApiResult<web::Json<SessionResponse>> {
    let state = session.state()?;
    let message = state
        .current_user()
        .map(|user| format!("You are logged in as {user}!"));
    Ok(web::Json(SessionResponse {
        session: state,
        message,
    }))
}
