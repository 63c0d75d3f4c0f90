//! Game library handlers.
//!
//! ```text
//! GET  /api/v1/games?status=Available&sort=playersOnline&descending=true
//! POST /api/v1/games/{name}/play
//! ```

use actix_web::{get, post, web};
use serde::Deserialize;

use super::ApiResult;
use super::session::SessionContext;
use super::state::HttpState;
use super::validation::{FieldName, parse_enum, parse_sort};
use super::views::render;
use crate::domain::Error;
use crate::domain::views::{GameLibraryRequest, ViewRequest, ViewResponse};

/// Query parameters for `GET /api/v1/games`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamesQuery {
    pub selected: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub descending: Option<bool>,
}

/// List the game library.
///
/// Selecting a game under maintenance attaches a warning notice straight
/// away.
#[utoipa::path(
    get,
    path = "/api/v1/games",
    params(
        ("selected" = Option<String>, Query, description = "Game to select; defaults to the first"),
        ("status" = Option<String>, Query, description = "`Available` or `Maintenance`"),
        ("sort" = Option<String>, Query, description = "`name`, `playersOnline` or `status`"),
        ("descending" = Option<bool>, Query, description = "Sort largest first")
    ),
    responses(
        (status = 200, description = "Game library view", body = ViewResponse),
        (status = 400, description = "Invalid query", body = Error),
        (status = 404, description = "Unknown game", body = Error)
    ),
    tags = ["games"],
    operation_id = "listGames"
)]
#[get("/games")]
pub async fn list_games(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<GamesQuery>,
) -> ApiResult<web::Json<ViewResponse>> {
    let query = query.into_inner();
    let request = GameLibraryRequest {
        status: parse_enum(FieldName::new("status"), query.status.as_deref())?,
        sort: parse_sort(query.sort.as_deref(), query.descending)?,
        selected: query.selected,
        play: false,
    };
    render(&state, &session, ViewRequest::GameLibrary(request)).await
}

/// Press "Play" on a game.
///
/// Succeeds with a `success` notice for available games and a `warning`
/// notice for games under maintenance. No game session is started.
#[utoipa::path(
    post,
    path = "/api/v1/games/{name}/play",
    params(("name" = String, Path, description = "Game name")),
    responses(
        (status = 200, description = "Game library view with a play notice", body = ViewResponse),
        (status = 404, description = "Unknown game", body = Error)
    ),
    tags = ["games"],
    operation_id = "playGame"
)]
#[post("/games/{name}/play")]
pub async fn play_game(
    state: web::Data<HttpState>,
    session: SessionContext,
    name: web::Path<String>,
) -> ApiResult<web::Json<ViewResponse>> {
    let request = GameLibraryRequest {
        selected: Some(name.into_inner()),
        play: true,
        ..GameLibraryRequest::default()
    };
    render(&state, &session, ViewRequest::GameLibrary(request)).await
}
