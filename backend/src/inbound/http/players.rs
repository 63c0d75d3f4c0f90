//! Player dashboard handlers.
//!
//! ```text
//! GET /api/v1/players?rank=Gold&sort=wins&descending=true
//! GET /api/v1/players/{name}
//! ```

use actix_web::{get, web};
use serde::Deserialize;

use super::ApiResult;
use super::session::SessionContext;
use super::state::HttpState;
use super::validation::{FieldName, parse_enum, parse_sort};
use super::views::render;
use crate::domain::Error;
use crate::domain::views::{PlayerDashboardRequest, ViewRequest, ViewResponse};

/// Query parameters shared by both player endpoints.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayersQuery {
    pub rank: Option<String>,
    pub sort: Option<String>,
    pub descending: Option<bool>,
}

impl PlayersQuery {
    fn into_request(self, selected: Option<String>) -> Result<PlayerDashboardRequest, Error> {
        Ok(PlayerDashboardRequest {
            selected,
            rank: parse_enum(FieldName::new("rank"), self.rank.as_deref())?,
            sort: parse_sort(self.sort.as_deref(), self.descending)?,
        })
    }
}

/// List player statistics with the first player selected.
#[utoipa::path(
    get,
    path = "/api/v1/players",
    params(
        ("rank" = Option<String>, Query, description = "`Bronze`, `Silver`, `Gold` or `Platinum`"),
        ("sort" = Option<String>, Query, description = "`name`, `gamesPlayed`, `wins`, `losses`, `rank` or `balance`"),
        ("descending" = Option<bool>, Query, description = "Sort largest first")
    ),
    responses(
        (status = 200, description = "Player dashboard view", body = ViewResponse),
        (status = 400, description = "Invalid query", body = Error)
    ),
    tags = ["players"],
    operation_id = "listPlayers"
)]
#[get("/players")]
pub async fn list_players(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<PlayersQuery>,
) -> ApiResult<web::Json<ViewResponse>> {
    let request = query.into_inner().into_request(None)?;
    render(&state, &session, ViewRequest::PlayerDashboard(request)).await
}

/// Player dashboard with the named player selected.
#[utoipa::path(
    get,
    path = "/api/v1/players/{name}",
    params(
        ("name" = String, Path, description = "Player name"),
        ("rank" = Option<String>, Query, description = "Rank filter for the listing"),
        ("sort" = Option<String>, Query, description = "Sort column for the listing"),
        ("descending" = Option<bool>, Query, description = "Sort largest first")
    ),
    responses(
        (status = 200, description = "Player dashboard view", body = ViewResponse),
        (status = 400, description = "Invalid query", body = Error),
        (status = 404, description = "Unknown player", body = Error)
    ),
    tags = ["players"],
    operation_id = "showPlayer"
)]
#[get("/players/{name}")]
pub async fn show_player(
    state: web::Data<HttpState>,
    session: SessionContext,
    name: web::Path<String>,
    query: web::Query<PlayersQuery>,
) -> ApiResult<web::Json<ViewResponse>> {
    let request = query.into_inner().into_request(Some(name.into_inner()))?;
    render(&state, &session, ViewRequest::PlayerDashboard(request)).await
}
