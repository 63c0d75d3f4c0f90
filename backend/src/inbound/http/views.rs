//! Navigation handlers: the view list and plain navigation to any view.
//!
//! ```text
//! GET /api/v1/views
//! GET /api/v1/views/{label}
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use super::ApiResult;
use super::session::SessionContext;
use super::state::HttpState;
use crate::domain::Error;
use crate::domain::views::{View, ViewParseError, ViewRequest, ViewResponse};

/// One entry of the navigation menu.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEntry {
    #[schema(example = "In-Game Shop")]
    pub label: String,
    #[schema(example = "shop")]
    pub slug: String,
}

impl From<View> for NavigationEntry {
    fn from(view: View) -> Self {
        Self {
            label: view.label().to_owned(),
            slug: view.slug().to_owned(),
        }
    }
}

/// Run `request` for the caller's session through the dashboard port.
pub(super) async fn render(
    state: &HttpState,
    session: &SessionContext,
    request: ViewRequest,
) -> ApiResult<web::Json<ViewResponse>> {
    let current = session.state()?;
    let response = state.dashboard.render(&current, request).await?;
    Ok(web::Json(response))
}

/// List the navigation labels in menu order.
#[utoipa::path(
    get,
    path = "/api/v1/views",
    responses((status = 200, description = "Navigation entries", body = [NavigationEntry])),
    tags = ["views"],
    operation_id = "listViews",
    security([])
)]
#[get("/views")]
pub async fn list_views() -> web::Json<Vec<NavigationEntry>> {
    web::Json(View::ALL.into_iter().map(NavigationEntry::from).collect())
}

/// Navigate to a view by label or slug.
#[utoipa::path(
    get,
    path = "/api/v1/views/{label}",
    params(("label" = String, Path, description = "View label such as `Game Library`, or its slug")),
    responses(
        (status = 200, description = "Rendered view", body = ViewResponse),
        (status = 404, description = "Unknown view", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["views"],
    operation_id = "showView"
)]
#[get("/views/{label}")]
pub async fn show_view(
    state: web::Data<HttpState>,
    session: SessionContext,
    label: web::Path<String>,
) -> ApiResult<web::Json<ViewResponse>> {
    let label = label.into_inner();
    let view: View = label.parse().map_err(|err: ViewParseError| {
        Error::not_found(err.to_string())
            .with_details(json!({ "view": label, "code": "unknown_view" }))
    })?;
    render(&state, &session, ViewRequest::navigate(view)).await
}
