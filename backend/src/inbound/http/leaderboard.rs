//! Leaderboard handler.

use actix_web::{get, web};

use super::ApiResult;
use super::session::SessionContext;
use super::state::HttpState;
use super::views::render;
use crate::domain::views::{ViewRequest, ViewResponse};

/// Players ordered by wins, most first. Ties keep table order.
#[utoipa::path(
    get,
    path = "/api/v1/leaderboard",
    responses((status = 200, description = "Leaderboard view", body = ViewResponse)),
    tags = ["players"],
    operation_id = "leaderboard"
)]
#[get("/leaderboard")]
pub async fn leaderboard(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<ViewResponse>> {
    render(&state, &session, ViewRequest::Leaderboard).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{seeded_state, test_session_middleware};
    use actix_web::{App, test as actix_test};
    use serde_json::Value;

    #[actix_web::test]
    async fn ranks_players_by_wins() {
        let app = actix_test::init_service(
            App::new()
                .app_data(seeded_state())
                .wrap(test_session_middleware())
                .service(web::scope("/api/v1").service(leaderboard)),
        )
        .await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/leaderboard")
                .to_request(),
        )
        .await;
        let body: Value = actix_test::read_body_json(response).await;
        let top: Vec<(u64, &str)> = body["entries"]
            .as_array()
            .expect("entries")
            .iter()
            .take(3)
            .filter_map(|e| Some((e["position"].as_u64()?, e["player"]["name"].as_str()?)))
            .collect();
        assert_eq!(top, [(1, "Eve"), (2, "Frank"), (3, "Ivy")]);
    }
}
