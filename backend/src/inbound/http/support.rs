//! Support contact form handler.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ApiResult;
use super::session::SessionContext;
use super::state::HttpState;
use super::views::render;
use crate::domain::Error;
use crate::domain::views::{SupportForm, SupportRequest, ViewRequest, ViewResponse};

/// Body for `POST /api/v1/support`.
#[derive(Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupportSubmission {
    #[schema(example = "player@example.com")]
    pub email: String,
    #[schema(example = "The shop charged me twice.")]
    pub issue: String,
}

/// Submit the support form. Every submission is acknowledged and discarded.
#[utoipa::path(
    post,
    path = "/api/v1/support",
    request_body = SupportSubmission,
    responses(
        (status = 200, description = "Support view with the acknowledgement", body = ViewResponse),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["support"],
    operation_id = "submitSupport",
    security([])
)]
#[post("/support")]
pub async fn submit_support(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<SupportSubmission>,
) -> ApiResult<web::Json<ViewResponse>> {
    let SupportSubmission { email, issue } = payload.into_inner();
    let request = SupportRequest {
        submission: Some(SupportForm::new(email, issue)),
    };
    render(&state, &session, ViewRequest::Support(request)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{seeded_state, test_session_middleware};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use rstest::rstest;
    use serde_json::Value;

    async fn submit(email: &str, issue: &str) -> (StatusCode, Value) {
        let app = actix_test::init_service(
            App::new()
                .app_data(seeded_state())
                .wrap(test_session_middleware())
                .service(web::scope("/api/v1").service(submit_support)),
        )
        .await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/support")
                .set_json(&SupportSubmission {
                    email: email.into(),
                    issue: issue.into(),
                })
                .to_request(),
        )
        .await;
        let status = response.status();
        (status, actix_test::read_body_json(response).await)
    }

    #[rstest]
    #[case("player@example.com", "Lag in BattleZone")]
    #[case("me", "lag")]
    #[case("", "   ")]
    #[actix_web::test]
    async fn acknowledges_every_submission(#[case] email: &str, #[case] issue: &str) {
        let (status, body) = submit(email, issue).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["view"], "support");
        assert_eq!(
            body["acknowledgement"]["message"],
            "Thank you for reaching out! We'll get back to you soon."
        );
    }
}
