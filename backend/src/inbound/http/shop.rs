//! In-game shop handlers.
//!
//! ```text
//! GET  /api/v1/shop?maxPrice=1500&sort=price
//! POST /api/v1/shop/{item}/purchase
//! ```

use actix_web::{get, post, web};
use serde::Deserialize;

use super::ApiResult;
use super::session::SessionContext;
use super::state::HttpState;
use super::validation::parse_sort;
use super::views::render;
use crate::domain::Error;
use crate::domain::views::{ShopRequest, ViewRequest, ViewResponse};

/// Query parameters for `GET /api/v1/shop`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopQuery {
    pub selected: Option<String>,
    pub max_price: Option<u32>,
    pub sort: Option<String>,
    pub descending: Option<bool>,
}

/// List the shop, plus the caller's balance when they have a player row.
#[utoipa::path(
    get,
    path = "/api/v1/shop",
    params(
        ("selected" = Option<String>, Query, description = "Item to select; defaults to the first"),
        ("maxPrice" = Option<u32>, Query, description = "Only list items at or below this price"),
        ("sort" = Option<String>, Query, description = "`name` or `price`"),
        ("descending" = Option<bool>, Query, description = "Sort largest first")
    ),
    responses(
        (status = 200, description = "Shop view", body = ViewResponse),
        (status = 400, description = "Invalid query", body = Error),
        (status = 404, description = "Unknown item", body = Error)
    ),
    tags = ["shop"],
    operation_id = "listShop"
)]
#[get("/shop")]
pub async fn list_shop(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<ShopQuery>,
) -> ApiResult<web::Json<ViewResponse>> {
    let query = query.into_inner();
    let request = ShopRequest {
        sort: parse_sort(query.sort.as_deref(), query.descending)?,
        selected: query.selected,
        buy: false,
        max_price: query.max_price,
    };
    render(&state, &session, ViewRequest::Shop(request)).await
}

/// Buy an item for the signed-in user.
///
/// Debits the player row whose name equals the session username. There is
/// no balance check. When no row matches, nothing changes and the response
/// is a 404 with `details.code = "no_matching_player"`.
#[utoipa::path(
    post,
    path = "/api/v1/shop/{item}/purchase",
    params(("item" = String, Path, description = "Shop item name")),
    responses(
        (status = 200, description = "Shop view with the purchase receipt", body = ViewResponse),
        (status = 404, description = "Unknown item or no matching player", body = Error)
    ),
    tags = ["shop"],
    operation_id = "purchaseItem"
)]
#[post("/shop/{item}/purchase")]
pub async fn purchase_item(
    state: web::Data<HttpState>,
    session: SessionContext,
    item: web::Path<String>,
) -> ApiResult<web::Json<ViewResponse>> {
    let request = ShopRequest {
        selected: Some(item.into_inner()),
        buy: true,
        ..ShopRequest::default()
    };
    render(&state, &session, ViewRequest::Shop(request)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::auth::signup;
    use crate::inbound::http::test_utils::{
        seeded_state, signed_up_cookie, test_session_middleware,
    };
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use serde_json::Value;

    fn test_app() -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(seeded_state())
            .wrap(test_session_middleware())
            .service(
                web::scope("/api/v1")
                    .service(signup)
                    .service(list_shop)
                    .service(purchase_item),
            )
    }

    #[actix_web::test]
    async fn purchase_debits_the_signed_in_player() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = signed_up_cookie(&app, "Alice").await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/shop/Magic%20Wand/purchase")
                .cookie(cookie.clone())
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["purchase"]["remainingBalance"], 3000);
        assert_eq!(
            body["notice"]["message"],
            "Magic Wand purchased successfully! 2000 deducted from your balance."
        );

        let listing = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/shop")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        let body: Value = actix_test::read_body_json(listing).await;
        assert_eq!(body["balance"], 3000);
    }

    #[actix_web::test]
    async fn anonymous_purchase_is_not_found() {
        let app = actix_test::init_service(test_app()).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/shop/Sword/purchase")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["details"]["code"], "no_matching_player");
    }

    #[actix_web::test]
    async fn unknown_item_is_not_found() {
        let app = actix_test::init_service(test_app()).await;
        let cookie = signed_up_cookie(&app, "Bob").await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/v1/shop/Lightsaber/purchase")
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["details"]["code"], "unknown_item");
    }

    #[actix_web::test]
    async fn listing_filters_by_price() {
        let app = actix_test::init_service(test_app()).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/v1/shop?maxPrice=1200&sort=price")
                .to_request(),
        )
        .await;
        let body: Value = actix_test::read_body_json(response).await;
        let prices: Vec<u64> = body["items"]
            .as_array()
            .expect("items")
            .iter()
            .filter_map(|item| item["price"].as_u64())
            .collect();
        assert_eq!(prices, [500, 800, 1000, 1200]);
        assert!(body["balance"].is_null());
    }
}
