//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every dashboard endpoint, the view and catalog
//! schemas and the session cookie security scheme. The document backs
//! Swagger UI in debug builds and `cargo run --bin openapi-dump`.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::catalog::{Game, GameStatus, Player, Purchase, Rank, ShopItem};
use crate::domain::views::{
    GameLibraryView, HomeView, LeaderboardEntry, LeaderboardView, Notice, NoticeLevel,
    PlayerDashboardView, ShopView, SupportView, ViewResponse,
};
use crate::domain::{Error, ErrorCode, SessionState};
use crate::inbound::http::auth::{LoginRequest, SessionResponse, SignupRequest};
use crate::inbound::http::support::SupportSubmission;
use crate::inbound::http::views::NavigationEntry;

/// Enrich the generated document with the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/login or /api/v1/signup.",
            ))),
        );
    }
}

/// OpenAPI document for the dashboard API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "GameHub dashboard API",
        description = "Session-authenticated access to the gaming dashboard views and shop.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::signup,
        crate::inbound::http::auth::logout,
        crate::inbound::http::auth::current_session,
        crate::inbound::http::views::list_views,
        crate::inbound::http::views::show_view,
        crate::inbound::http::games::list_games,
        crate::inbound::http::games::play_game,
        crate::inbound::http::players::list_players,
        crate::inbound::http::players::show_player,
        crate::inbound::http::shop::list_shop,
        crate::inbound::http::shop::purchase_item,
        crate::inbound::http::leaderboard::leaderboard,
        crate::inbound::http::support::submit_support,
    ),
    components(schemas(
        Error,
        ErrorCode,
        SessionState,
        LoginRequest,
        SignupRequest,
        SessionResponse,
        NavigationEntry,
        SupportSubmission,
        ViewResponse,
        HomeView,
        GameLibraryView,
        PlayerDashboardView,
        ShopView,
        LeaderboardView,
        LeaderboardEntry,
        SupportView,
        Notice,
        NoticeLevel,
        Game,
        GameStatus,
        Player,
        Rank,
        ShopItem,
        Purchase,
    )),
    tags(
        (name = "auth", description = "Login, signup and session state"),
        (name = "views", description = "Navigation and generic view rendering"),
        (name = "games", description = "Game library browsing and launching"),
        (name = "players", description = "Player dashboard"),
        (name = "shop", description = "Shop listing and purchases"),
        (name = "support", description = "Support requests")
    )
)]
pub struct ApiDoc;
