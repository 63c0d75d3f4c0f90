//! Navigation views and the router that dispatches to them.
//!
//! Every view is reachable from every other view. A [`ViewRequest`] names
//! the view plus any action the user took on it (selecting a row, pressing
//! "Play", buying an item, submitting the support form). [`dispatch`] runs
//! the matching handler against the catalogs and the caller's session.

mod game_library;
mod home;
mod leaderboard;
mod player_dashboard;
mod shop;
mod support;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use super::SessionState;
use super::catalog::{Catalogs, PurchaseError};

pub use game_library::{GameLibraryRequest, GameLibraryView, PlayOutcome, play_game};
pub use home::HomeView;
pub use leaderboard::{LeaderboardEntry, LeaderboardView, rank_by_wins};
pub use player_dashboard::{PlayerDashboardRequest, PlayerDashboardView};
pub use shop::{ShopRequest, ShopView};
pub use support::{SupportForm, SupportRequest, SupportView};

/// One of the six navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    GameLibrary,
    PlayerDashboard,
    Shop,
    Leaderboard,
    Support,
}

impl View {
    /// Navigation order.
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::GameLibrary,
        Self::PlayerDashboard,
        Self::Shop,
        Self::Leaderboard,
        Self::Support,
    ];

    /// Navigation label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::GameLibrary => "Game Library",
            Self::PlayerDashboard => "Player Dashboard",
            Self::Shop => "In-Game Shop",
            Self::Leaderboard => "Leaderboards",
            Self::Support => "Support",
        }
    }

    /// URL-safe identifier.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::GameLibrary => "game-library",
            Self::PlayerDashboard => "player-dashboard",
            Self::Shop => "shop",
            Self::Leaderboard => "leaderboard",
            Self::Support => "support",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when a string names no view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown view '{value}'")]
pub struct ViewParseError {
    value: String,
}

impl FromStr for View {
    type Err = ViewParseError;

    /// Accepts either the label or the slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|view| view.label() == s || view.slug() == s)
            .ok_or_else(|| ViewParseError {
                value: s.to_owned(),
            })
    }
}

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum NoticeLevel {
    Success,
    Warning,
}

/// User-facing message attached to a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    level: NoticeLevel,
    #[schema(example = "Launching BattleZone...")]
    message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn level(&self) -> NoticeLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A view plus the action taken on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewRequest {
    Home,
    GameLibrary(GameLibraryRequest),
    PlayerDashboard(PlayerDashboardRequest),
    Shop(ShopRequest),
    Leaderboard,
    Support(SupportRequest),
}

impl ViewRequest {
    /// Plain navigation to `view` with no action.
    pub fn navigate(view: View) -> Self {
        match view {
            View::Home => Self::Home,
            View::GameLibrary => Self::GameLibrary(GameLibraryRequest::default()),
            View::PlayerDashboard => Self::PlayerDashboard(PlayerDashboardRequest::default()),
            View::Shop => Self::Shop(ShopRequest::default()),
            View::Leaderboard => Self::Leaderboard,
            View::Support => Self::Support(SupportRequest::default()),
        }
    }

    /// Target view.
    pub fn view(&self) -> View {
        match self {
            Self::Home => View::Home,
            Self::GameLibrary(_) => View::GameLibrary,
            Self::PlayerDashboard(_) => View::PlayerDashboard,
            Self::Shop(_) => View::Shop,
            Self::Leaderboard => View::Leaderboard,
            Self::Support(_) => View::Support,
        }
    }
}

/// Rendered payload of a view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum ViewResponse {
    Home(HomeView),
    GameLibrary(GameLibraryView),
    PlayerDashboard(PlayerDashboardView),
    Shop(ShopView),
    Leaderboard(LeaderboardView),
    Support(SupportView),
}

impl ViewResponse {
    pub fn view(&self) -> View {
        match self {
            Self::Home(_) => View::Home,
            Self::GameLibrary(_) => View::GameLibrary,
            Self::PlayerDashboard(_) => View::PlayerDashboard,
            Self::Shop(_) => View::Shop,
            Self::Leaderboard(_) => View::Leaderboard,
            Self::Support(_) => View::Support,
        }
    }
}

/// Failures a view handler reports to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("unknown game '{name}'")]
    UnknownGame { name: String },
    #[error("unknown player '{name}'")]
    UnknownPlayer { name: String },
    #[error("unknown shop item '{name}'")]
    UnknownItem { name: String },
    #[error(transparent)]
    Purchase(#[from] PurchaseError),
}

/// Run the handler for `request`.
///
/// Only a shop purchase writes to `catalogs`; every other handler reads.
pub fn dispatch(
    request: ViewRequest,
    catalogs: &mut Catalogs,
    session: &SessionState,
) -> Result<ViewResponse, ViewError> {
    match request {
        ViewRequest::Home => Ok(ViewResponse::Home(home::render(session))),
        ViewRequest::GameLibrary(request) => {
            game_library::render(catalogs.games(), request).map(ViewResponse::GameLibrary)
        }
        ViewRequest::PlayerDashboard(request) => {
            player_dashboard::render(catalogs.players(), request).map(ViewResponse::PlayerDashboard)
        }
        ViewRequest::Shop(request) => {
            shop::render(catalogs, session, request).map(ViewResponse::Shop)
        }
        ViewRequest::Leaderboard => Ok(ViewResponse::Leaderboard(leaderboard::render(
            catalogs.players(),
        ))),
        ViewRequest::Support(request) => Ok(ViewResponse::Support(support::render(request))),
    }
}
