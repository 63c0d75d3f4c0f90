//! Player statistics listing.

use serde::Serialize;
use utoipa::ToSchema;

use super::ViewError;
use crate::domain::catalog::{Catalog, Player, PlayerColumn, Rank, SortSpec, sort_rows};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerDashboardRequest {
    /// Player whose stats are shown. Defaults to the first player.
    pub selected: Option<String>,
    pub rank: Option<Rank>,
    pub sort: Option<SortSpec<PlayerColumn>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDashboardView {
    title: &'static str,
    subtitle: &'static str,
    players: Vec<Player>,
    selected: Option<Player>,
}

impl PlayerDashboardView {
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn selected(&self) -> Option<&Player> {
        self.selected.as_ref()
    }
}

pub(super) fn render(
    players: &Catalog<Player>,
    request: PlayerDashboardRequest,
) -> Result<PlayerDashboardView, ViewError> {
    let selected = match request.selected.as_deref() {
        Some(name) => Some(players.find_by_key(name).ok_or_else(|| {
            ViewError::UnknownPlayer {
                name: name.to_owned(),
            }
        })?),
        None => players.first(),
    };

    let mut listing = players.filter(|player| request.rank.is_none_or(|r| player.rank() == r));
    if let Some(sort) = request.sort {
        sort_rows(&mut listing, sort.column, sort.descending);
    }

    Ok(PlayerDashboardView {
        title: "Player Dashboard",
        subtitle: "View your game stats and performance",
        players: listing,
        selected: selected.cloned(),
    })
}
