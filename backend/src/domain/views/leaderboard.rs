//! Wins leaderboard.

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::catalog::{Catalog, Player, PlayerColumn};

/// A player and their 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    #[schema(example = 1)]
    position: usize,
    player: Player,
}

impl LeaderboardEntry {
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn player(&self) -> &Player {
        &self.player
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardView {
    title: &'static str,
    subtitle: &'static str,
    entries: Vec<LeaderboardEntry>,
}

impl LeaderboardView {
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }
}

/// Players ordered by wins, most first. Ties keep table order.
pub fn rank_by_wins(players: &Catalog<Player>) -> Vec<LeaderboardEntry> {
    players
        .sort(PlayerColumn::Wins, true)
        .into_iter()
        .enumerate()
        .map(|(index, player)| LeaderboardEntry {
            position: index + 1,
            player,
        })
        .collect()
}

pub(super) fn render(players: &Catalog<Player>) -> LeaderboardView {
    LeaderboardView {
        title: "Leaderboards",
        subtitle: "Top players on the platform",
        entries: rank_by_wins(players),
    }
}
