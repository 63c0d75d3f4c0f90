//! Game library rows.

use std::cmp::Ordering;

use mock_catalog::{GameSeed, GameStatusSeed};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::CatalogRow;

/// Whether a game can currently be launched.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum GameStatus {
    Available,
    Maintenance,
}

impl GameStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Maintenance => "Maintenance",
        }
    }
}

impl From<GameStatusSeed> for GameStatus {
    fn from(value: GameStatusSeed) -> Self {
        match value {
            GameStatusSeed::Available => Self::Available,
            GameStatusSeed::Maintenance => Self::Maintenance,
        }
    }
}

/// A row of the game library.
///
/// `players_online` is drawn once when the catalog is seeded and does not
/// change for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    #[schema(example = "BattleZone")]
    name: String,
    #[schema(example = 42)]
    players_online: u32,
    status: GameStatus,
}

impl Game {
    /// Game row with a fixed player count.
    pub fn new(name: impl Into<String>, players_online: u32, status: GameStatus) -> Self {
        Self {
            name: name.into(),
            players_online,
            status,
        }
    }

    /// Unique game name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Players online, fixed at seeding.
    pub fn players_online(&self) -> u32 {
        self.players_online
    }

    /// Current availability.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether "Play" launches the game.
    pub fn is_available(&self) -> bool {
        self.status == GameStatus::Available
    }
}

impl From<&GameSeed> for Game {
    fn from(seed: &GameSeed) -> Self {
        Self::new(seed.name.clone(), seed.players_online, seed.status.into())
    }
}

/// Sortable columns of [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum GameColumn {
    Name,
    PlayersOnline,
    Status,
}

impl CatalogRow for Game {
    type Column = GameColumn;

    fn key(&self) -> &str {
        &self.name
    }

    fn compare_by(&self, other: &Self, column: GameColumn) -> Ordering {
        match column {
            GameColumn::Name => self.name.cmp(&other.name),
            GameColumn::PlayersOnline => self.players_online.cmp(&other.players_online),
            GameColumn::Status => self.status.cmp(&other.status),
        }
    }
}
