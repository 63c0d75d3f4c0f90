//! Player statistics rows.

use std::cmp::Ordering;

use mock_catalog::{PlayerSeed, RankSeed};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::CatalogRow;

/// Competitive rank, ordered from lowest to highest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum Rank {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Rank {
    /// Display label, e.g. `"Gold"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
        }
    }
}

impl From<RankSeed> for Rank {
    fn from(value: RankSeed) -> Self {
        match value {
            RankSeed::Bronze => Self::Bronze,
            RankSeed::Silver => Self::Silver,
            RankSeed::Gold => Self::Gold,
            RankSeed::Platinum => Self::Platinum,
        }
    }
}

/// A row of the player statistics table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[schema(example = "Alice")]
    name: String,
    #[schema(example = 150)]
    games_played: u32,
    #[schema(example = 70)]
    wins: u32,
    #[schema(example = 80)]
    losses: u32,
    rank: Rank,
    /// May go negative: the shop has no balance floor.
    #[schema(example = 1000)]
    balance: i64,
}

impl Player {
    /// Player row with the given statistics and starting balance.
    pub fn new(
        name: impl Into<String>,
        games_played: u32,
        wins: u32,
        losses: u32,
        rank: Rank,
        balance: i64,
    ) -> Self {
        Self {
            name: name.into(),
            games_played,
            wins,
            losses,
            rank,
            balance,
        }
    }

    /// Unique player name, matched against the signed-in username.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Games played in total.
    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    /// Games won.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Games lost.
    pub fn losses(&self) -> u32 {
        self.losses
    }

    /// Competitive rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Current balance in currency units.
    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub(super) fn debit(&mut self, amount: u32) {
        self.balance -= i64::from(amount);
    }
}

impl From<&PlayerSeed> for Player {
    fn from(seed: &PlayerSeed) -> Self {
        Self::new(
            seed.name.clone(),
            seed.games_played,
            seed.wins,
            seed.losses,
            seed.rank.into(),
            seed.balance,
        )
    }
}

/// Sortable columns of [`Player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum PlayerColumn {
    Name,
    GamesPlayed,
    Wins,
    Losses,
    Rank,
    Balance,
}

impl CatalogRow for Player {
    type Column = PlayerColumn;

    fn key(&self) -> &str {
        &self.name
    }

    fn compare_by(&self, other: &Self, column: PlayerColumn) -> Ordering {
        match column {
            PlayerColumn::Name => self.name.cmp(&other.name),
            PlayerColumn::GamesPlayed => self.games_played.cmp(&other.games_played),
            PlayerColumn::Wins => self.wins.cmp(&other.wins),
            PlayerColumn::Losses => self.losses.cmp(&other.losses),
            PlayerColumn::Rank => self.rank.cmp(&other.rank),
            PlayerColumn::Balance => self.balance.cmp(&other.balance),
        }
    }
}
