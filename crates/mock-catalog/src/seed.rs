//! Catalog row types shared by the registry and the generator.
//!
//! These types mirror the backend's catalog records without depending on
//! them. The backend converts them into domain types when it builds its
//! in-memory tables.

use serde::{Deserialize, Serialize};

/// Competitive rank of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankSeed {
    /// Entry tier.
    Bronze,
    /// Second tier.
    Silver,
    /// Third tier.
    Gold,
    /// Top tier.
    Platinum,
}

/// Availability of a game in the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatusSeed {
    /// The game can be launched.
    Available,
    /// The game is down for maintenance.
    Maintenance,
}

/// A seeded login account with its plaintext password.
///
/// The backend hashes the password when it loads the account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSeed {
    /// Login name.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

/// A player statistics row.
///
/// `games_played` is hand-authored and is not required to equal
/// `wins + losses`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSeed {
    /// Unique player name.
    pub name: String,
    /// Number of games played.
    pub games_played: u32,
    /// Number of games won.
    pub wins: u32,
    /// Number of games lost.
    pub losses: u32,
    /// Competitive rank.
    pub rank: RankSeed,
    /// Wallet balance in currency units.
    pub balance: i64,
}

/// A game as declared in the registry, before `players_online` is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDefinition {
    /// Unique game name.
    pub name: String,
    /// Availability status.
    pub status: GameStatusSeed,
}

/// A generated game row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSeed {
    /// Unique game name.
    pub name: String,
    /// Players online, drawn once from the registry range.
    pub players_online: u32,
    /// Availability status.
    pub status: GameStatusSeed,
}

/// A shop item row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopItemSeed {
    /// Unique item name.
    pub name: String,
    /// Price in currency units.
    pub price: u32,
}

/// Every table produced for one process start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSeed {
    /// Accounts to load into the credential store.
    pub accounts: Vec<AccountSeed>,
    /// Player statistics rows.
    pub players: Vec<PlayerSeed>,
    /// Game rows with their frozen online counts.
    pub games: Vec<GameSeed>,
    /// Shop item rows.
    pub shop_items: Vec<ShopItemSeed>,
}
