//! Catalog registry types and JSON parsing.
//!
//! The registry holds the fixed rows of every catalog table plus the range
//! that `players_online` is drawn from. A copy is compiled into the crate so
//! the backend can start without any files on disk.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::RegistryError;
use crate::seed::{AccountSeed, GameDefinition, PlayerSeed, ShopItemSeed};

/// Current supported registry version.
const SUPPORTED_VERSION: u32 = 1;

/// Registry bundled with the crate.
const BUILTIN_REGISTRY: &str = include_str!("../fixtures/catalog.json");

/// Inclusive bounds for the generated `players_online` figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PlayersOnlineRange {
    min: u32,
    max: u32,
}

impl PlayersOnlineRange {
    /// Lower bound, inclusive.
    #[must_use]
    pub const fn min(&self) -> u32 {
        self.min
    }

    /// Upper bound, inclusive.
    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }
}

/// A validated catalog registry.
///
/// ## Invariants
/// - `players`, `games` and `shop_items` are non-empty.
/// - Keys (account usernames, player, game and item names) are non-blank and
///   unique within their table.
/// - `players_online.min() <= players_online.max()`.
///
/// # Example
///
/// ```
/// use mock_catalog::CatalogRegistry;
///
/// let json = r#"{
///     "version": 1,
///     "playersOnline": {"min": 10, "max": 100},
///     "accounts": [],
///     "players": [{"name": "Alice", "gamesPlayed": 1, "wins": 1, "losses": 0, "rank": "gold", "balance": 10}],
///     "games": [{"name": "BattleZone", "status": "available"}],
///     "shopItems": [{"name": "Sword", "price": 1000}]
/// }"#;
///
/// let registry = CatalogRegistry::from_json(json).expect("valid registry");
/// assert_eq!(registry.games().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRegistry {
    version: u32,
    players_online: PlayersOnlineRange,
    accounts: Vec<AccountSeed>,
    players: Vec<PlayerSeed>,
    games: Vec<GameDefinition>,
    shop_items: Vec<ShopItemSeed>,
}

impl CatalogRegistry {
    /// Parses the registry compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the bundled fixture fails validation.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_json(BUILTIN_REGISTRY)
    }

    /// Parses a registry from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if:
    /// - The JSON is malformed or a required field is missing
    /// - The version is unsupported
    /// - A required table is empty
    /// - A key is blank or duplicated
    /// - The `playersOnline` bounds are inverted
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawCatalogRegistry =
            serde_json::from_str(json).map_err(|e| RegistryError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a registry from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let contents = fs::read_to_string(path).map_err(|e| RegistryError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawCatalogRegistry) -> Result<Self, RegistryError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        let range = raw.players_online;
        if range.min > range.max {
            return Err(RegistryError::InvalidPlayersOnlineRange {
                min: range.min,
                max: range.max,
            });
        }

        ensure_unique_keys("accounts", raw.accounts.iter().map(|a| a.username.as_str()))?;
        ensure_populated_table("players", raw.players.iter().map(|p| p.name.as_str()))?;
        ensure_populated_table("games", raw.games.iter().map(|g| g.name.as_str()))?;
        ensure_populated_table("shopItems", raw.shop_items.iter().map(|i| i.name.as_str()))?;

        Ok(Self {
            version: raw.version,
            players_online: range,
            accounts: raw.accounts,
            players: raw.players,
            games: raw.games,
            shop_items: raw.shop_items,
        })
    }

    /// Returns the registry version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the bounds used for `players_online`.
    #[must_use]
    pub const fn players_online(&self) -> PlayersOnlineRange {
        self.players_online
    }

    /// Returns the seeded login accounts.
    #[must_use]
    pub fn accounts(&self) -> &[AccountSeed] {
        &self.accounts
    }

    /// Returns the player rows.
    #[must_use]
    pub fn players(&self) -> &[PlayerSeed] {
        &self.players
    }

    /// Returns the game definitions.
    #[must_use]
    pub fn games(&self) -> &[GameDefinition] {
        &self.games
    }

    /// Returns the shop item rows.
    #[must_use]
    pub fn shop_items(&self) -> &[ShopItemSeed] {
        &self.shop_items
    }
}

fn ensure_populated_table<'a>(
    table: &str,
    keys: impl ExactSizeIterator<Item = &'a str>,
) -> Result<(), RegistryError> {
    if keys.len() == 0 {
        return Err(RegistryError::EmptyTable {
            table: table.to_owned(),
        });
    }
    ensure_unique_keys(table, keys)
}

fn ensure_unique_keys<'a>(
    table: &str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), RegistryError> {
    let mut seen = HashSet::new();
    for (index, key) in keys.enumerate() {
        if key.trim().is_empty() {
            return Err(RegistryError::BlankKey {
                table: table.to_owned(),
                index,
            });
        }
        if !seen.insert(key) {
            return Err(RegistryError::DuplicateKey {
                table: table.to_owned(),
                key: key.to_owned(),
            });
        }
    }
    Ok(())
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCatalogRegistry {
    version: u32,
    players_online: PlayersOnlineRange,
    #[serde(default)]
    accounts: Vec<AccountSeed>,
    players: Vec<PlayerSeed>,
    games: Vec<GameDefinition>,
    shop_items: Vec<ShopItemSeed>,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::seed::GameStatusSeed;

    fn registry_json(players_online: &str, games: &str) -> String {
        format!(
            r#"{{
                "version": 1,
                "playersOnline": {players_online},
                "players": [{{"name": "Alice", "gamesPlayed": 1, "wins": 1, "losses": 0, "rank": "gold", "balance": 10}}],
                "games": {games},
                "shopItems": [{{"name": "Sword", "price": 1000}}]
            }}"#
        )
    }

    #[test]
    fn builtin_registry_is_valid() {
        let registry = CatalogRegistry::builtin().expect("bundled registry");

        assert_eq!(registry.version(), 1);
        assert_eq!(registry.accounts().len(), 3);
        assert_eq!(registry.players().len(), 10);
        assert_eq!(registry.games().len(), 8);
        assert_eq!(registry.shop_items().len(), 8);
        assert_eq!(registry.players_online().min(), 10);
        assert_eq!(registry.players_online().max(), 100);
    }

    #[test]
    fn builtin_registry_marks_pixel_warriors_for_maintenance() {
        let registry = CatalogRegistry::builtin().expect("bundled registry");
        let game = registry
            .games()
            .iter()
            .find(|g| g.name == "PixelWarriors")
            .expect("game present");

        assert_eq!(game.status, GameStatusSeed::Maintenance);
    }

    #[test]
    fn accounts_default_to_empty() {
        let json = registry_json(
            r#"{"min": 1, "max": 1}"#,
            r#"[{"name": "BattleZone", "status": "available"}]"#,
        );
        let registry = CatalogRegistry::from_json(&json).expect("valid registry");

        assert!(registry.accounts().is_empty());
    }

    #[rstest]
    #[case::inverted_range(
        registry_json(r#"{"min": 50, "max": 10}"#, r#"[{"name": "A", "status": "available"}]"#),
        RegistryError::InvalidPlayersOnlineRange { min: 50, max: 10 }
    )]
    #[case::empty_games(
        registry_json(r#"{"min": 10, "max": 100}"#, "[]"),
        RegistryError::EmptyTable { table: "games".to_owned() }
    )]
    #[case::duplicate_game(
        registry_json(
            r#"{"min": 10, "max": 100}"#,
            r#"[{"name": "A", "status": "available"}, {"name": "A", "status": "maintenance"}]"#
        ),
        RegistryError::DuplicateKey { table: "games".to_owned(), key: "A".to_owned() }
    )]
    #[case::blank_game(
        registry_json(r#"{"min": 10, "max": 100}"#, r#"[{"name": "  ", "status": "available"}]"#),
        RegistryError::BlankKey { table: "games".to_owned(), index: 0 }
    )]
    fn rejects_invalid_registry(#[case] json: String, #[case] expected: RegistryError) {
        assert_eq!(CatalogRegistry::from_json(&json), Err(expected));
    }

    #[rstest]
    #[case::malformed_json("not valid json")]
    #[case::unknown_status(
        r#"{"version": 1, "playersOnline": {"min": 1, "max": 2}, "players": [], "games": [{"name": "A", "status": "closed"}], "shopItems": []}"#
    )]
    fn rejects_json_with_parse_error(#[case] json: &str) {
        let result = CatalogRegistry::from_json(json);
        assert!(matches!(result, Err(RegistryError::ParseError { .. })));
    }
}
