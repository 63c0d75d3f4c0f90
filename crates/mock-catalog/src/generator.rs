//! Deterministic catalog generation from a validated registry.
//!
//! Only `players_online` is random. The figure is drawn once per game from a
//! `ChaCha8Rng` seeded with the caller's value, so the same registry and seed
//! always produce an identical catalog.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::registry::{CatalogRegistry, PlayersOnlineRange};
use crate::seed::{CatalogSeed, GameDefinition, GameSeed};

/// Generates every catalog table for one process start.
///
/// Accounts, players and shop items are copied verbatim from the registry.
/// Each game receives a `players_online` value drawn uniformly from the
/// registry's inclusive range, in registry order.
///
/// # Example
///
/// ```
/// use mock_catalog::{CatalogRegistry, generate_catalog};
///
/// let registry = CatalogRegistry::builtin().expect("valid");
/// let catalog = generate_catalog(&registry, 7);
///
/// let range = registry.players_online();
/// assert!(catalog
///     .games
///     .iter()
///     .all(|g| (range.min()..=range.max()).contains(&g.players_online)));
/// ```
#[must_use]
pub fn generate_catalog(registry: &CatalogRegistry, seed: u64) -> CatalogSeed {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let range = registry.players_online();

    let games = registry
        .games()
        .iter()
        .map(|definition| generate_game(&mut rng, range, definition))
        .collect();

    CatalogSeed {
        accounts: registry.accounts().to_vec(),
        players: registry.players().to_vec(),
        games,
        shop_items: registry.shop_items().to_vec(),
    }
}

fn generate_game(
    rng: &mut ChaCha8Rng,
    range: PlayersOnlineRange,
    definition: &GameDefinition,
) -> GameSeed {
    GameSeed {
        name: definition.name.clone(),
        players_online: rng.random_range(range.min()..=range.max()),
        status: definition.status,
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn registry() -> CatalogRegistry {
        CatalogRegistry::builtin().expect("bundled registry")
    }

    #[rstest]
    fn same_seed_yields_identical_catalog(registry: CatalogRegistry) {
        assert_eq!(generate_catalog(&registry, 2024), generate_catalog(&registry, 2024));
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(u64::MAX)]
    fn players_online_stays_within_range(registry: CatalogRegistry, #[case] seed: u64) {
        let catalog = generate_catalog(&registry, seed);
        assert!(
            catalog
                .games
                .iter()
                .all(|g| (10..=100).contains(&g.players_online))
        );
    }

    #[rstest]
    fn fixed_tables_are_copied_verbatim(registry: CatalogRegistry) {
        let catalog = generate_catalog(&registry, 99);

        assert_eq!(catalog.players, registry.players());
        assert_eq!(catalog.shop_items, registry.shop_items());
        assert_eq!(catalog.accounts, registry.accounts());
        let names: Vec<_> = catalog.games.iter().map(|g| g.name.as_str()).collect();
        let expected: Vec<_> = registry.games().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn degenerate_range_pins_players_online() {
        let json = r#"{
            "version": 1,
            "playersOnline": {"min": 33, "max": 33},
            "players": [{"name": "Alice", "gamesPlayed": 1, "wins": 1, "losses": 0, "rank": "gold", "balance": 10}],
            "games": [{"name": "A", "status": "available"}, {"name": "B", "status": "maintenance"}],
            "shopItems": [{"name": "Sword", "price": 1000}]
        }"#;
        let registry = CatalogRegistry::from_json(json).expect("valid registry");
        let catalog = generate_catalog(&registry, 5);

        assert!(catalog.games.iter().all(|g| g.players_online == 33));
    }
}
