//! Deterministic mock catalog data for the game hub demo.
//!
//! The crate owns the seed registry (accounts, players, games and shop items)
//! and the generator that turns a registry plus a numeric seed into catalog
//! rows. It is independent of backend domain types so the backend can map the
//! rows into its own records at start-up.
//!
//! # Overview
//!
//! - [`CatalogRegistry`] parses and validates the JSON registry.
//! - [`generate_catalog`] draws the one-off `players_online` figure for every
//!   game from a seeded RNG, so the same seed always yields the same catalog.
//!
//! # Example
//!
//! ```
//! use mock_catalog::{CatalogRegistry, generate_catalog};
//!
//! let registry = CatalogRegistry::builtin().expect("bundled registry is valid");
//! let catalog = generate_catalog(&registry, 42);
//!
//! assert_eq!(catalog.players.len(), 10);
//! assert_eq!(catalog, generate_catalog(&registry, 42));
//! ```

mod error;
mod generator;
mod registry;
mod seed;

pub use error::RegistryError;
pub use generator::generate_catalog;
pub use registry::{CatalogRegistry, PlayersOnlineRange};
pub use seed::{
    AccountSeed, CatalogSeed, GameDefinition, GameSeed, GameStatusSeed, PlayerSeed, RankSeed,
    ShopItemSeed,
};
