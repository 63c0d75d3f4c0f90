//! In-memory catalog tables: players, games and shop items.
//!
//! Each table is a [`Catalog`] of rows keyed by a unique name. Tables are
//! built once at start-up from a [`mock_catalog::CatalogSeed`] and are
//! read-only afterwards, except player balances which the shop debits
//! through [`Catalogs::purchase`].

mod game;
mod player;
mod purchase;
mod shop_item;

use std::cmp::Ordering;
use std::collections::HashSet;

use mock_catalog::CatalogSeed;
use serde::Deserialize;
use thiserror::Error;

pub use game::{Game, GameColumn, GameStatus};
pub use player::{Player, PlayerColumn, Rank};
pub use purchase::{Purchase, PurchaseError};
pub use shop_item::{ShopItem, ShopItemColumn};

/// A row that can live in a [`Catalog`].
pub trait CatalogRow: Clone {
    /// Sortable columns of the row.
    type Column: Copy;

    /// Unique key used by [`Catalog::find_by_key`].
    fn key(&self) -> &str;

    /// Ascending comparison on a single column.
    fn compare_by(&self, other: &Self, column: Self::Column) -> Ordering;
}

/// Errors raised while building a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two rows share the same key.
    #[error("catalog contains duplicate key '{key}'")]
    DuplicateKey {
        /// The duplicated key.
        key: String,
    },
}

/// Column plus direction for [`Catalog::sort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec<C> {
    /// Column to sort on.
    pub column: C,
    /// Sort largest first when `true`.
    #[serde(default)]
    pub descending: bool,
}

impl<C> SortSpec<C> {
    /// Descending sort on `column`.
    pub fn descending(column: C) -> Self {
        Self {
            column,
            descending: true,
        }
    }
}

/// Ordered table of uniquely keyed rows.
///
/// # Examples
/// ```
/// use gamehub::domain::catalog::{Catalog, ShopItem, ShopItemColumn};
///
/// let shop = Catalog::new(vec![
///     ShopItem::new("Sword", 1000),
///     ShopItem::new("Health Potion", 500),
/// ])
/// .expect("unique keys");
///
/// assert_eq!(shop.find_by_key("Sword").map(ShopItem::price), Some(1000));
/// let cheapest_first = shop.sort(ShopItemColumn::Price, false);
/// assert_eq!(cheapest_first[0].name(), "Health Potion");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog<T> {
    rows: Vec<T>,
}

impl<T: CatalogRow> Catalog<T> {
    /// Build a catalog, rejecting duplicate keys.
    pub fn new(rows: Vec<T>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        if let Some(duplicate) = rows.iter().find(|row| !seen.insert(row.key())) {
            return Err(CatalogError::DuplicateKey {
                key: duplicate.key().to_owned(),
            });
        }
        Ok(Self { rows })
    }

    /// All rows in insertion order.
    pub fn list_all(&self) -> &[T] {
        &self.rows
    }

    /// Row with the given key.
    pub fn find_by_key(&self, key: &str) -> Option<&T> {
        self.rows.iter().find(|row| row.key() == key)
    }

    pub(crate) fn find_by_key_mut(&mut self, key: &str) -> Option<&mut T> {
        self.rows.iter_mut().find(|row| row.key() == key)
    }

    /// Rows matching `predicate`, in insertion order.
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.iter().filter(|row| predicate(row)).cloned().collect()
    }

    /// Copy of the rows ordered on `column`.
    ///
    /// The sort is stable: rows that compare equal keep their insertion
    /// order in either direction. The table itself is not reordered.
    pub fn sort(&self, column: T::Column, descending: bool) -> Vec<T> {
        let mut rows = self.rows.clone();
        sort_rows(&mut rows, column, descending);
        rows
    }

    /// First row in insertion order.
    pub fn first(&self) -> Option<&T> {
        self.rows.first()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Stable in-place sort of rows already pulled out of a [`Catalog`].
pub fn sort_rows<T: CatalogRow>(rows: &mut [T], column: T::Column, descending: bool) {
    rows.sort_by(|a, b| {
        let ordering = a.compare_by(b, column);
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

/// The three catalog tables owned by one platform instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogs {
    players: Catalog<Player>,
    games: Catalog<Game>,
    shop_items: Catalog<ShopItem>,
}

impl Catalogs {
    /// Bundle prebuilt tables.
    pub fn new(players: Catalog<Player>, games: Catalog<Game>, shop_items: Catalog<ShopItem>) -> Self {
        Self {
            players,
            games,
            shop_items,
        }
    }

    /// Build every table from generated seed rows.
    pub fn from_seed(seed: &CatalogSeed) -> Result<Self, CatalogError> {
        Ok(Self::new(
            Catalog::new(seed.players.iter().map(Player::from).collect())?,
            Catalog::new(seed.games.iter().map(Game::from).collect())?,
            Catalog::new(seed.shop_items.iter().map(ShopItem::from).collect())?,
        ))
    }

    /// Player statistics table.
    pub fn players(&self) -> &Catalog<Player> {
        &self.players
    }

    /// Game library table.
    pub fn games(&self) -> &Catalog<Game> {
        &self.games
    }

    /// Shop table.
    pub fn shop_items(&self) -> &Catalog<ShopItem> {
        &self.shop_items
    }

    /// Debit the price of `item` from the player named `buyer`.
    ///
    /// There is no balance floor. When `buyer` is `None` or names no player
    /// the tables are left untouched and
    /// [`PurchaseError::NoMatchingPlayer`] is returned.
    pub fn purchase(&mut self, buyer: Option<&str>, item: &str) -> Result<Purchase, PurchaseError> {
        let item = self
            .shop_items
            .find_by_key(item)
            .cloned()
            .ok_or_else(|| PurchaseError::UnknownItem {
                item: item.to_owned(),
            })?;

        let player = buyer
            .and_then(|name| self.players.find_by_key_mut(name))
            .ok_or_else(|| PurchaseError::NoMatchingPlayer {
                username: buyer.map(str::to_owned),
            })?;

        player.debit(item.price());
        Ok(Purchase::new(&item, player))
    }
}

#[cfg(test)]
mod tests;
