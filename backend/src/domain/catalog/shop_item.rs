//! Shop rows.

use std::cmp::Ordering;

use mock_catalog::ShopItemSeed;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::CatalogRow;

/// An item for sale, priced in currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShopItem {
    #[schema(example = "Sword")]
    name: String,
    #[schema(example = 1000)]
    price: u32,
}

impl ShopItem {
    /// Item priced at `price` currency units.
    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Unique item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price in currency units.
    pub fn price(&self) -> u32 {
        self.price
    }
}

impl From<&ShopItemSeed> for ShopItem {
    fn from(seed: &ShopItemSeed) -> Self {
        Self::new(seed.name.clone(), seed.price)
    }
}

/// Sortable columns of [`ShopItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ShopItemColumn {
    Name,
    Price,
}

impl CatalogRow for ShopItem {
    type Column = ShopItemColumn;

    fn key(&self) -> &str {
        &self.name
    }

    fn compare_by(&self, other: &Self, column: ShopItemColumn) -> Ordering {
        match column {
            ShopItemColumn::Name => self.name.cmp(&other.name),
            ShopItemColumn::Price => self.price.cmp(&other.price),
        }
    }
}
