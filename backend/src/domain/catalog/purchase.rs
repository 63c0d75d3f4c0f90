//! Outcome of a shop purchase.

use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

use super::{Player, ShopItem};

/// Receipt for a completed purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    item: String,
    price: u32,
    buyer: String,
    remaining_balance: i64,
}

impl Purchase {
    pub(super) fn new(item: &ShopItem, buyer: &Player) -> Self {
        Self {
            item: item.name().to_owned(),
            price: item.price(),
            buyer: buyer.name().to_owned(),
            remaining_balance: buyer.balance(),
        }
    }

    /// Name of the item bought.
    pub fn item(&self) -> &str {
        &self.item
    }

    /// Price debited, in currency units.
    pub fn price(&self) -> u32 {
        self.price
    }

    /// Player whose balance was debited.
    pub fn buyer(&self) -> &str {
        &self.buyer
    }

    /// Buyer balance after the debit.
    pub fn remaining_balance(&self) -> i64 {
        self.remaining_balance
    }

    /// Confirmation shown to the buyer.
    pub fn confirmation(&self) -> String {
        format!(
            "{} purchased successfully! {} deducted from your balance.",
            self.item, self.price
        )
    }
}

/// Reasons a purchase leaves every table unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    /// No shop item carries the requested name.
    #[error("unknown shop item '{item}'")]
    UnknownItem { item: String },
    /// Nobody is signed in, or the signed-in user has no player row.
    #[error("no player matches the current user")]
    NoMatchingPlayer { username: Option<String> },
}
