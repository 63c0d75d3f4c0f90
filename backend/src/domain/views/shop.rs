//! In-game shop listing and purchases.

use serde::Serialize;
use utoipa::ToSchema;

use super::{Notice, ViewError};
use crate::domain::SessionState;
use crate::domain::catalog::{Catalogs, Purchase, ShopItem, ShopItemColumn, SortSpec, sort_rows};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopRequest {
    /// Item to select. Defaults to the first item.
    pub selected: Option<String>,
    /// Buy the selected item for the signed-in user.
    pub buy: bool,
    /// Only list items priced at or below this amount.
    pub max_price: Option<u32>,
    pub sort: Option<SortSpec<ShopItemColumn>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ShopView {
    title: &'static str,
    subtitle: &'static str,
    items: Vec<ShopItem>,
    selected: Option<ShopItem>,
    /// Balance of the player row matching the signed-in user, if any.
    balance: Option<i64>,
    purchase: Option<Purchase>,
    notice: Option<Notice>,
}

impl ShopView {
    pub fn items(&self) -> &[ShopItem] {
        &self.items
    }

    pub fn selected(&self) -> Option<&ShopItem> {
        self.selected.as_ref()
    }

    pub fn balance(&self) -> Option<i64> {
        self.balance
    }

    pub fn purchase(&self) -> Option<&Purchase> {
        self.purchase.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}

pub(super) fn render(
    catalogs: &mut Catalogs,
    session: &SessionState,
    request: ShopRequest,
) -> Result<ShopView, ViewError> {
    let selected = match request.selected.as_deref() {
        Some(name) => Some(catalogs.shop_items().find_by_key(name).cloned().ok_or_else(
            || ViewError::UnknownItem {
                name: name.to_owned(),
            },
        )?),
        None => catalogs.shop_items().first().cloned(),
    };

    let purchase = match (&selected, request.buy) {
        (Some(item), true) => Some(catalogs.purchase(session.current_user(), item.name())?),
        _ => None,
    };
    let notice = purchase
        .as_ref()
        .map(|receipt| Notice::success(receipt.confirmation()));

    let mut items = catalogs
        .shop_items()
        .filter(|item| request.max_price.is_none_or(|max| item.price() <= max));
    if let Some(sort) = request.sort {
        sort_rows(&mut items, sort.column, sort.descending);
    }

    let balance = session
        .current_user()
        .and_then(|user| catalogs.players().find_by_key(user))
        .map(|player| player.balance());

    Ok(ShopView {
        title: "In-Game Shop",
        subtitle: "Purchase items and boost your gaming experience",
        items,
        selected,
        balance,
        purchase,
        notice,
    })
}
