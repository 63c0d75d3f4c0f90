//! Dashboard service over the process-wide catalogs.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, info};

use super::catalog::{Catalogs, PurchaseError};
use super::ports::DashboardService;
use super::views::{self, SupportRequest, ViewError, ViewRequest, ViewResponse};
use super::{Error, SessionState};

impl From<ViewError> for Error {
    fn from(value: ViewError) -> Self {
        match value {
            ViewError::UnknownGame { name } => Self::not_found(format!("Unknown game: {name}"))
                .with_details(json!({ "game": name, "code": "unknown_game" })),
            ViewError::UnknownPlayer { name } => {
                Self::not_found(format!("Unknown player: {name}"))
                    .with_details(json!({ "player": name, "code": "unknown_player" }))
            }
            ViewError::UnknownItem { name }
            | ViewError::Purchase(PurchaseError::UnknownItem { item: name }) => {
                Self::not_found(format!("Unknown shop item: {name}"))
                    .with_details(json!({ "item": name, "code": "unknown_item" }))
            }
            ViewError::Purchase(PurchaseError::NoMatchingPlayer { username }) => {
                Self::not_found("No player record matches the signed-in user.")
                    .with_details(json!({ "username": username, "code": "no_matching_player" }))
            }
        }
    }
}

/// The catalogs of one running platform, shared by every session.
///
/// Each request runs its handler inside a single critical section, so a
/// purchase is never observed half-applied.
#[derive(Debug)]
pub struct GamingPlatform {
    catalogs: Mutex<Catalogs>,
}

impl GamingPlatform {
    pub fn new(catalogs: Catalogs) -> Self {
        Self {
            catalogs: Mutex::new(catalogs),
        }
    }

    fn catalogs(&self) -> MutexGuard<'_, Catalogs> {
        self.catalogs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current tables.
    pub fn snapshot(&self) -> Catalogs {
        self.catalogs().clone()
    }

    /// Dispatch `request` against the shared catalogs.
    pub fn handle(
        &self,
        session: &SessionState,
        request: ViewRequest,
    ) -> Result<ViewResponse, ViewError> {
        let view = request.view();
        if let ViewRequest::Support(SupportRequest {
            submission: Some(form),
        }) = &request
        {
            info!(
                user = session.current_user(),
                email = form.email(),
                issue_len = form.issue().len(),
                "support request acknowledged"
            );
        }
        let response = views::dispatch(request, &mut self.catalogs(), session)?;
        if let Some(receipt) = match &response {
            ViewResponse::Shop(shop) => shop.purchase(),
            _ => None,
        } {
            info!(
                buyer = receipt.buyer(),
                item = receipt.item(),
                price = receipt.price(),
                balance = receipt.remaining_balance(),
                "purchase applied"
            );
        }
        debug!(%view, "view rendered");
        Ok(response)
    }
}

#[async_trait]
impl DashboardService for GamingPlatform {
    async fn render(
        &self,
        session: &SessionState,
        request: ViewRequest,
    ) -> Result<ViewResponse, Error> {
        self.handle(session, request).map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::views::ShopRequest;
    use mock_catalog::{CatalogRegistry, generate_catalog};
    use rstest::{fixture, rstest};

    #[fixture]
    fn platform() -> GamingPlatform {
        let registry = CatalogRegistry::builtin().expect("bundled registry");
        GamingPlatform::new(
            Catalogs::from_seed(&generate_catalog(&registry, 1)).expect("unique keys"),
        )
    }

    fn buy(item: &str) -> ViewRequest {
        ViewRequest::Shop(ShopRequest {
            selected: Some(item.to_owned()),
            buy: true,
            ..ShopRequest::default()
        })
    }

    #[rstest]
    fn purchases_persist_across_requests(platform: GamingPlatform) {
        let session = SessionState::authenticated_as("Alice");
        platform.handle(&session, buy("Sword")).expect("first");
        platform.handle(&session, buy("Boots")).expect("second");

        let balance = platform
            .snapshot()
            .players()
            .find_by_key("Alice")
            .map(|p| p.balance());
        assert_eq!(balance, Some(5000 - 1000 - 1200));
    }

    #[rstest]
    #[tokio::test]
    async fn no_matching_player_is_not_found(platform: GamingPlatform) {
        let err = platform
            .render(&SessionState::anonymous(), buy("Sword"))
            .await
            .expect_err("anonymous purchase");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(
            err.details().and_then(|d| d.get("code")).and_then(|c| c.as_str()),
            Some("no_matching_player")
        );
    }

    #[rstest]
    #[case(ViewError::UnknownGame { name: "Pong".into() }, "unknown_game")]
    #[case(ViewError::UnknownPlayer { name: "Zed".into() }, "unknown_player")]
    #[case(ViewError::UnknownItem { name: "Gem".into() }, "unknown_item")]
    fn lookup_misses_map_to_not_found(#[case] err: ViewError, #[case] code: &str) {
        let mapped = Error::from(err);
        assert_eq!(mapped.code(), ErrorCode::NotFound);
        assert_eq!(
            mapped.details().and_then(|d| d.get("code")).and_then(|c| c.as_str()),
            Some(code)
        );
    }
}
