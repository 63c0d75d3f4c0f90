//! Tests for the catalog tables and the purchase mutation.

use mock_catalog::{CatalogRegistry, generate_catalog};
use rstest::{fixture, rstest};

use super::*;

#[fixture]
fn catalogs() -> Catalogs {
    let registry = CatalogRegistry::builtin().expect("bundled registry");
    Catalogs::from_seed(&generate_catalog(&registry, 7)).expect("unique keys")
}

fn wins_table(rows: &[(&str, u32)]) -> Catalog<Player> {
    Catalog::new(
        rows.iter()
            .map(|(name, wins)| Player::new(*name, 0, *wins, 0, Rank::Bronze, 0))
            .collect(),
    )
    .expect("unique keys")
}

fn balances(catalogs: &Catalogs) -> Vec<(String, i64)> {
    catalogs
        .players()
        .list_all()
        .iter()
        .map(|p| (p.name().to_owned(), p.balance()))
        .collect()
}

#[rstest]
fn duplicate_keys_are_rejected() {
    let err = Catalog::new(vec![ShopItem::new("Sword", 1), ShopItem::new("Sword", 2)])
        .expect_err("duplicate");
    assert_eq!(
        err,
        CatalogError::DuplicateKey {
            key: "Sword".to_owned()
        }
    );
}

#[rstest]
fn seeded_tables_keep_registry_order(catalogs: Catalogs) {
    assert_eq!(catalogs.players().len(), 10);
    assert_eq!(catalogs.games().len(), 8);
    assert_eq!(catalogs.shop_items().len(), 8);
    assert_eq!(catalogs.players().first().map(Player::name), Some("Alice"));
    assert_eq!(catalogs.games().first().map(Game::name), Some("BattleZone"));
}

#[rstest]
fn seeded_players_online_stay_in_range(catalogs: Catalogs) {
    assert!(
        catalogs
            .games()
            .list_all()
            .iter()
            .all(|g| (10..=100).contains(&g.players_online()))
    );
}

#[rstest]
#[case("Sword", Some(1000))]
#[case("Ring of Strength", Some(3000))]
#[case("Lightsaber", None)]
fn find_by_key_looks_up_exact_names(catalogs: Catalogs, #[case] name: &str, #[case] price: Option<u32>) {
    assert_eq!(catalogs.shop_items().find_by_key(name).map(ShopItem::price), price);
}

#[rstest]
fn filter_preserves_insertion_order(catalogs: Catalogs) {
    let down: Vec<String> = catalogs
        .games()
        .filter(|g| g.status() == GameStatus::Maintenance)
        .iter()
        .map(|g| g.name().to_owned())
        .collect();
    assert_eq!(down, ["PixelWarriors", "ZombieHunt"]);
}

#[rstest]
fn descending_sort_is_stable() {
    let table = wins_table(&[("A", 70), ("B", 45), ("C", 100), ("D", 30), ("E", 45)]);
    let sorted = table.sort(PlayerColumn::Wins, true);
    let pairs: Vec<(&str, u32)> = sorted.iter().map(|p| (p.name(), p.wins())).collect();
    assert_eq!(pairs, [("C", 100), ("A", 70), ("B", 45), ("E", 45), ("D", 30)]);
}

#[rstest]
fn sort_does_not_reorder_the_table() {
    let table = wins_table(&[("A", 70), ("B", 45), ("C", 100), ("D", 30)]);
    let wins: Vec<u32> = table
        .sort(PlayerColumn::Wins, true)
        .iter()
        .map(Player::wins)
        .collect();
    assert_eq!(wins, [100, 70, 45, 30]);
    let original: Vec<u32> = table.list_all().iter().map(Player::wins).collect();
    assert_eq!(original, [70, 45, 100, 30]);
}

#[rstest]
fn ranks_sort_bronze_to_platinum(catalogs: Catalogs) {
    let sorted = catalogs.players().sort(PlayerColumn::Rank, false);
    assert_eq!(sorted.first().map(Player::rank), Some(Rank::Bronze));
    assert_eq!(sorted.last().map(Player::rank), Some(Rank::Platinum));
}

#[rstest]
fn purchase_debits_only_the_buyer(mut catalogs: Catalogs) {
    let before = balances(&catalogs);
    let receipt = catalogs
        .purchase(Some("Alice"), "Sword")
        .expect("purchase succeeds");

    assert_eq!(receipt.remaining_balance(), 4000);
    assert_eq!(
        receipt.confirmation(),
        "Sword purchased successfully! 1000 deducted from your balance."
    );
    for ((name, old), (_, new)) in before.iter().zip(balances(&catalogs)) {
        let expected = if name == "Alice" { old - 1000 } else { *old };
        assert_eq!(new, expected, "balance of {name}");
    }
}

#[rstest]
fn purchase_allows_negative_balances(mut catalogs: Catalogs) {
    let receipt = catalogs
        .purchase(Some("Ivy"), "Ring of Strength")
        .expect("purchase succeeds");
    assert_eq!(receipt.remaining_balance(), -2000);
}

#[rstest]
#[case(None)]
#[case(Some("admin"))]
fn purchase_without_matching_player_changes_nothing(
    mut catalogs: Catalogs,
    #[case] buyer: Option<&str>,
) {
    let before = catalogs.clone();
    let err = catalogs.purchase(buyer, "Sword").expect_err("no match");
    assert_eq!(
        err,
        PurchaseError::NoMatchingPlayer {
            username: buyer.map(str::to_owned)
        }
    );
    assert_eq!(catalogs, before);
}

#[rstest]
fn purchase_of_unknown_item_changes_nothing(mut catalogs: Catalogs) {
    let before = catalogs.clone();
    let err = catalogs
        .purchase(Some("Alice"), "Lightsaber")
        .expect_err("unknown item");
    assert!(matches!(err, PurchaseError::UnknownItem { .. }));
    assert_eq!(catalogs, before);
}
