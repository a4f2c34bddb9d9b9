//! Screen state and action capability flows.

use petsphere_catalog::view::{BoardingCardView, ProductCardView};
use petsphere_catalog::{CardActions, Catalog, RecordKind, Selector};
use petsphere_integration_tests::RecordingActions;

#[test]
fn test_shop_screen_rederives_on_every_change() {
    let catalog = Catalog::with_sample_data();
    let mut screen = catalog.shop_screen();

    assert_eq!(screen.visible().len(), 4);

    screen.set_query("dog");
    assert_eq!(screen.visible().len(), 2);

    screen.set_selector(Selector::parse("grooming"));
    let visible = screen.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Professional Dog Grooming Kit");

    screen.set_selector(Selector::All);
    screen.set_query("");
    assert_eq!(screen.visible().len(), 4);
}

#[test]
fn test_screens_are_independent() {
    let catalog = Catalog::with_sample_data();
    let mut shop = catalog.shop_screen();
    let consult = catalog.consult_screen();

    shop.set_query("nothing matches this");
    assert!(shop.visible().is_empty());
    // The consult tab keeps its own parameters
    assert_eq!(consult.visible().len(), 3);
}

#[test]
fn test_card_views_render_from_screen_results() {
    let catalog = Catalog::with_sample_data();
    let mut screen = catalog.boarding_screen();
    screen.set_query("paws");

    let cards: Vec<BoardingCardView> = screen.visible().iter().map(BoardingCardView::from).collect();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].name, "Happy Paws Boarding");
    assert_eq!(cards[0].kind, "Boarding House");
    assert_eq!(cards[0].price_per_day, "$35.00/day");
    assert!(cards[0].verified);
    assert!(!cards[0].live_tracking);
}

#[test]
fn test_card_views_serialize_to_json() {
    let catalog = Catalog::with_sample_data();
    let cards: Vec<ProductCardView> = catalog
        .discounted_products()
        .iter()
        .map(ProductCardView::from)
        .collect();

    let json = serde_json::to_value(&cards).expect("views serialize");
    let first = &json[0];
    assert_eq!(first["price"], "$24.99");
    assert_eq!(first["original_price"], "$29.99");
    assert_eq!(first["discount_percent"], 17);
}

#[test]
fn test_screen_actions_fire_through_injected_capability() {
    let catalog = Catalog::with_sample_data();
    let mut screen = catalog.consult_screen();
    screen.set_selector(Selector::parse("exotic"));

    let actions = RecordingActions::default();
    for doctor in screen.visible() {
        actions.selected(RecordKind::Doctor, &doctor.name);
        actions.primary(RecordKind::Doctor, &doctor.name);
    }

    let captured = actions.captured();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].hook, "selected");
    assert_eq!(captured[0].name, "Dr. Michael Chen");
    assert_eq!(captured[1].hook, "primary");
    assert_eq!(captured[1].kind, RecordKind::Doctor);
}

#[test]
fn test_out_of_stock_product_still_renders() {
    let catalog = Catalog::with_sample_data();
    let mut screen = catalog.shop_screen();
    screen.set_query("bird seed");

    let cards: Vec<ProductCardView> = screen.visible().iter().map(ProductCardView::from).collect();
    assert_eq!(cards.len(), 1);
    assert!(!cards[0].in_stock);
    assert_eq!(cards[0].discount_percent, None);
}
