use futures::executor::block_on;
use playden_shop::catalog::{Game, Package, PaymentMethod};
use playden_web::components::checkout::CheckoutDialog;
use playden_web::components::modal::Modal;
use playden_web::components::package_card::PackageCard;
use yew::html::ChildrenRenderer;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn package(id: u32, price: u32) -> Package {
    Package {
        id,
        name: format!("Package {id}"),
        duration_minutes: 60,
        price,
        original_price: None,
        points_earned: 120,
        bonus_multiplier: 1.0,
        is_promotional: false,
        promotional_label: None,
        can_purchase: true,
    }
}

fn lounge_game(reservable: bool, fee: u32) -> Game {
    Game {
        id: 7,
        name: String::from("Astro Rally"),
        category: String::from("racing"),
        platform: String::from("PS5"),
        min_players: 1,
        max_players: 4,
        age_rating: String::from("E10+"),
        points_per_hour: 120,
        is_reservable: reservable,
        reservation_fee: fee,
        description: String::from("Arcade racing."),
        image_url: String::new(),
        packages: vec![package(71, 5000)],
    }
}

fn lounge_methods() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod {
            id: 1,
            name: String::from("Pay at the counter"),
            requires_online_payment: false,
            instructions: None,
        },
        PaymentMethod {
            id: 2,
            name: String::from("Mobile money"),
            requires_online_payment: true,
            instructions: None,
        },
    ]
}

#[test]
fn modal_renders_when_open_and_skips_when_closed() {
    let open_props = playden_web::components::modal::Props {
        open: true,
        title: AttrValue::from("Checkout"),
        on_close: Callback::noop(),
        return_focus_id: None,
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(open_props).render());
    assert!(html.contains("dialog__header"));
    assert!(html.contains("Checkout"));

    let closed_props = playden_web::components::modal::Props {
        open: false,
        title: AttrValue::from("Checkout"),
        on_close: Callback::noop(),
        return_focus_id: None,
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(closed_props).render());
    assert!(!html.contains("dialog-backdrop"));
}

#[test]
fn package_card_shows_price_duration_and_points() {
    let props = playden_web::components::package_card::Props {
        package: package(71, 5000),
        on_select: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<PackageCard>::with_props(props).render());
    assert!(html.contains("5,000 FCFA"));
    assert!(html.contains("60 min"));
    assert!(html.contains("+120 pts"));
    assert!(!html.contains("Purchase limit reached"));
}

#[test]
fn package_card_shows_discount_and_promo_label() {
    let mut promo = package(71, 5000);
    promo.original_price = Some(6000);
    promo.is_promotional = true;
    promo.promotional_label = Some(String::from("Launch week"));
    let props = playden_web::components::package_card::Props {
        package: promo,
        on_select: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<PackageCard>::with_props(props).render());
    assert!(html.contains("Launch week"));
    assert!(html.contains("6,000 FCFA"));
    assert!(html.contains("5,000 FCFA"));
}

#[test]
fn capped_package_card_is_disabled_with_the_limit_notice() {
    let mut capped = package(71, 5000);
    capped.can_purchase = false;
    let props = playden_web::components::package_card::Props {
        package: capped,
        on_select: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<PackageCard>::with_props(props).render());
    assert!(html.contains("disabled"));
    assert!(html.contains("Purchase limit reached"));
}

#[test]
fn checkout_dialog_shows_total_and_methods() {
    let props = playden_web::components::checkout::CheckoutProps {
        game: lounge_game(false, 0),
        methods: lounge_methods(),
        package_id: 71,
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CheckoutDialog>::with_props(props).render());
    assert!(html.contains("5,000 FCFA"));
    assert!(html.contains("Payment method"));
    assert!(html.contains("Pay at the counter"));
    assert!(html.contains("Mobile money"));
    // Not reservable: no slot controls at all.
    assert!(!html.contains("Reserve a time slot"));
}

#[test]
fn checkout_dialog_offers_reservation_with_fee_hint() {
    let props = playden_web::components::checkout::CheckoutProps {
        game: lounge_game(true, 500),
        methods: lounge_methods(),
        package_id: 71,
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CheckoutDialog>::with_props(props).render());
    assert!(html.contains("Reserve a time slot"));
    assert!(html.contains("500 FCFA"));
}

#[test]
fn checkout_dialog_omits_the_fee_hint_when_the_game_charges_none() {
    let props = playden_web::components::checkout::CheckoutProps {
        game: lounge_game(true, 0),
        methods: lounge_methods(),
        package_id: 71,
        on_close: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<CheckoutDialog>::with_props(props).render());
    assert!(html.contains("Reserve a time slot"));
    assert!(!html.contains("checkout__fee-hint"));
}
