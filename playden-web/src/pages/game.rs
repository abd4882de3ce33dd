use crate::api;
use crate::components::checkout::CheckoutDialog;
use crate::components::package_card::PackageCard;
use playden_shop::catalog::{Game, PaymentMethod};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq, Eq)]
pub struct Props {
    pub id: u32,
}

/// Game detail page: header, package grid, and the checkout dialog once a
/// tile is clicked. The game and the payment methods are fetched once per
/// visit; the checkout treats both as immutable.
#[function_component(GamePage)]
pub fn game_page(props: &Props) -> Html {
    let game = use_state(|| Option::<Game>::None);
    let methods = use_state(Vec::<PaymentMethod>::new);
    let load_error = use_state(|| Option::<String>::None);
    let checkout_package = use_state(|| Option::<u32>::None);

    {
        let game = game.clone();
        let methods = methods.clone();
        let load_error = load_error.clone();
        use_effect_with(props.id, move |id| {
            let id = *id;
            game.set(None);
            load_error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match api::fetch_game(id).await {
                    Ok(loaded) => game.set(Some(loaded)),
                    Err(err) => {
                        log::error!("failed to load game {id}: {err}");
                        load_error.set(Some(err.to_string()));
                        return;
                    }
                }
                match api::fetch_payment_methods().await {
                    Ok(loaded) => methods.set(loaded),
                    Err(err) => {
                        log::error!("failed to load payment methods: {err}");
                        load_error.set(Some(err.to_string()));
                    }
                }
            });
            || ()
        });
    }

    let on_select = {
        let checkout_package = checkout_package.clone();
        Callback::from(move |package_id: u32| checkout_package.set(Some(package_id)))
    };
    let on_close = {
        let checkout_package = checkout_package.clone();
        Callback::from(move |()| checkout_package.set(None))
    };

    if let Some(error) = (*load_error).as_ref() {
        return html! {
            <div class="game-page">
                <p class="game-page__error" role="alert">
                    { format!("Could not load this game: {error}") }
                </p>
            </div>
        };
    }
    let Some(game_data) = (*game).as_ref() else {
        return html! {
            <div class="game-page">
                <p class="game-page__loading">{ "Loading..." }</p>
            </div>
        };
    };

    html! {
        <div class="game-page">
            <header class="game-page__header">
                <h1>{ &game_data.name }</h1>
                <p class="game-page__meta">
                    { format!(
                        "{} - {} - {}-{} players - {}",
                        game_data.category,
                        game_data.platform,
                        game_data.min_players,
                        game_data.max_players,
                        game_data.age_rating,
                    ) }
                </p>
                <p class="game-page__points">
                    { format!("{} points per hour", game_data.points_per_hour) }
                </p>
                { (!game_data.description.is_empty()).then(|| html! {
                    <p class="game-page__description">{ &game_data.description }</p>
                }) }
            </header>
            <div class="game-page__packages">
                { for game_data.packages.iter().map(|package| html! {
                    <PackageCard
                        key={package.id}
                        package={package.clone()}
                        on_select={on_select.clone()}
                    />
                }) }
            </div>
            { checkout_package.map(|package_id| html! {
                <CheckoutDialog
                    game={game_data.clone()}
                    methods={(*methods).clone()}
                    {package_id}
                    on_close={on_close.clone()}
                />
            }) }
        </div>
    }
}
