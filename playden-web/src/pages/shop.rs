use yew::prelude::*;

/// Storefront landing page.
#[function_component(ShopPage)]
pub fn shop_page() -> Html {
    html! {
        <div class="shop-page">
            <header class="shop-page__hero">
                <h1>{ "Playden" }</h1>
                <p>{ "Pick a game, buy your time, play. Reserve a slot if you want the seat waiting for you." }</p>
            </header>
        </div>
    }
}
