use yew::prelude::*;

/// Landing target for settled immediate purchases.
#[function_component(PurchasesPage)]
pub fn purchases_page() -> Html {
    html! {
        <div class="purchases-page">
            <h1>{ "My purchases" }</h1>
            <p>{ "Your confirmed sessions appear here a moment after checkout." }</p>
        </div>
    }
}
