use crate::router::{Route, switch};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <main id="main" role="main">
                // Live region for checkout announcements (see a11y::set_status).
                <div id="checkout-status" class="sr-only" aria-live="polite" />
                <Switch<Route> render={switch} />
            </main>
        </BrowserRouter>
    }
}
