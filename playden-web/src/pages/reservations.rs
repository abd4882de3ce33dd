use yew::prelude::*;

/// Landing target for settled reservations.
#[function_component(ReservationsPage)]
pub fn reservations_page() -> Html {
    html! {
        <div class="reservations-page">
            <h1>{ "My reservations" }</h1>
            <p>{ "Your booked slots appear here a moment after checkout." }</p>
        </div>
    }
}
