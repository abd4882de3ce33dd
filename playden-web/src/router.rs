use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Shop,
    #[at("/game/:id")]
    Game { id: u32 },
    #[at("/purchases")]
    Purchases,
    #[at("/reservations")]
    Reservations,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Where a settled checkout lands, driven solely by the `reservation`
    /// flag of the submission response.
    #[must_use]
    pub const fn for_settlement(reservation: bool) -> Self {
        if reservation {
            Self::Reservations
        } else {
            Self::Purchases
        }
    }
}

#[must_use]
pub fn switch(route: Route) -> Html {
    match route {
        Route::Shop => html! { <pages::shop::ShopPage /> },
        Route::Game { id } => html! { <pages::game::GamePage {id} /> },
        Route::Purchases => html! { <pages::purchases::PurchasesPage /> },
        Route::Reservations => html! { <pages::reservations::ReservationsPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn settlement_routes_follow_the_reservation_flag() {
        assert_eq!(Route::for_settlement(true), Route::Reservations);
        assert_eq!(Route::for_settlement(false), Route::Purchases);
    }

    #[test]
    fn game_route_carries_its_id() {
        assert_eq!(
            Route::recognize("/game/7"),
            Some(Route::Game { id: 7 })
        );
    }
}
