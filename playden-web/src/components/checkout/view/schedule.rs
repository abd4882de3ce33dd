use super::super::state::format_amount;
use playden_shop::checkout::{Availability, CheckoutSession};
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Reservation controls. Renders nothing for games that do not take
/// reservations; the state machine enforces the same rule underneath.
pub fn render_schedule(
    session: &CheckoutSession,
    on_toggle: &Callback<bool>,
    on_input: &Callback<String>,
    on_check: &Callback<()>,
) -> Html {
    let game = session.game();
    if !game.is_reservable {
        return Html::default();
    }

    let onchange_toggle = {
        let cb = on_toggle.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit(input.checked());
            }
        })
    };
    let onchange_start = {
        let cb = on_input.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let onclick_check = {
        let cb = on_check.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let availability = session.availability();
    let start_value = session
        .scheduled_start()
        .map(|slot| slot.wire.clone())
        .unwrap_or_default();

    html! {
        <section class="checkout__schedule">
            <label class="checkout__reserve-toggle">
                <input
                    type="checkbox"
                    checked={session.reservation_mode()}
                    onchange={onchange_toggle}
                />
                { "Reserve a time slot" }
                { (game.reservation_fee > 0).then(|| html! {
                    <span class="checkout__fee-hint">
                        { format!(" (+{})", format_amount(game.reservation_fee)) }
                    </span>
                }) }
            </label>
            { session.reservation_mode().then(|| html! {
                <div class="checkout__slot">
                    <label class="checkout__start">
                        { "Start time" }
                        <input
                            type="datetime-local"
                            value={start_value.clone()}
                            onchange={onchange_start.clone()}
                        />
                    </label>
                    <button
                        type="button"
                        class="checkout__check"
                        onclick={onclick_check.clone()}
                        disabled={availability == Availability::Checking
                            || session.scheduled_start().is_none()}
                    >
                        { if availability == Availability::Checking { "Checking..." } else { "Check availability" } }
                    </button>
                    { availability_badge(availability) }
                </div>
            }) }
        </section>
    }
}

fn availability_badge(availability: Availability) -> Html {
    let (class, text) = match availability {
        Availability::Unchecked => return Html::default(),
        Availability::Checking => ("checkout__availability--checking", "Checking the slot..."),
        Availability::Available => ("checkout__availability--free", "Slot available"),
        Availability::Unavailable => ("checkout__availability--taken", "Slot taken"),
    };
    html! {
        <span class={classes!("checkout__availability", class)}>{ text }</span>
    }
}
