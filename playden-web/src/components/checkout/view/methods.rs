use super::super::state::format_amount;
use crate::payment::WidgetStatus;
use playden_shop::checkout::{CheckoutSession, SubmitState};
use yew::prelude::*;

pub fn render_methods(session: &CheckoutSession, on_select: &Callback<u32>) -> Html {
    html! {
        <section class="checkout__methods">
            <h3>{ "Payment method" }</h3>
            { for session.methods().iter().map(|method| {
                let onchange = {
                    let cb = on_select.clone();
                    let id = method.id;
                    Callback::from(move |_: Event| cb.emit(id))
                };
                let selected = session
                    .selected_method()
                    .is_some_and(|chosen| chosen.id == method.id);
                html! {
                    <label class="checkout__method">
                        <input
                            type="radio"
                            name="payment-method"
                            checked={selected}
                            onchange={onchange}
                        />
                        { &method.name }
                        { method.requires_online_payment.then(|| html! {
                            <span class="checkout__online-hint">{ "pays online" }</span>
                        }) }
                    </label>
                }
            }) }
            { session.selected_method().and_then(|m| m.instructions.clone()).map(|text| html! {
                <p class="checkout__instructions">{ text }</p>
            }) }
        </section>
    }
}

/// The submit affordance and the terminal-state copy.
pub fn render_actions(
    session: &CheckoutSession,
    widget_status: WidgetStatus,
    on_submit: &Callback<()>,
    on_reload: &Callback<()>,
) -> Html {
    match session.submit_state() {
        SubmitState::Settled { reservation } => {
            let text = if *reservation {
                "Reservation confirmed! Taking you to your reservations."
            } else {
                "Purchase confirmed! Taking you to your purchases."
            };
            return html! { <p class="checkout__settled">{ text }</p> };
        }
        SubmitState::AwaitingOnlinePayment { .. } => {
            return html! {
                <p class="checkout__awaiting">
                    { "Complete the payment in the provider window to finish." }
                </p>
            };
        }
        SubmitState::Idle | SubmitState::Submitting | SubmitState::Failed { .. } => {}
    }

    let needs_widget = session
        .selected_method()
        .is_some_and(|method| method.requires_online_payment);

    // The widget never became ready: the pay affordance is replaced by a
    // full-page reload, the only remedy left for this page life.
    if needs_widget && widget_status == WidgetStatus::LoadFailed {
        let onclick = {
            let cb = on_reload.clone();
            Callback::from(move |_: MouseEvent| cb.emit(()))
        };
        return html! {
            <div class="checkout__widget-failed">
                <p>{ "The payment module is not loaded. Reload the page and try again." }</p>
                <button type="button" class="checkout__reload" onclick={onclick}>
                    { "Reload page" }
                </button>
            </div>
        };
    }

    let submitting = matches!(session.submit_state(), SubmitState::Submitting);
    let label = if submitting {
        String::from("Processing...")
    } else {
        match session.total_due() {
            Some(total) => format!("Pay {}", format_amount(total)),
            None => String::from("Pay"),
        }
    };
    let onclick = {
        let cb = on_submit.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <button
            type="button"
            class="checkout__submit"
            onclick={onclick}
            disabled={!session.can_submit()
                || submitting
                || (needs_widget && widget_status != WidgetStatus::Ready)}
        >
            { label }
        </button>
    }
}
