use super::super::state::CheckoutHandles;
use super::payment::handle_payment_resolved;
use crate::payment::{PaymentResolution, WidgetParams};
use crate::router::Route;
use crate::{a11y, api, dom};
use playden_shop::checkout::outcome::SubmitOutcome;
use playden_shop::checkout::{CheckoutError, CheckoutSession, SubmitState};
use yew::prelude::*;

/// Delay before leaving a settled checkout, so the confirmation renders.
const SETTLE_REDIRECT_DELAY_MS: i32 = 1500;

pub fn handle_select_method(handles: &CheckoutHandles, method_id: u32) {
    let mut next = (*handles.session).clone();
    match next.select_payment_method(method_id) {
        Ok(()) => {
            handles.clear_notice();
            handles.session.set(next);
        }
        Err(err) => handles.show_error(err.to_string()),
    }
}

/// Fire the one create-purchase call for this attempt. A click while a
/// submission is in flight is dropped.
pub fn handle_submit(handles: &CheckoutHandles) {
    let mut next = (*handles.session).clone();
    let request = match next.begin_submit() {
        Ok(request) => request,
        Err(CheckoutError::SubmitBusy) => return,
        Err(err) => {
            handles.show_error(err.to_string());
            return;
        }
    };
    handles.clear_notice();
    handles.session.set(next);

    let handles = handles.clone();
    let epoch = handles.current_epoch();
    wasm_bindgen_futures::spawn_local(async move {
        let outcome = match api::create_purchase(&request).await {
            Ok(response) => SubmitOutcome::from_response(response),
            Err(err) => {
                log::error!("create purchase failed: {err}");
                SubmitOutcome::Rejected {
                    reason: err.to_string(),
                }
            }
        };
        if handles.is_stale(epoch) {
            return;
        }
        let mut next = (*handles.session).clone();
        next.resolve_submit(outcome);
        handles.session.set(next.clone());
        match next.submit_state() {
            SubmitState::Settled { reservation } => finish_settled(&handles, *reservation),
            SubmitState::AwaitingOnlinePayment { .. } => open_widget(&handles, &next),
            SubmitState::Failed { message } => handles.show_error(message.clone()),
            SubmitState::Idle | SubmitState::Submitting => {}
        }
    });
}

/// Announce settlement and navigate to the matching listing after a short,
/// fixed delay.
pub(super) fn finish_settled(handles: &CheckoutHandles, reservation: bool) {
    a11y::set_status(if reservation {
        "Reservation confirmed."
    } else {
        "Purchase confirmed."
    });
    handles.show_info(if reservation {
        "Reservation confirmed! Taking you to your reservations."
    } else {
        "Purchase confirmed! Taking you to your purchases."
    });

    let handles = handles.clone();
    let epoch = handles.current_epoch();
    wasm_bindgen_futures::spawn_local(async move {
        let _ = dom::sleep_ms(SETTLE_REDIRECT_DELAY_MS).await;
        if handles.is_stale(epoch) {
            return;
        }
        if let Some(navigator) = handles.navigator.as_ref() {
            navigator.push(&Route::for_settlement(reservation));
        }
    });
}

fn open_widget(handles: &CheckoutHandles, session: &CheckoutSession) {
    let Some(descriptor) = session.payment_session() else {
        return;
    };
    let params = WidgetParams::from_session(descriptor);
    let on_resolved = {
        let handles = handles.clone();
        let epoch = handles.current_epoch();
        Callback::from(move |resolution: PaymentResolution| {
            if handles.is_stale(epoch) {
                return;
            }
            handle_payment_resolved(&handles, &resolution);
        })
    };
    if let Err(err) = handles.widget.open(&params, on_resolved) {
        log::error!("payment widget refused to open: {err}");
        handles.show_error(err.to_string());
    }
}
