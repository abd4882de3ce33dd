use super::super::state::CheckoutHandles;
use super::submit::finish_settled;
use crate::a11y;
use crate::payment::PaymentResolution;
use playden_shop::checkout::SubmitState;

/// Apply the widget's verdict to the session.
pub fn handle_payment_resolved(handles: &CheckoutHandles, resolution: &PaymentResolution) {
    let mut next = (*handles.session).clone();
    next.resolve_payment(resolution.success, resolution.detail.clone());
    handles.session.set(next.clone());
    match next.submit_state() {
        SubmitState::Settled { reservation } => finish_settled(handles, *reservation),
        SubmitState::Failed { message } => {
            a11y::set_status("Payment failed.");
            handles.show_error(message.clone());
        }
        _ => {}
    }
}
