use super::super::state::CheckoutHandles;
use crate::{a11y, api};
use playden_shop::checkout::outcome::AvailabilityResult;
use playden_shop::checkout::{Availability, CheckoutError};

/// Run one availability check for the scheduled slot. A click while a check
/// is in flight is dropped.
pub fn handle_check_availability(handles: &CheckoutHandles) {
    let mut next = (*handles.session).clone();
    let query = match next.begin_availability_check() {
        Ok(query) => query,
        Err(CheckoutError::CheckBusy) => return,
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
        let result = match api::check_availability(&query).await {
            Ok(free) => AvailabilityResult::from_response(free),
            Err(err) => {
                log::error!("availability check failed: {err}");
                AvailabilityResult::Errored
            }
        };
        if handles.is_stale(epoch) {
            return;
        }
        let mut next = (*handles.session).clone();
        next.resolve_availability(result);
        handles.session.set(next.clone());
        match next.availability() {
            Availability::Available => a11y::set_status("The slot is available."),
            Availability::Unavailable => {
                handles.show_error("That slot is already taken. Pick another time.");
            }
            Availability::Unchecked => {
                handles.show_error("The availability check failed. Please try again.");
            }
            Availability::Checking => {}
        }
    });
}
