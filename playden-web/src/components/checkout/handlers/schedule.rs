use super::super::state::CheckoutHandles;
use playden_shop::checkout::Slot;

pub fn handle_toggle_reservation(handles: &CheckoutHandles, on: bool) {
    let mut next = (*handles.session).clone();
    match next.toggle_reservation(on) {
        Ok(()) => {
            handles.clear_notice();
            handles.session.set(next);
        }
        Err(err) => handles.show_error(err.to_string()),
    }
}

/// Apply a `datetime-local` input value as the candidate start time.
pub fn handle_schedule_input(handles: &CheckoutHandles, value: String) {
    if value.is_empty() {
        return;
    }
    let epoch_ms = js_sys::Date::parse(&value);
    if epoch_ms.is_nan() {
        handles.show_error("Enter a valid date and time.");
        return;
    }
    let mut next = (*handles.session).clone();
    match next.set_scheduled_start(Slot { epoch_ms, wire: value }, js_sys::Date::now()) {
        Ok(()) => {
            handles.clear_notice();
            handles.session.set(next);
        }
        Err(err) => handles.show_error(err.to_string()),
    }
}
