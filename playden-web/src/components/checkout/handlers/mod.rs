mod availability;
mod payment;
mod schedule;
mod submit;

pub use availability::handle_check_availability;
pub use payment::handle_payment_resolved;
pub use schedule::{handle_schedule_input, handle_toggle_reservation};
pub use submit::{handle_select_method, handle_submit};
