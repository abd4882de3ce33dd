#![forbid(unsafe_code)]
//! Domain logic for the Playden lounge storefront.
//!
//! Holds the catalog wire model and the checkout state machine. Nothing in
//! this crate touches the network or the DOM; every suspending step is split
//! into a `begin_*` guard and a `resolve_*` application so the web layer can
//! own the actual awaiting while the machine stays synchronous and testable.

pub mod catalog;
pub mod checkout;

pub use catalog::{Game, Package, PaymentMethod};
pub use checkout::outcome::{
    AvailabilityQuery, AvailabilityResult, CreatePurchaseResponse, PaymentSession,
    PurchaseRequest, SubmitOutcome,
};
pub use checkout::{Availability, CheckoutError, CheckoutSession, Slot, SubmitState};
