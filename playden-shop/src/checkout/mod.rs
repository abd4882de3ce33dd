//! The checkout state machine.
//!
//! One `CheckoutSession` governs one checkout attempt, from package selection
//! to settlement. The browser delivers every network response through a
//! callback, so the machine is pure and synchronous: each suspending step is
//! a `begin_*` guard that validates, flips the busy state and hands back the
//! request to perform, paired with a `resolve_*` that applies the response.
//! Duplicate `begin_*` calls while a step is in flight are refused, never
//! queued; stale `resolve_*` calls are dropped.

pub mod outcome;

use crate::catalog::{Game, Package, PaymentMethod};
use outcome::{AvailabilityQuery, AvailabilityResult, PaymentSession, PurchaseRequest, SubmitOutcome};
use thiserror::Error;

/// Result of the slot availability step for the currently scheduled start.
///
/// Changing the start always resets this to `Unchecked`; a stale `Available`
/// must never survive a time change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Availability {
    #[default]
    Unchecked,
    Checking,
    Available,
    Unavailable,
}

/// Submission lifecycle of the session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    AwaitingOnlinePayment {
        reservation: bool,
    },
    Settled {
        reservation: bool,
    },
    Failed {
        message: String,
    },
}

/// A candidate start time: the raw `datetime-local` value as typed plus its
/// epoch milliseconds for the strictly-in-the-future guard.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    pub epoch_ms: f64,
    pub wire: String,
}

/// Local guard failures. None of these ever reach the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("You have reached the purchase limit for this package.")]
    PurchaseLimitReached,
    #[error("That package is not part of this game.")]
    UnknownPackage,
    #[error("This game does not take reservations.")]
    NotReservable,
    #[error("Turn on reservation mode to pick a start time.")]
    ReservationOff,
    #[error("The start time must be in the future.")]
    StartNotInFuture,
    #[error("Select a package first.")]
    NoPackageSelected,
    #[error("Pick a start time first.")]
    NoScheduledStart,
    #[error("An availability check is already running.")]
    CheckBusy,
    #[error("That payment method is not offered here.")]
    UnknownPaymentMethod,
    #[error("Select a payment method first.")]
    NoPaymentMethod,
    #[error("Check that the slot is available before paying.")]
    SlotNotVerified,
    #[error("Your order is already being processed.")]
    SubmitBusy,
}

/// The state of one checkout attempt. Created when a package tile is
/// clicked, discarded on dismissal or settlement; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSession {
    game: Game,
    methods: Vec<PaymentMethod>,
    selected_package: Option<u32>,
    reservation_mode: bool,
    scheduled_start: Option<Slot>,
    availability: Availability,
    selected_method: Option<u32>,
    submit_state: SubmitState,
    payment_session: Option<PaymentSession>,
}

impl CheckoutSession {
    #[must_use]
    pub fn new(game: Game, methods: Vec<PaymentMethod>) -> Self {
        Self {
            game,
            methods,
            selected_package: None,
            reservation_mode: false,
            scheduled_start: None,
            availability: Availability::Unchecked,
            selected_method: None,
            submit_state: SubmitState::default(),
            payment_session: None,
        }
    }

    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub fn methods(&self) -> &[PaymentMethod] {
        &self.methods
    }

    #[must_use]
    pub fn package(&self) -> Option<&Package> {
        self.selected_package.and_then(|id| self.game.package(id))
    }

    #[must_use]
    pub fn reservation_mode(&self) -> bool {
        self.reservation_mode
    }

    #[must_use]
    pub fn scheduled_start(&self) -> Option<&Slot> {
        self.scheduled_start.as_ref()
    }

    #[must_use]
    pub fn availability(&self) -> Availability {
        self.availability
    }

    #[must_use]
    pub fn selected_method(&self) -> Option<&PaymentMethod> {
        self.selected_method
            .and_then(|id| self.methods.iter().find(|m| m.id == id))
    }

    #[must_use]
    pub fn submit_state(&self) -> &SubmitState {
        &self.submit_state
    }

    #[must_use]
    pub fn payment_session(&self) -> Option<&PaymentSession> {
        self.payment_session.as_ref()
    }

    /// Select the package this attempt is for.
    ///
    /// Refused when the backend marked the package unpurchasable. On success
    /// reservation mode, the scheduled start, the availability result and the
    /// payment method all return to their empty defaults, so a re-selection
    /// of the same package yields an identical session.
    ///
    /// # Errors
    ///
    /// `UnknownPackage` when the id is not in this game, or
    /// `PurchaseLimitReached` when the package can no longer be purchased.
    pub fn select_package(&mut self, package_id: u32) -> Result<(), CheckoutError> {
        let package = self
            .game
            .package(package_id)
            .ok_or(CheckoutError::UnknownPackage)?;
        if !package.can_purchase {
            return Err(CheckoutError::PurchaseLimitReached);
        }
        self.selected_package = Some(package_id);
        self.reservation_mode = false;
        self.scheduled_start = None;
        self.availability = Availability::Unchecked;
        self.selected_method = None;
        Ok(())
    }

    /// Switch between an immediate session and a scheduled reservation.
    ///
    /// Turning reservation mode off clears the scheduled start and the
    /// availability result.
    ///
    /// # Errors
    ///
    /// `NotReservable` when the game does not take reservations; this is
    /// enforced here regardless of what the UI offered.
    pub fn toggle_reservation(&mut self, on: bool) -> Result<(), CheckoutError> {
        if on && !self.game.is_reservable {
            return Err(CheckoutError::NotReservable);
        }
        self.reservation_mode = on;
        if !on {
            self.scheduled_start = None;
            self.availability = Availability::Unchecked;
        }
        Ok(())
    }

    /// Record the candidate start time. Always resets availability to
    /// `Unchecked`, even when a check for another time already passed.
    ///
    /// # Errors
    ///
    /// `ReservationOff` outside reservation mode, `StartNotInFuture` unless
    /// the slot is strictly after `now_ms`.
    pub fn set_scheduled_start(&mut self, slot: Slot, now_ms: f64) -> Result<(), CheckoutError> {
        if !self.reservation_mode {
            return Err(CheckoutError::ReservationOff);
        }
        if slot.epoch_ms <= now_ms {
            return Err(CheckoutError::StartNotInFuture);
        }
        self.scheduled_start = Some(slot);
        self.availability = Availability::Unchecked;
        Ok(())
    }

    /// Start one availability check for the scheduled slot.
    ///
    /// # Errors
    ///
    /// `ReservationOff` outside reservation mode, `NoPackageSelected` /
    /// `NoScheduledStart` when prerequisites are missing, `CheckBusy` while a
    /// check is already in flight (the duplicate is dropped, not queued).
    pub fn begin_availability_check(&mut self) -> Result<AvailabilityQuery, CheckoutError> {
        if !self.reservation_mode {
            return Err(CheckoutError::ReservationOff);
        }
        let package_id = self
            .selected_package
            .ok_or(CheckoutError::NoPackageSelected)?;
        let slot = self
            .scheduled_start
            .as_ref()
            .ok_or(CheckoutError::NoScheduledStart)?;
        if self.availability == Availability::Checking {
            return Err(CheckoutError::CheckBusy);
        }
        self.availability = Availability::Checking;
        Ok(AvailabilityQuery {
            game_id: self.game.id,
            package_id,
            scheduled_start: slot.wire.clone(),
        })
    }

    /// Apply the result of the in-flight availability check. A result that
    /// arrives when no check is in flight is dropped.
    pub fn resolve_availability(&mut self, result: AvailabilityResult) {
        if self.availability != Availability::Checking {
            return;
        }
        self.availability = match result {
            AvailabilityResult::Free => Availability::Available,
            AvailabilityResult::Taken => Availability::Unavailable,
            // A failed call is neither answer; back to square one for retry.
            AvailabilityResult::Errored => Availability::Unchecked,
        };
    }

    /// Record the chosen payment method.
    ///
    /// # Errors
    ///
    /// `UnknownPaymentMethod` unless the id is among the methods loaded for
    /// this checkout.
    pub fn select_payment_method(&mut self, method_id: u32) -> Result<(), CheckoutError> {
        if !self.methods.iter().any(|m| m.id == method_id) {
            return Err(CheckoutError::UnknownPaymentMethod);
        }
        self.selected_method = Some(method_id);
        Ok(())
    }

    /// Whether `begin_submit` would currently be accepted.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        matches!(
            self.submit_state,
            SubmitState::Idle | SubmitState::Failed { .. }
        ) && self.selected_package.is_some()
            && self.selected_method.is_some()
            && (!self.reservation_mode
                || (self.scheduled_start.is_some()
                    && self.availability == Availability::Available))
    }

    /// Start the one create-purchase call for this attempt.
    ///
    /// # Errors
    ///
    /// `SubmitBusy` unless the session is idle or recovering from a failure
    /// (at most one outstanding create call per session); `NoPackageSelected`
    /// / `NoPaymentMethod` when prerequisites are missing; in reservation
    /// mode additionally `NoScheduledStart` and `SlotNotVerified` unless the
    /// slot was just confirmed available.
    pub fn begin_submit(&mut self) -> Result<PurchaseRequest, CheckoutError> {
        match self.submit_state {
            SubmitState::Idle | SubmitState::Failed { .. } => {}
            _ => return Err(CheckoutError::SubmitBusy),
        }
        let package_id = self
            .selected_package
            .ok_or(CheckoutError::NoPackageSelected)?;
        let payment_method_id = self.selected_method.ok_or(CheckoutError::NoPaymentMethod)?;
        let scheduled_start = if self.reservation_mode {
            let slot = self
                .scheduled_start
                .as_ref()
                .ok_or(CheckoutError::NoScheduledStart)?;
            if self.availability != Availability::Available {
                return Err(CheckoutError::SlotNotVerified);
            }
            Some(slot.wire.clone())
        } else {
            None
        };
        self.submit_state = SubmitState::Submitting;
        self.payment_session = None;
        Ok(PurchaseRequest {
            game_id: self.game.id,
            package_id,
            payment_method_id,
            scheduled_start,
        })
    }

    /// Apply the create-purchase response. An outcome that arrives when no
    /// submission is in flight is dropped.
    pub fn resolve_submit(&mut self, outcome: SubmitOutcome) {
        if self.submit_state != SubmitState::Submitting {
            return;
        }
        match outcome {
            SubmitOutcome::Completed { reservation } => {
                self.submit_state = SubmitState::Settled { reservation };
            }
            SubmitOutcome::PendingOnlinePayment {
                reservation,
                session,
            } => {
                self.payment_session = Some(session);
                self.submit_state = SubmitState::AwaitingOnlinePayment { reservation };
            }
            SubmitOutcome::Rejected { reason } => {
                self.submit_state = SubmitState::Failed { message: reason };
            }
        }
    }

    /// Apply the payment widget's verdict. Dropped unless a payment is
    /// actually awaited, so a stale event from an earlier checkout cannot
    /// move this session.
    pub fn resolve_payment(&mut self, success: bool, detail: Option<String>) {
        let SubmitState::AwaitingOnlinePayment { reservation } = &self.submit_state else {
            return;
        };
        let reservation = *reservation;
        if success {
            self.submit_state = SubmitState::Settled { reservation };
        } else {
            self.payment_session = None;
            self.submit_state = SubmitState::Failed {
                message: detail
                    .unwrap_or_else(|| String::from("The payment was not completed.")),
            };
        }
    }

    /// Exact amount owed: package price plus the reservation fee when
    /// booking a slot.
    #[must_use]
    pub fn total_due(&self) -> Option<u32> {
        let package = self.package()?;
        let fee = if self.reservation_mode {
            self.game.reservation_fee
        } else {
            0
        };
        Some(package.price + fee)
    }

    /// Reservation fee line for display; `None` when the game charges none
    /// or no slot is being booked (the line is omitted, not zero-displayed).
    #[must_use]
    pub fn fee_due(&self) -> Option<u32> {
        (self.reservation_mode && self.game.reservation_fee > 0)
            .then_some(self.game.reservation_fee)
    }
}
