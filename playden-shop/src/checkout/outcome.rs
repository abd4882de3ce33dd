//! Wire shapes for the two suspending checkout calls and the interpretation
//! of the create-purchase response into the session's next transition.

use serde::{Deserialize, Serialize};

/// Query for `GET /shop/check_availability.php`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailabilityQuery {
    pub game_id: u32,
    pub package_id: u32,
    pub scheduled_start: String,
}

/// Outcome of one availability check as seen by the session.
///
/// A failed call is `Errored`, never folded into free/taken: the session
/// returns to `Unchecked` so the user can retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityResult {
    Free,
    Taken,
    Errored,
}

impl AvailabilityResult {
    #[must_use]
    pub const fn from_response(available: bool) -> Self {
        if available { Self::Free } else { Self::Taken }
    }
}

/// Body for `POST /shop/create_purchase.php`. `scheduled_start` is omitted
/// entirely for immediate sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseRequest {
    pub game_id: u32,
    pub package_id: u32,
    pub payment_method_id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_start: Option<String>,
}

/// Server-issued descriptor handed to the external payment widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSession {
    pub provider: String,
    pub amount: u32,
    pub currency: String,
    pub reference: String,
    pub callback_url: String,
}

/// Raw response of `POST /shop/create_purchase.php`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatePurchaseResponse {
    pub success: bool,
    #[serde(default)]
    pub reservation: bool,
    #[serde(default)]
    pub next_step: Option<String>,
    #[serde(default)]
    pub payment_data: Option<PaymentSession>,
    #[serde(default)]
    pub error: Option<String>,
}

impl CreatePurchaseResponse {
    /// Parse a create-purchase response body.
    ///
    /// # Errors
    ///
    /// Returns an error when the body is not a valid response shape.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

const STEP_COMPLETE_PAYMENT: &str = "complete_payment";
const FALLBACK_REJECTION: &str = "The purchase could not be completed.";
const MISSING_PAYMENT_DATA: &str = "The server did not provide payment details.";

/// The session's next transition, derived from the server response.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Completed {
        reservation: bool,
    },
    PendingOnlinePayment {
        reservation: bool,
        session: PaymentSession,
    },
    /// Server declined; the reason is shown to the user verbatim.
    Rejected {
        reason: String,
    },
}

impl SubmitOutcome {
    #[must_use]
    pub fn from_response(response: CreatePurchaseResponse) -> Self {
        if !response.success {
            return Self::Rejected {
                reason: response
                    .error
                    .unwrap_or_else(|| String::from(FALLBACK_REJECTION)),
            };
        }
        if response.next_step.as_deref() == Some(STEP_COMPLETE_PAYMENT) {
            return match response.payment_data {
                Some(session) => Self::PendingOnlinePayment {
                    reservation: response.reservation,
                    session,
                },
                // A payment step with no descriptor cannot be acted on.
                None => Self::Rejected {
                    reason: String::from(MISSING_PAYMENT_DATA),
                },
            };
        }
        Self::Completed {
            reservation: response.reservation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completed_purchase_without_payment_step() {
        let response = CreatePurchaseResponse::from_json(r#"{ "success": true }"#).unwrap();
        assert_eq!(
            SubmitOutcome::from_response(response),
            SubmitOutcome::Completed { reservation: false }
        );
    }

    #[test]
    fn completed_reservation_carries_the_flag() {
        let response =
            CreatePurchaseResponse::from_json(r#"{ "success": true, "reservation": true }"#)
                .unwrap();
        assert_eq!(
            SubmitOutcome::from_response(response),
            SubmitOutcome::Completed { reservation: true }
        );
    }

    #[test]
    fn pending_payment_keeps_descriptor_and_reservation_flag() {
        let response = CreatePurchaseResponse::from_json(
            r#"{
                "success": true,
                "reservation": true,
                "next_step": "complete_payment",
                "payment_data": {
                    "provider": "mobilepay",
                    "amount": 5500,
                    "currency": "XAF",
                    "reference": "PD-2041",
                    "callback_url": "https://lounge.example/pay/confirm"
                }
            }"#,
        )
        .unwrap();

        match SubmitOutcome::from_response(response) {
            SubmitOutcome::PendingOnlinePayment {
                reservation,
                session,
            } => {
                assert!(reservation);
                assert_eq!(session.amount, 5500);
                assert_eq!(session.reference, "PD-2041");
            }
            other => panic!("expected pending payment, got {other:?}"),
        }
    }

    #[test]
    fn rejection_preserves_server_message_verbatim() {
        let response = CreatePurchaseResponse::from_json(
            r#"{ "success": false, "error": "Slot was taken a moment ago." }"#,
        )
        .unwrap();
        assert_eq!(
            SubmitOutcome::from_response(response),
            SubmitOutcome::Rejected {
                reason: String::from("Slot was taken a moment ago.")
            }
        );
    }

    #[test]
    fn rejection_without_message_uses_fallback() {
        let response = CreatePurchaseResponse::from_json(r#"{ "success": false }"#).unwrap();
        match SubmitOutcome::from_response(response) {
            SubmitOutcome::Rejected { reason } => assert!(!reason.is_empty()),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn payment_step_without_descriptor_is_rejected() {
        let response = CreatePurchaseResponse::from_json(
            r#"{ "success": true, "next_step": "complete_payment" }"#,
        )
        .unwrap();
        assert!(matches!(
            SubmitOutcome::from_response(response),
            SubmitOutcome::Rejected { .. }
        ));
    }

    #[test]
    fn purchase_request_omits_absent_schedule() {
        let immediate = PurchaseRequest {
            game_id: 7,
            package_id: 71,
            payment_method_id: 2,
            scheduled_start: None,
        };
        let body = serde_json::to_string(&immediate).unwrap();
        assert!(!body.contains("scheduled_start"));

        let scheduled = PurchaseRequest {
            scheduled_start: Some(String::from("2026-08-09T18:00")),
            ..immediate
        };
        let body = serde_json::to_string(&scheduled).unwrap();
        assert!(body.contains(r#""scheduled_start":"2026-08-09T18:00""#));
    }

    #[test]
    fn availability_result_maps_the_boolean() {
        assert_eq!(AvailabilityResult::from_response(true), AvailabilityResult::Free);
        assert_eq!(AvailabilityResult::from_response(false), AvailabilityResult::Taken);
    }
}
