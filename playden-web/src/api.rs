//! Thin fetch client for the shop API. One request per call, no retries and
//! no caching; every explicit user action re-queries.

use crate::dom;
use crate::paths;
use playden_shop::catalog::{Game, GameEnvelope, PaymentMethod, PaymentMethodsEnvelope};
use playden_shop::checkout::outcome::{AvailabilityQuery, CreatePurchaseResponse, PurchaseRequest};
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("The request could not be sent: {0}")]
    Network(String),
    #[error("The server responded with status {status}.")]
    Http { status: u16 },
    #[error("The server response could not be read: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<JsValue> for ApiError {
    fn from(value: JsValue) -> Self {
        Self::Network(dom::js_error_message(&value))
    }
}

#[derive(Debug, Deserialize)]
struct AvailabilityEnvelope {
    available: bool,
}

#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
async fn get_text(url: &str) -> Result<String, ApiError> {
    let response = dom::fetch_response(url).await?;
    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
        });
    }
    Ok(dom::response_text(&response).await?)
}

/// Fetch one game with its packages.
///
/// # Errors
/// Fails on network errors, non-2xx statuses, or a malformed body.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_game(id: u32) -> Result<Game, ApiError> {
    let url = paths::api_path(&format!("shop/games.php?id={id}"));
    let body = get_text(&url).await?;
    Ok(GameEnvelope::from_json(&body)?.game)
}

/// Fetch the payment methods offered for checkout.
///
/// # Errors
/// Fails on network errors, non-2xx statuses, or a malformed body.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_payment_methods() -> Result<Vec<PaymentMethod>, ApiError> {
    let url = paths::api_path("shop/payment_methods.php");
    let body = get_text(&url).await?;
    Ok(PaymentMethodsEnvelope::from_json(&body)?.payment_methods)
}

/// Ask the backend whether the scheduled slot is free. Single attempt; a
/// failure here is surfaced to the caller, never folded into the answer.
///
/// # Errors
/// Fails on network errors, non-2xx statuses, or a malformed body.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn check_availability(query: &AvailabilityQuery) -> Result<bool, ApiError> {
    let start = js_sys::encode_uri_component(&query.scheduled_start);
    let url = paths::api_path(&format!(
        "shop/check_availability.php?game_id={}&package_id={}&scheduled_start={}",
        query.game_id, query.package_id, start
    ));
    let body = get_text(&url).await?;
    let envelope: AvailabilityEnvelope = serde_json::from_str(&body)?;
    Ok(envelope.available)
}

/// Send the one create-purchase call for a checkout attempt. The caller
/// guarantees no concurrent invocation.
///
/// # Errors
/// Fails on network errors, non-2xx statuses, or a malformed body.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn create_purchase(request: &PurchaseRequest) -> Result<CreatePurchaseResponse, ApiError> {
    let url = paths::api_path("shop/create_purchase.php");
    let body = serde_json::to_string(request)?;
    let response = dom::post_json(&url, &body).await?;
    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
        });
    }
    let text = dom::response_text(&response).await?;
    Ok(CreatePurchaseResponse::from_json(&text)?)
}
