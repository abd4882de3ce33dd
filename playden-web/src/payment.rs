//! Bridge to the third-party mobile-money widget.
//!
//! The provider script is injected globally and exposes a single invocation
//! function plus two process-wide DOM events (`success`/`failure`) instead of
//! a promise API. This module owns its load lifecycle (bounded poll) and
//! scopes the global events to the one payment in flight: listeners exist
//! only between `open()` and resolution, so a stale listener from an earlier
//! checkout can never swallow an event meant for a new one.

use crate::dom;
use playden_shop::checkout::outcome::PaymentSession;
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

const WIDGET_GLOBAL: &str = "launchPaymentWidget";
const SUCCESS_EVENT: &str = "success";
const FAILURE_EVENT: &str = "failure";
const POLL_INTERVAL_MS: i32 = 500;
const POLL_ATTEMPTS: u32 = 20;
const WIDGET_THEME: &str = "dark";

/// Load state of the provider script. `LoadFailed` is terminal for this page
/// life; the only affordance offered is a full reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetStatus {
    #[default]
    Loading,
    Ready,
    LoadFailed,
}

/// Parameter object handed to the provider's global function.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetParams {
    pub amount: u32,
    pub api_key: String,
    pub sandbox: bool,
    pub phone: String,
    pub name: String,
    pub email: String,
    pub data: String,
    pub url: String,
    pub theme: String,
}

impl WidgetParams {
    /// Build the provider parameters from a server-issued payment session.
    /// Customer contact fields stay empty; the widget collects them itself.
    #[must_use]
    pub fn from_session(session: &PaymentSession) -> Self {
        Self {
            amount: session.amount,
            api_key: option_env!("PLAYDEN_WIDGET_KEY").unwrap_or("").to_string(),
            sandbox: cfg!(debug_assertions),
            phone: String::new(),
            name: String::new(),
            email: String::new(),
            data: session.reference.clone(),
            url: session.callback_url.clone(),
            theme: String::from(WIDGET_THEME),
        }
    }
}

/// The widget's verdict, forwarded with the provider detail verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentResolution {
    pub success: bool,
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    #[error("The payment module is not loaded. Reload the page and try again.")]
    NotReady,
    #[error("A payment is already in progress.")]
    Busy,
    #[error("The payment module could not be started: {0}")]
    Invoke(String),
}

fn widget_function() -> Option<js_sys::Function> {
    let window: JsValue = dom::window().into();
    js_sys::Reflect::get(&window, &JsValue::from_str(WIDGET_GLOBAL))
        .ok()
        .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
}

fn event_detail(event: &web_sys::Event) -> Option<String> {
    let detail = event.dyn_ref::<web_sys::CustomEvent>()?.detail();
    detail.as_string().or_else(|| {
        js_sys::JSON::stringify(&detail)
            .ok()
            .map(String::from)
            .filter(|text| text != "null" && text != "undefined")
    })
}

struct WidgetInternals {
    busy: Cell<bool>,
    guard: RefCell<Option<ListenerGuard>>,
}

/// Registered `success`/`failure` listeners for one payment in flight.
/// Dropping the guard deregisters both.
struct ListenerGuard {
    success: Closure<dyn FnMut(web_sys::Event)>,
    failure: Closure<dyn FnMut(web_sys::Event)>,
}

impl ListenerGuard {
    fn register(
        internals: Rc<WidgetInternals>,
        on_resolved: Callback<PaymentResolution>,
    ) -> Result<Self, JsValue> {
        let resolved = Rc::new(Cell::new(false));
        let make_listener = |success: bool| {
            let resolved = resolved.clone();
            let internals = internals.clone();
            let on_resolved = on_resolved.clone();
            Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
                // The first matching event after open() is authoritative.
                if resolved.replace(true) {
                    return;
                }
                internals.busy.set(false);
                on_resolved.emit(PaymentResolution {
                    success,
                    detail: event_detail(&event),
                });
                // Teardown is deferred one tick: a closure must not be
                // dropped from inside its own invocation.
                let internals = internals.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    internals.guard.borrow_mut().take();
                });
            })
        };

        let success = make_listener(true);
        let failure = make_listener(false);
        let window = dom::window();
        window.add_event_listener_with_callback(SUCCESS_EVENT, success.as_ref().unchecked_ref())?;
        window.add_event_listener_with_callback(FAILURE_EVENT, failure.as_ref().unchecked_ref())?;
        Ok(Self { success, failure })
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                SUCCESS_EVENT,
                self.success.as_ref().unchecked_ref(),
            );
            let _ = window.remove_event_listener_with_callback(
                FAILURE_EVENT,
                self.failure.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Handle returned by [`use_payment_widget`]; cheap to clone into callbacks.
#[derive(Clone)]
pub struct PaymentWidgetHandle {
    status: UseStateHandle<WidgetStatus>,
    internals: Rc<WidgetInternals>,
}

impl PartialEq for PaymentWidgetHandle {
    fn eq(&self, other: &Self) -> bool {
        *self.status == *other.status && Rc::ptr_eq(&self.internals, &other.internals)
    }
}

impl PaymentWidgetHandle {
    #[must_use]
    pub fn status(&self) -> WidgetStatus {
        *self.status
    }

    /// Invoke the provider widget for one payment.
    ///
    /// Registers the event listeners, calls the global function, and arranges
    /// for `on_resolved` to fire exactly once with the provider's verdict.
    ///
    /// # Errors
    ///
    /// `NotReady` when the script is not loaded (the caller shows the reload
    /// notice instead of crashing), `Busy` while a previous `open` has not
    /// resolved (the duplicate is dropped, no second payment sheet), or
    /// `Invoke` when the provider function rejects the call.
    pub fn open(
        &self,
        params: &WidgetParams,
        on_resolved: Callback<PaymentResolution>,
    ) -> Result<(), WidgetError> {
        if *self.status != WidgetStatus::Ready {
            return Err(WidgetError::NotReady);
        }
        if self.internals.busy.get() {
            return Err(WidgetError::Busy);
        }
        let function = widget_function().ok_or(WidgetError::NotReady)?;
        let params_value = serde_wasm_bindgen::to_value(params)
            .map_err(|err| WidgetError::Invoke(err.to_string()))?;

        let guard = ListenerGuard::register(self.internals.clone(), on_resolved)
            .map_err(|err| WidgetError::Invoke(dom::js_error_message(&err)))?;
        if let Err(err) = function.call1(&JsValue::UNDEFINED, &params_value) {
            drop(guard);
            return Err(WidgetError::Invoke(dom::js_error_message(&err)));
        }
        self.internals.busy.set(true);
        *self.internals.guard.borrow_mut() = Some(guard);
        Ok(())
    }

    /// Tear down any armed listeners without resolving the payment. Called
    /// when the checkout that armed them goes away; the provider sheet is
    /// not touched, only our interest in its events ends.
    pub fn cancel(&self) {
        self.internals.busy.set(false);
        self.internals.guard.borrow_mut().take();
    }
}

/// Poll for the provider script and expose the widget to the component.
///
/// The script is loaded asynchronously by the host page; its presence is
/// polled every 500ms for up to 20 attempts before giving up for this page
/// life.
#[hook]
pub fn use_payment_widget() -> PaymentWidgetHandle {
    let status = use_state(WidgetStatus::default);
    let internals = use_memo((), |()| WidgetInternals {
        busy: Cell::new(false),
        guard: RefCell::new(None),
    });

    {
        let status = status.clone();
        use_effect_with((), move |()| {
            wasm_bindgen_futures::spawn_local(async move {
                for attempt in 0..POLL_ATTEMPTS {
                    if widget_function().is_some() {
                        status.set(WidgetStatus::Ready);
                        return;
                    }
                    if attempt + 1 < POLL_ATTEMPTS
                        && dom::sleep_ms(POLL_INTERVAL_MS).await.is_err()
                    {
                        break;
                    }
                }
                log::error!("payment widget script never became ready");
                status.set(WidgetStatus::LoadFailed);
            });
            || ()
        });
    }

    PaymentWidgetHandle { status, internals }
}
