use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::CustomEvent;
use yew::prelude::*;

use playden_shop::checkout::outcome::PaymentSession;
use playden_web::dom;
use playden_web::payment::{
    PaymentResolution, PaymentWidgetHandle, WidgetParams, WidgetStatus, use_payment_widget,
};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

thread_local! {
    static HANDLE: RefCell<Option<PaymentWidgetHandle>> = const { RefCell::new(None) };
}

#[function_component(WidgetProbe)]
fn widget_probe() -> Html {
    let widget = use_payment_widget();
    HANDLE.with(|slot| *slot.borrow_mut() = Some(widget.clone()));
    html! { <span id="widget-status">{ format!("{:?}", widget.status()) }</span> }
}

fn install_widget_stub() {
    let window: JsValue = dom::window().into();
    let stub = js_sys::Function::new_no_args("");
    js_sys::Reflect::set(&window, &JsValue::from_str("launchPaymentWidget"), &stub)
        .expect("install widget stub");
}

fn render_probe() {
    let doc = dom::document();
    let root = doc.create_element("div").expect("create root");
    doc.body().expect("body").append_child(&root).expect("append root");
    yew::Renderer::<WidgetProbe>::with_root(root).render();
}

fn probe_handle() -> PaymentWidgetHandle {
    HANDLE.with(|slot| slot.borrow().clone()).expect("probe rendered")
}

fn session() -> PaymentSession {
    PaymentSession {
        provider: String::from("mobilepay"),
        amount: 5500,
        currency: String::from("XAF"),
        reference: String::from("PD-2041"),
        callback_url: String::from("https://lounge.example/pay/confirm"),
    }
}

#[wasm_bindgen_test]
async fn widget_becomes_ready_once_the_global_appears() {
    install_widget_stub();
    render_probe();
    dom::sleep_ms(600).await.expect("sleep");
    assert_eq!(probe_handle().status(), WidgetStatus::Ready);
}

#[wasm_bindgen_test]
async fn first_event_wins_and_duplicates_are_ignored() {
    install_widget_stub();
    render_probe();
    dom::sleep_ms(600).await.expect("sleep");

    let resolutions = Rc::new(RefCell::new(Vec::<PaymentResolution>::new()));
    let on_resolved = {
        let resolutions = resolutions.clone();
        Callback::from(move |resolution: PaymentResolution| {
            resolutions.borrow_mut().push(resolution);
        })
    };

    let handle = probe_handle();
    handle
        .open(&WidgetParams::from_session(&session()), on_resolved)
        .expect("open widget");
    // A second open before resolution is dropped, not a second sheet.
    assert!(
        handle
            .open(&WidgetParams::from_session(&session()), Callback::noop())
            .is_err()
    );

    let window = dom::window();
    let event = CustomEvent::new("success").expect("success event");
    window.dispatch_event(&event).expect("dispatch success");
    let late = CustomEvent::new("failure").expect("failure event");
    window.dispatch_event(&late).expect("dispatch failure");
    dom::sleep_ms(50).await.expect("sleep");

    let resolutions = resolutions.borrow();
    assert_eq!(resolutions.len(), 1);
    assert!(resolutions[0].success);
}
