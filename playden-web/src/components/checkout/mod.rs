//! Checkout dialog: one `CheckoutSession` per opening, from package tile to
//! settlement or dismissal.
//!
//! The session state machine lives in `playden-shop`; this component owns
//! the async edges (availability check, create-purchase call, payment
//! widget) and feeds their results back through the machine's `resolve_*`
//! operations.

mod handlers;
mod state;
mod view;

pub use state::{CheckoutProps, Notice, NoticeKind, format_amount};

use crate::components::modal::Modal;
use crate::payment::use_payment_widget;
use playden_shop::checkout::CheckoutSession;
use state::CheckoutHandles;
use yew::prelude::*;
use yew_router::prelude::*;

fn new_session(props: &CheckoutProps) -> CheckoutSession {
    let mut session = CheckoutSession::new(props.game.clone(), props.methods.clone());
    if let Err(err) = session.select_package(props.package_id) {
        log::error!(
            "checkout opened for unpurchasable package {}: {err}",
            props.package_id
        );
    }
    session
}

#[function_component(CheckoutDialog)]
pub fn checkout_dialog(props: &CheckoutProps) -> Html {
    let session = use_state(|| new_session(props));
    let notice = use_state(|| Option::<state::Notice>::None);
    let widget = use_payment_widget();
    let navigator = use_navigator();
    let epoch = use_mut_ref(|| 0_u64);

    {
        // Re-arm the session when another tile opens the dialog.
        let session = session.clone();
        use_effect_with(props.package_id, move |package_id| {
            let mut next = (*session).clone();
            if next.package().map(|pkg| pkg.id) != Some(*package_id)
                && next.select_package(*package_id).is_ok()
            {
                session.set(next);
            }
            || ()
        });
    }

    {
        // Disarm the payment listeners when the dialog goes away.
        let widget = widget.clone();
        use_effect_with((), move |()| move || widget.cancel());
    }

    let handles = CheckoutHandles {
        session: session.clone(),
        notice: notice.clone(),
        widget: widget.clone(),
        navigator,
        epoch,
    };

    let on_close = {
        let handles = handles.clone();
        let cb = props.on_close.clone();
        Callback::from(move |()| {
            // Abandon the UI effects of anything still in flight.
            handles.abandon();
            cb.emit(());
        })
    };
    let on_toggle = {
        let handles = handles.clone();
        Callback::from(move |on: bool| handlers::handle_toggle_reservation(&handles, on))
    };
    let on_schedule = {
        let handles = handles.clone();
        Callback::from(move |value: String| handlers::handle_schedule_input(&handles, value))
    };
    let on_check = {
        let handles = handles.clone();
        Callback::from(move |()| handlers::handle_check_availability(&handles))
    };
    let on_select_method = {
        let handles = handles.clone();
        Callback::from(move |id: u32| handlers::handle_select_method(&handles, id))
    };
    let on_submit = {
        let handles = handles.clone();
        Callback::from(move |()| handlers::handle_submit(&handles))
    };
    let on_reload = Callback::from(|()| {
        let _ = crate::dom::window().location().reload();
    });

    let title = AttrValue::from(format!("Checkout - {}", props.game.name));
    let return_focus = AttrValue::from(format!("package-{}", props.package_id));

    html! {
        <Modal open={true} title={title} on_close={on_close} return_focus_id={Some(return_focus)}>
            { view::summary::render_summary(&session) }
            { view::schedule::render_schedule(&session, &on_toggle, &on_schedule, &on_check) }
            { view::methods::render_methods(&session, &on_select_method) }
            { render_notice(&notice) }
            { view::methods::render_actions(&session, widget.status(), &on_submit, &on_reload) }
        </Modal>
    }
}

fn render_notice(notice: &Option<Notice>) -> Html {
    notice
        .as_ref()
        .map(|notice| {
            let class = match notice.kind {
                NoticeKind::Error => "checkout__notice checkout__notice--error",
                NoticeKind::Info => "checkout__notice checkout__notice--info",
            };
            html! { <p class={class} role="alert">{ notice.text.clone() }</p> }
        })
        .unwrap_or_default()
}
