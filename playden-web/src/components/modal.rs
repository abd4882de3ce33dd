use crate::a11y::{restore_focus, trap_focus_in};
use std::sync::atomic::{AtomicUsize, Ordering};
use yew::prelude::*;

static DIALOG_IDS: AtomicUsize = AtomicUsize::new(0);

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    /// Element to focus again once the dialog closes.
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Accessible dialog shell: backdrop click and Escape close it, focus moves
/// inside on open and returns to the opener on close.
#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    if !props.open {
        return Html::default();
    }

    let dialog_id = use_state(|| DIALOG_IDS.fetch_add(1, Ordering::Relaxed));
    let container_id = format!("dialog-{}", *dialog_id);
    let title_id = format!("dialog-title-{}", *dialog_id);
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();
        let container_id = container_id.clone();
        let return_focus = props.return_focus_id.clone();
        use_effect_with((props.open, return_focus), move |(is_open, return_focus_id)| {
            if *is_open {
                if let Some(el) = container_ref.cast::<web_sys::HtmlElement>() {
                    let _ = el.set_attribute("tabindex", "-1");
                    let _ = el.focus();
                }
                trap_focus_in(&container_id);
            }
            let return_focus_id = return_focus_id.clone();
            move || {
                if let Some(id) = return_focus_id.as_ref() {
                    restore_focus(id);
                }
            }
        });
    }

    let on_backdrop_click = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    // Clicks inside the dialog must not reach the backdrop.
    let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_close = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_keydown = {
        let cb = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };

    html! {
        <div class="dialog-backdrop" role="presentation" onclick={on_backdrop_click}>
            <div
                id={container_id.clone()}
                class="dialog"
                role="dialog"
                aria-modal="true"
                aria-labelledby={title_id.clone()}
                onclick={swallow_click}
                onkeydown={on_keydown}
                ref={container_ref}
            >
                <div class="dialog__header">
                    <h2 id={title_id}>{ props.title.clone() }</h2>
                    <button type="button" class="dialog__close" aria-label="Close dialog" onclick={on_close}>
                        {"X"}
                    </button>
                </div>
                <div class="dialog__body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
