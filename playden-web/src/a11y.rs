// Accessibility helpers

use wasm_bindgen::JsCast;

/// Update the live region status for screen readers
///
/// Updates the text content of the #checkout-status element if present.
/// This provides announcements to assistive technology users.
pub fn set_status(msg: &str) {
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id("checkout-status"))
    {
        node.set_text_content(Some(msg));
    }
}

/// Move focus to the first focusable element inside the given container.
///
/// Called when a dialog opens so keyboard users land inside it.
pub fn trap_focus_in(container_id: &str) {
    let Some(container) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(container_id))
    else {
        return;
    };
    let selector = "button, [href], input, select, textarea, [tabindex]:not([tabindex='-1'])";
    if let Ok(Some(first)) = container.query_selector(selector) {
        let _ = first
            .dyn_into::<web_sys::HtmlElement>()
            .ok()
            .map(|el| el.focus());
    }
}

/// Return focus to the element that opened a dialog.
pub fn restore_focus(id: &str) {
    if let Some(el) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}
