//! web-sys bindings of the form logic.

pub mod send_code;
pub mod toggle;
pub mod transport;

use gloo_console as console;
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, SvgElement};

/// `document.readyState` while the page is still being parsed.
fn still_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// Runs `init` once the document is parsed.
pub fn on_ready(init: impl FnOnce() + 'static) {
    let document = gloo_utils::document();

    if still_loading(&document.ready_state()) {
        EventListener::once(&document, "DOMContentLoaded", move |_| init()).forget();
    } else {
        init();
    }
}

pub fn element_by_id<T: JsCast>(id: &str) -> Option<T> {
    gloo_utils::document()
        .get_element_by_id(id)?
        .dyn_into::<T>()
        .ok()
}

/// Non-empty `data-*` value of an element.
pub fn data_value(element: &HtmlElement, key: &str) -> Option<String> {
    element.dataset().get(key).filter(|value| !value.is_empty())
}

// Icons are usually inline SVG, which has no HtmlElement style
pub fn set_display(element: &Element, display: &str) {
    let style = if let Some(element) = element.dyn_ref::<HtmlElement>() {
        element.style()
    } else if let Some(element) = element.dyn_ref::<SvgElement>() {
        element.style()
    } else {
        return;
    };

    if let Err(err) = style.set_property("display", display) {
        console::error!("setting display failed", err);
    }
}
