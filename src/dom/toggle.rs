use super::{data_value, element_by_id, set_display};
use crate::conf::{
    data, ToggleLabels, ICON_HIDDEN_SELECTOR, ICON_VISIBLE_SELECTOR, TOGGLE_BUTTON_SELECTOR,
};
use crate::toggle::toggle;
use crate::view::{InputMode, ToggleView};

use gloo_console as console;
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement};

pub struct DomToggle {
    button: HtmlElement,
}

impl DomToggle {
    pub fn new(button: HtmlElement) -> Self {
        Self { button }
    }

    // looked up on every click, the target may be rendered later
    fn target(&self) -> Option<HtmlInputElement> {
        let id = data_value(&self.button, data::TARGET)?;
        element_by_id(&id)
    }

    fn icon(&self, selector: &str) -> Option<Element> {
        self.button.query_selector(selector).ok().flatten()
    }
}

impl ToggleView for DomToggle {
    fn target_mode(&self) -> Option<InputMode> {
        self.target()
            .map(|input| InputMode::from_input_type(&input.type_()))
    }

    fn set_target_mode(&self, mode: InputMode) {
        if let Some(input) = self.target() {
            input.set_type(mode.input_type());
        }
    }

    fn labels(&self) -> ToggleLabels {
        ToggleLabels::with_overrides(
            data_value(&self.button, data::LABEL_SHOW),
            data_value(&self.button, data::LABEL_HIDE),
        )
    }

    fn set_label(&self, label: &str) {
        if let Err(err) = self.button.set_attribute("aria-label", label) {
            console::error!("setting aria-label failed", err);
        }
    }

    fn has_icon_pair(&self) -> bool {
        self.icon(ICON_VISIBLE_SELECTOR).is_some() && self.icon(ICON_HIDDEN_SELECTOR).is_some()
    }

    fn set_icon_displays(&self, visible: &str, hidden: &str) {
        if let Some(icon) = self.icon(ICON_VISIBLE_SELECTOR) {
            set_display(&icon, visible);
        }
        if let Some(icon) = self.icon(ICON_HIDDEN_SELECTOR) {
            set_display(&icon, hidden);
        }
    }
}

/// Binds every password toggle button on the page.
///
/// Returns how many buttons were bound.
pub fn bind_password_toggles() -> u32 {
    let buttons = match gloo_utils::document().query_selector_all(TOGGLE_BUTTON_SELECTOR) {
        Ok(buttons) => buttons,
        Err(err) => {
            console::error!("password toggle lookup failed", err);
            return 0;
        }
    };

    let mut bound = 0;
    for index in 0..buttons.length() {
        let Some(button) = buttons
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        else {
            continue;
        };

        let view = DomToggle::new(button.clone());
        EventListener::new(&button, "click", move |_| {
            toggle(&view);
        })
        .forget();
        bound += 1;
    }

    console::log!(format!("password toggles bound: {}", bound));
    bound
}
