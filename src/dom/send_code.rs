use super::{data_value, element_by_id};
use super::transport::FetchSender;
use crate::conf::{self, data, ids, SendCodeTexts, STATUS_CLASS, STATUS_ERROR_CLASS, TICK_MS};
use crate::send_code::{begin, submit_attempt, Attempt, Capability, Interception};
use crate::view::{CooldownView, SendCodeView, StatusTone};

use gloo_console as console;
use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::future::IntervalStream;
use wasm_bindgen::JsValue;
use web_sys::{HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement};

impl Capability {
    /// Background requests need `window.fetch`.
    pub fn detect() -> Self {
        let supported = web_sys::window()
            .and_then(|window| js_sys::Reflect::has(&window, &JsValue::from_str("fetch")).ok())
            .unwrap_or(false);

        if supported {
            Self::Supported
        } else {
            Self::Unsupported
        }
    }
}

/// The verification-code form and the elements it drives.
#[derive(Clone)]
pub struct DomSendCodeForm {
    form: HtmlFormElement,
    email: Option<HtmlInputElement>,
    email_confirm: Option<HtmlInputElement>,
    status: Option<HtmlElement>,
    hint: Option<HtmlElement>,
    button: Option<HtmlButtonElement>,
}

impl DomSendCodeForm {
    /// `None` on pages without the form.
    pub fn locate() -> Option<Self> {
        Some(Self {
            form: element_by_id(ids::SEND_CODE_FORM)?,
            email: element_by_id(ids::EMAIL),
            email_confirm: element_by_id(ids::EMAIL_CONFIRM),
            status: element_by_id(ids::STATUS),
            hint: element_by_id(ids::HINT),
            button: element_by_id(ids::BUTTON),
        })
    }

    pub fn json_endpoint(&self) -> String {
        conf::json_endpoint(
            self.form.get_attribute("action").as_deref(),
            data_value(&self.form, data::JSON_ACTION).as_deref(),
        )
    }

    pub fn sender(&self) -> FetchSender {
        FetchSender::new(self.form.clone(), self.json_endpoint())
    }
}

fn input_value(input: &Option<HtmlInputElement>) -> String {
    input.as_ref().map(HtmlInputElement::value).unwrap_or_default()
}

impl CooldownView for DomSendCodeForm {
    fn set_hint(&self, text: &str) {
        if let Some(hint) = &self.hint {
            hint.set_text_content(Some(text));
        }
    }

    fn button_label(&self) -> String {
        self.button
            .as_ref()
            .and_then(|button| button.text_content())
            .unwrap_or_default()
    }

    fn set_button_label(&self, label: &str) {
        if let Some(button) = &self.button {
            button.set_text_content(Some(label));
        }
    }

    fn button_disabled(&self) -> bool {
        self.button
            .as_ref()
            .map(HtmlButtonElement::disabled)
            .unwrap_or(false)
    }

    fn set_button_disabled(&self, disabled: bool) {
        if let Some(button) = &self.button {
            button.set_disabled(disabled);
        }
    }
}

impl SendCodeView for DomSendCodeForm {
    fn email(&self) -> String {
        input_value(&self.email)
    }

    fn email_confirm(&self) -> String {
        input_value(&self.email_confirm)
    }

    fn texts(&self) -> SendCodeTexts {
        SendCodeTexts::with_overrides(
            data_value(&self.form, data::ERR_MISMATCH),
            data_value(&self.form, data::SENDING),
            data_value(&self.form, data::RESEND_IN),
        )
    }

    fn set_status(&self, text: &str, tone: StatusTone) {
        if let Some(status) = &self.status {
            status.set_text_content(Some(text));
            status.set_class_name(match tone {
                StatusTone::Info => STATUS_CLASS,
                StatusTone::Error => STATUS_ERROR_CLASS,
            });
        }
    }

    fn clear_status(&self) {
        if let Some(status) = &self.status {
            status.set_text_content(Some(""));
        }
    }

    fn set_shadow_emails(&self, email: &str, email_confirm: &str) {
        if let Some(shadow) = element_by_id::<HtmlInputElement>(ids::SHADOW_EMAIL) {
            shadow.set_value(email);
        }
        if let Some(shadow) = element_by_id::<HtmlInputElement>(ids::SHADOW_EMAIL_CONFIRM) {
            shadow.set_value(email_confirm);
        }
    }

    fn submit_natively(&self) {
        // `submit()` skips the submit event, so this handler is not re-entered
        if let Err(err) = self.form.submit() {
            console::error!("native submit failed", err);
        }
    }
}

/// Wires the verification-code form, if the page has one.
pub fn setup_send_code() -> bool {
    let Some(form) = DomSendCodeForm::locate() else {
        console::log!("send-code form absent");
        return false;
    };

    let target = form.form.clone();
    EventListener::new_with_options(
        &target,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let view = form.clone();

            match begin(&view, Capability::detect()) {
                Interception::Passthrough => {
                    console::log!("fetch unavailable, submitting natively");
                }
                Interception::Intercept => {
                    event.prevent_default();
                    wasm_bindgen_futures::spawn_local(run_attempt(view));
                }
            }
        },
    )
    .forget();

    true
}

async fn run_attempt(view: DomSendCodeForm) {
    let sender = view.sender();

    match submit_attempt(&view, &sender).await {
        Attempt::Busy => {
            console::log!("send-code: cooldown in progress, ignored");
        }
        Attempt::Rejected => {
            console::log!("send-code: emails do not match");
        }
        Attempt::Refused => {
            console::log!("send-code: refused by server");
        }
        Attempt::FellBack(err) => {
            console::warn!(format!(
                "send-code: {} failed, submitted natively: {}",
                sender.endpoint(),
                err.trace_message()
            ));
        }
        Attempt::Sent(countdown) => {
            console::log!("send-code: sent");
            countdown.run(&view, IntervalStream::new(TICK_MS)).await;
        }
    }
}
