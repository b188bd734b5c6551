// Page contract: element ids, selectors, default texts and timings
//

pub static TOGGLE_BUTTON_SELECTOR: &str = ".pw-toggle, .eye-btn";
pub static ICON_VISIBLE_SELECTOR: &str = ".icon-eye";
pub static ICON_HIDDEN_SELECTOR: &str = ".icon-eye-off";

pub static DEFAULT_SHOW_LABEL: &str = "Show password";
pub static DEFAULT_HIDE_LABEL: &str = "Hide password";

pub static DEFAULT_MISMATCH_TEXT: &str = "メールアドレスが一致しません";
pub static DEFAULT_SENDING_TEXT: &str = "送信中…";
pub static DEFAULT_RESEND_PREFIX: &str = "再送まで";

pub static STATUS_CLASS: &str = "msg";
pub static STATUS_ERROR_CLASS: &str = "msg error";

pub static DEFAULT_SEND_CODE_ACTION: &str = "/register/send-code";
pub static JSON_SUFFIX: &str = ".json";

pub const COOLDOWN_SECS: u32 = 60;
pub const TICK_MS: u32 = 1_000;
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Ids of the elements making up the verification-code form.
pub mod ids {
    pub static SEND_CODE_FORM: &str = "sendCodeForm";
    pub static EMAIL: &str = "email";
    pub static EMAIL_CONFIRM: &str = "email_confirm";
    pub static STATUS: &str = "codeStatus";
    pub static HINT: &str = "sendCodeHint";
    pub static BUTTON: &str = "sendCodeBtn";
    pub static SHADOW_EMAIL: &str = "email2";
    pub static SHADOW_EMAIL_CONFIRM: &str = "email2_confirm";
}

/// `data-*` keys, in the camel-cased form `HTMLElement.dataset` exposes.
pub mod data {
    pub static TARGET: &str = "target";
    pub static LABEL_SHOW: &str = "labelShow";
    pub static LABEL_HIDE: &str = "labelHide";
    pub static ERR_MISMATCH: &str = "errMismatch";
    pub static SENDING: &str = "sending";
    pub static RESEND_IN: &str = "resendIn";
    pub static JSON_ACTION: &str = "jsonAction";
}

/// Labels a toggle button switches between.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleLabels {
    pub show: String,
    pub hide: String,
}

impl Default for ToggleLabels {
    fn default() -> Self {
        Self {
            show: DEFAULT_SHOW_LABEL.into(),
            hide: DEFAULT_HIDE_LABEL.into(),
        }
    }
}

impl ToggleLabels {
    pub fn with_overrides(show: Option<String>, hide: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            show: non_empty(show).unwrap_or(defaults.show),
            hide: non_empty(hide).unwrap_or(defaults.hide),
        }
    }
}

/// User-facing texts of the send-code form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendCodeTexts {
    pub mismatch: String,
    pub sending: String,
    pub resend_prefix: String,
}

impl Default for SendCodeTexts {
    fn default() -> Self {
        Self {
            mismatch: DEFAULT_MISMATCH_TEXT.into(),
            sending: DEFAULT_SENDING_TEXT.into(),
            resend_prefix: DEFAULT_RESEND_PREFIX.into(),
        }
    }
}

impl SendCodeTexts {
    pub fn with_overrides(
        mismatch: Option<String>,
        sending: Option<String>,
        resend_prefix: Option<String>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            mismatch: non_empty(mismatch).unwrap_or(defaults.mismatch),
            sending: non_empty(sending).unwrap_or(defaults.sending),
            resend_prefix: non_empty(resend_prefix).unwrap_or(defaults.resend_prefix),
        }
    }
}

pub fn resend_countdown_text(prefix: &str, remaining: u32) -> String {
    format!("{} {}s", prefix, remaining)
}

/// Endpoint of the asynchronous send-code request.
///
/// An explicit override wins; otherwise the form's action gets the `.json`
/// suffix, or the default action does when the form declares none.
pub fn json_endpoint(action: Option<&str>, explicit: Option<&str>) -> String {
    if let Some(explicit) = explicit.map(str::trim).filter(|v| !v.is_empty()) {
        return explicit.to_owned();
    }

    let action = action
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_SEND_CODE_ACTION);

    format!("{}{}", action, JSON_SUFFIX)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
