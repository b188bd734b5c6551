//! Element-state seams between the form logic and the page.
//!
//! Implementations own how elements are found; a missing element reads as
//! empty and ignores writes.

use crate::conf::{SendCodeTexts, ToggleLabels};

/// Visibility mode of a password input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Masked,
    Revealed,
}

impl InputMode {
    pub fn from_input_type(input_type: &str) -> Self {
        if input_type.eq_ignore_ascii_case("password") {
            Self::Masked
        } else {
            Self::Revealed
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            Self::Masked => "password",
            Self::Revealed => "text",
        }
    }

    /// `display` values of the (visible, hidden) icon pair for this mode.
    pub fn icon_displays(self) -> (&'static str, &'static str) {
        match self {
            Self::Masked => ("inline", "none"),
            Self::Revealed => ("none", "inline"),
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Masked => Self::Revealed,
            Self::Revealed => Self::Masked,
        }
    }
}

/// Styling of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Error,
}

impl StatusTone {
    pub fn from_ok(ok: bool) -> Self {
        if ok {
            Self::Info
        } else {
            Self::Error
        }
    }
}

/// A toggle button together with the input it controls.
pub trait ToggleView {
    /// `None` when the button references no existing input.
    fn target_mode(&self) -> Option<InputMode>;
    fn set_target_mode(&self, mode: InputMode);
    fn labels(&self) -> ToggleLabels;
    fn set_label(&self, label: &str);
    /// Whether the button holds both the visible and the hidden icon.
    fn has_icon_pair(&self) -> bool;
    fn set_icon_displays(&self, visible: &str, hidden: &str);
}

/// The hint line and trigger button a cooldown drives.
pub trait CooldownView {
    fn set_hint(&self, text: &str);
    fn button_label(&self) -> String;
    fn set_button_label(&self, label: &str);
    fn button_disabled(&self) -> bool;
    fn set_button_disabled(&self, disabled: bool);
}

/// The verification-code form.
pub trait SendCodeView: CooldownView {
    fn email(&self) -> String;
    fn email_confirm(&self) -> String;
    fn texts(&self) -> SendCodeTexts;
    fn set_status(&self, text: &str, tone: StatusTone);
    /// Empties the status text, leaving its styling.
    fn clear_status(&self);
    /// Writes the shadow fields that exist.
    fn set_shadow_emails(&self, email: &str, email_confirm: &str);
    /// Native, non-intercepted form submission.
    fn submit_natively(&self);
}
