//! Verification-code request flow.
//!
//! An attempt is intercepted only when the page can issue background
//! requests. A failed background request hands the form back to the
//! browser's native submission, and the shadow email fields are synced on
//! every path.

use crate::conf::COOLDOWN_SECS;
use crate::cooldown::Countdown;
use crate::error::SendCodeError;
use crate::view::{SendCodeView, StatusTone};
use serde::{Deserialize, Deserializer};

/// Whether background requests are available for this attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Supported,
    Unsupported,
}

/// What the submit handler does with the native submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interception {
    Intercept,
    Passthrough,
}

/// Body returned by the JSON send-code endpoint.
///
/// Absent and `null` fields both read as their defaults.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SendCodeResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub ok: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Issues the background send-code request with the form's current fields.
#[allow(async_fn_in_trait)]
pub trait CodeSender {
    async fn send(&self) -> Result<SendCodeResponse, SendCodeError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailPair {
    pub email: String,
    pub email_confirm: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch;

impl EmailPair {
    pub fn read<V: SendCodeView>(view: &V) -> Self {
        Self {
            email: view.email().trim().to_owned(),
            email_confirm: view.email_confirm().trim().to_owned(),
        }
    }

    pub fn validate(&self) -> Result<(), Mismatch> {
        if self.email.is_empty()
            || self.email_confirm.is_empty()
            || self.email != self.email_confirm
        {
            Err(Mismatch)
        } else {
            Ok(())
        }
    }

    pub fn sync_shadow<V: SendCodeView>(&self, view: &V) {
        view.set_shadow_emails(&self.email, &self.email_confirm);
    }
}

/// Outcome of one intercepted submission.
#[derive(Debug)]
pub enum Attempt {
    /// The trigger is disabled, a request or cooldown is in flight.
    Busy,
    /// Emails empty or different; nothing was sent.
    Rejected,
    /// The server accepted the request; the cooldown is pending.
    Sent(Countdown),
    /// The server answered `ok: false`.
    Refused,
    /// The background request failed and the form was submitted natively.
    FellBack(SendCodeError),
}

/// Decides whether to take over the submission.
///
/// On passthrough the shadow fields are synced here, since the native
/// submission carries the form away.
pub fn begin<V: SendCodeView>(view: &V, capability: Capability) -> Interception {
    match capability {
        Capability::Supported => Interception::Intercept,
        Capability::Unsupported => {
            EmailPair::read(view).sync_shadow(view);
            Interception::Passthrough
        }
    }
}

/// Runs an intercepted submission up to the start of the cooldown.
pub async fn submit_attempt<V, S>(view: &V, sender: &S) -> Attempt
where
    V: SendCodeView,
    S: CodeSender,
{
    let emails = EmailPair::read(view);

    if view.button_disabled() {
        emails.sync_shadow(view);
        return Attempt::Busy;
    }

    let texts = view.texts();
    let attempt = match emails.validate() {
        Err(Mismatch) => {
            view.set_status(&texts.mismatch, StatusTone::Error);
            Attempt::Rejected
        }
        Ok(()) => {
            view.set_button_disabled(true);
            view.set_hint(&texts.sending);
            view.clear_status();

            match sender.send().await {
                Ok(response) => {
                    view.set_status(&response.message, StatusTone::from_ok(response.ok));
                    if response.ok {
                        let countdown = Countdown::start(view, COOLDOWN_SECS, texts.resend_prefix);
                        Attempt::Sent(countdown)
                    } else {
                        view.set_hint("");
                        view.set_button_disabled(false);
                        Attempt::Refused
                    }
                }
                Err(err) => {
                    emails.sync_shadow(view);
                    view.submit_natively();
                    return Attempt::FellBack(err);
                }
            }
        }
    };

    emails.sync_shadow(view);
    attempt
}
